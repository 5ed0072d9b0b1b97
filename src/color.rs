use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Sector colours for charts
// ---------------------------------------------------------------------------

/// `n` distinct bar colours, hues spread evenly starting from blue.
pub fn sector_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (210.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.65, 0.5).into_color();
            let [r, g, b] = [rgb.red, rgb.green, rgb.blue].map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8);
            Color32::from_rgb(r, g, b)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Breach-to-incident severity
// ---------------------------------------------------------------------------

/// Badge class of a breach-to-incident ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Above 0.9.
    High,
    /// Above 0.75.
    Elevated,
    /// Everything else, including NaN.
    Low,
}

impl Severity {
    pub fn of_ratio(ratio: f64) -> Self {
        if ratio > 0.9 {
            Severity::High
        } else if ratio > 0.75 {
            Severity::Elevated
        } else {
            Severity::Low
        }
    }

    /// (text, background) colours of the badge.
    pub fn colors(self) -> (Color32, Color32) {
        match self {
            Severity::High => (
                Color32::from_rgb(0x99, 0x1b, 0x1b),
                Color32::from_rgb(0xfe, 0xe2, 0xe2),
            ),
            Severity::Elevated => (
                Color32::from_rgb(0x9a, 0x34, 0x12),
                Color32::from_rgb(0xff, 0xed, 0xd5),
            ),
            Severity::Low => (
                Color32::from_rgb(0x16, 0x65, 0x34),
                Color32::from_rgb(0xdc, 0xfc, 0xe7),
            ),
        }
    }
}
