use std::path::{Path, PathBuf};

use eframe::egui::{self, Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::{Severity, sector_palette};
use crate::data::model::SectorRecord;

// ---------------------------------------------------------------------------
// Dashboard charts
// ---------------------------------------------------------------------------

/// The three charts of the dashboard. Each one is a pre-rendered PNG when
/// present, otherwise drawn from the loaded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    AverageCost,
    IncidentsVsBreaches,
    Ratio,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::AverageCost,
        ChartKind::IncidentsVsBreaches,
        ChartKind::Ratio,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::AverageCost => "cout_moyen_violation_secteur.png",
            ChartKind::IncidentsVsBreaches => "incidents_violations_secteur.png",
            ChartKind::Ratio => "ratio_violation_incident.png",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::AverageCost => "Coût Moyen d'une Violation de Données",
            ChartKind::IncidentsVsBreaches => "Incidents et Violations",
            ChartKind::Ratio => "Ratio Vulnérabilité",
        }
    }

    fn plot_id(self) -> &'static str {
        match self {
            ChartKind::AverageCost => "chart_cost",
            ChartKind::IncidentsVsBreaches => "chart_incidents",
            ChartKind::Ratio => "chart_ratio",
        }
    }
}

/// Location of the pre-rendered image for `kind` under `chart_dir`.
pub fn image_path(chart_dir: &Path, kind: ChartKind) -> PathBuf {
    chart_dir.join(kind.file_name())
}

/// `file://` URI understood by the egui_extras file loader.
fn file_uri(path: &Path) -> String {
    let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", absolute.display())
}

/// Render one chart body (no frame).
pub fn chart(ui: &mut Ui, kind: ChartKind, chart_dir: &Path, records: &[SectorRecord]) {
    let path = image_path(chart_dir, kind);
    if path.is_file() {
        ui.add(
            egui::Image::new(file_uri(&path))
                .max_width(ui.available_width())
                .maintain_aspect_ratio(true),
        );
    } else if records.is_empty() {
        ui.label("Aucune donnée à afficher.");
    } else {
        bar_chart(ui, kind, records);
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

fn bar_chart(ui: &mut Ui, kind: ChartKind, records: &[SectorRecord]) {
    let names: Vec<String> = records.iter().map(|r| r.sector.clone()).collect();

    Plot::new(kind.plot_id())
        .height(260.0)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid([false, true])
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            names.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| match kind {
            ChartKind::AverageCost => {
                let colors = sector_palette(records.len());
                let bars = records
                    .iter()
                    .zip(colors)
                    .enumerate()
                    .map(|(i, (r, color))| {
                        Bar::new(i as f64, finite_or_zero(r.average_breach_cost_musd))
                            .name(&r.sector)
                            .fill(color)
                            .width(0.6)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name("Coût moyen (M USD)"));
            }
            ChartKind::IncidentsVsBreaches => {
                let series = |offset: f64, value: fn(&SectorRecord) -> Option<i64>| -> Vec<Bar> {
                    records
                        .iter()
                        .enumerate()
                        .map(|(i, r)| {
                            Bar::new(i as f64 + offset, value(r).unwrap_or(0) as f64)
                                .name(&r.sector)
                                .width(0.38)
                        })
                        .collect()
                };
                plot_ui.bar_chart(
                    BarChart::new(series(-0.2, |r| r.incident_count))
                        .name("Incidents")
                        .color(Color32::from_rgb(0x25, 0x63, 0xeb)),
                );
                plot_ui.bar_chart(
                    BarChart::new(series(0.2, |r| r.breach_count))
                        .name("Violations")
                        .color(Color32::from_rgb(0xdc, 0x26, 0x26)),
                );
            }
            ChartKind::Ratio => {
                let bars = records
                    .iter()
                    .enumerate()
                    .map(|(i, r)| {
                        let (fg, _) = Severity::of_ratio(r.breach_to_incident_ratio).colors();
                        Bar::new(i as f64, finite_or_zero(r.breach_to_incident_ratio))
                            .name(&r.sector)
                            .fill(fg)
                            .width(0.6)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name("Ratio violations / incidents"));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_paths_use_fixed_names() {
        let dir = Path::new("assets");
        assert_eq!(
            image_path(dir, ChartKind::AverageCost),
            Path::new("assets/cout_moyen_violation_secteur.png")
        );
        assert_eq!(
            image_path(dir, ChartKind::IncidentsVsBreaches),
            Path::new("assets/incidents_violations_secteur.png")
        );
        assert_eq!(
            image_path(dir, ChartKind::Ratio),
            Path::new("assets/ratio_violation_incident.png")
        );
    }

    #[test]
    fn missing_image_keeps_relative_uri() {
        assert_eq!(file_uri(Path::new("no/such.png")), "file://no/such.png");
    }

    #[test]
    fn non_finite_bars_are_flat() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(0.5), 0.5);
    }
}
