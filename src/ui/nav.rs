use eframe::egui::{self, Color32, RichText, Ui};

use super::ACCENT;
use crate::app::{AppEvent, Notice, Page};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

const LINKS: [(Page, &str); 3] = [
    (Page::Home, "Accueil"),
    (Page::Dashboard, "Tableau de Bord"),
    (Page::About, "À Propos"),
];

/// Brand on the left, page links on the right; the active page is highlighted.
pub fn top_bar(ui: &mut Ui, current: Page, events: &mut Vec<AppEvent>) {
    ui.add_space(4.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("CyberAnalytics").strong().size(20.0).color(ACCENT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            for (page, label) in LINKS.iter().rev() {
                let text = if *page == current {
                    RichText::new(*label).color(ACCENT).strong()
                } else {
                    RichText::new(*label)
                };
                if ui.selectable_label(*page == current, text).clicked() {
                    events.push(AppEvent::Navigate(*page));
                }
            }
        });
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Footer and notices
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(4.0);
        ui.label("© 2025 CyberAnalytics. Analyse des Cyberattaques par Secteur");
        ui.small("Données sources: Verizon DBIR 2025, IBM Cost of a Data Breach 2024");
        ui.add_space(4.0);
    });
}

pub fn notice(ui: &mut Ui, notice: &Notice) {
    let color = if notice.is_error {
        Color32::RED
    } else {
        Color32::from_rgb(0x16, 0xa3, 0x4a)
    };
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(&notice.text).strong().color(color));
    });
    ui.separator();
}
