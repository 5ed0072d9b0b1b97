use eframe::egui::{Color32, RichText, Ui};

use super::{ACCENT, card, highlight, offer_download};
use crate::app::{AppEvent, Page};
use crate::config::Config;
use crate::download;

const FEATURES: [(&str, &str); 4] = [
    (
        "Visualisations",
        "Graphiques des coûts, incidents et vulnérabilités",
    ),
    ("Filtrage", "Analysez les données par secteur avec filtres interactifs"),
    ("Téléchargement", "Exportez les données CSV et rapports d'analyse"),
    ("Recommandations", "Conseils de sécurité adaptés à chaque secteur"),
];

/// Landing page: hero, key figures, features, call to action.
pub fn show(ui: &mut Ui, config: &Config, events: &mut Vec<AppEvent>) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(40.0);
        ui.label(
            RichText::new("Analyse Complète des Cyberattaques par Secteur")
                .size(36.0)
                .strong(),
        );
        ui.add_space(12.0);
        ui.label(
            RichText::new(
                "Explorez les données, tendances et impacts des cyberattaques sur 7 secteurs \
                 critiques. Coûts, incidents, vulnérabilités et recommandations basées sur le \
                 DBIR 2025 et les rapports IBM.",
            )
            .size(16.0),
        );
        ui.add_space(20.0);

        ui.horizontal(|ui: &mut Ui| {
            if ui.button(RichText::new("Accéder au Tableau de Bord").size(16.0)).clicked() {
                events.push(AppEvent::Navigate(Page::Dashboard));
            }
            if ui.button(RichText::new("Télécharger les Données").size(16.0)).clicked() {
                offer_download(
                    &config.download_file_name,
                    |dest| download::save_resource(&config.data_path, dest),
                    events,
                );
            }
        });
    });

    ui.add_space(32.0);
    ui.columns(3, |cols| {
        highlight(
            &mut cols[0],
            "7 Secteurs Analysés",
            "Santé, Finance, Industrie, IT, Éducation, Gouvernement, Retail",
            ACCENT,
        );
        highlight(
            &mut cols[1],
            "22K+ Incidents Enregistrés",
            "Données agrégées du DBIR 2025",
            Color32::from_rgb(0xdc, 0x26, 0x26),
        );
        highlight(
            &mut cols[2],
            "9.77M Coût Maximal (USD)",
            "Violation de données en Santé",
            Color32::from_rgb(0x16, 0xa3, 0x4a),
        );
    });

    ui.add_space(32.0);
    card(ui, Some("Fonctionnalités"), |ui: &mut Ui| {
        ui.columns(FEATURES.len(), |cols| {
            for (col, (title, text)) in cols.iter_mut().zip(FEATURES) {
                col.label(RichText::new(title).strong());
                col.label(text);
            }
        });
    });

    ui.add_space(32.0);
    card(ui, None, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new("Prêt à explorer les données?").size(22.0).strong());
            ui.label("Accédez au tableau de bord interactif pour analyser les cyberattaques par secteur");
            ui.add_space(8.0);
            if ui.button("Lancer l'Analyse").clicked() {
                events.push(AppEvent::Navigate(Page::Dashboard));
            }
        });
    });
    ui.add_space(16.0);
}
