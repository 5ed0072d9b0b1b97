use std::time::Instant;

use eframe::egui::{self, Color32, RichText, Ui};

use super::{card, highlight};
use crate::app::{AppEvent, Notice};
use crate::config::Config;
use crate::contact::{ContactForm, ContactOutcome};

const SECTORS: [&str; 7] = [
    "Santé (Healthcare)",
    "Services Financiers (Financial Services)",
    "Industrie & Énergie (Industrial & Energy)",
    "IT & Télécommunications (IT & Telecommunications)",
    "Éducation & Recherche (Education & Research)",
    "Gouvernement & Services Publics (Government & Public Services)",
    "Commerce de Détail & E-commerce (Retail & E-commerce)",
];

const RECOMMENDATIONS: [&str; 6] = [
    "Adapter leur stratégie de cybersécurité en fonction de leur profil de risque spécifique",
    "Investir dans la formation des employés contre l'ingénierie sociale",
    "Adopter une approche Zero Trust pour la sécurité des accès",
    "Mettre en place une détection et une réponse gérées (MDR)",
    "Sécuriser les systèmes OT/IT dans les environnements industriels",
    "Chiffrer les données sensibles et implémenter l'authentification multi-facteurs",
];

// ---------------------------------------------------------------------------
// About page
// ---------------------------------------------------------------------------

pub struct AboutPage {
    form: ContactForm,
    /// Validation message of the last refused submission.
    form_error: Option<String>,
}

impl AboutPage {
    pub fn new(config: &Config) -> Self {
        Self {
            form: ContactForm::new(config.contact_delay()),
            form_error: None,
        }
    }

    pub fn show(&mut self, ui: &mut Ui, events: &mut Vec<AppEvent>) {
        let now = Instant::now();
        if let Some(ContactOutcome::Sent) = self.form.poll(now) {
            events.push(AppEvent::Notify(Notice::success("Message envoyé avec succès!")));
        }
        if let Some(remaining) = self.form.remaining(now) {
            ui.ctx().request_repaint_after(remaining);
        }

        ui.add_space(16.0);
        card(ui, None, |ui: &mut Ui| description(ui));
        ui.add_space(16.0);
        card(ui, Some("Nous Contacter"), |ui: &mut Ui| self.contact_form(ui, now));
        ui.add_space(16.0);
    }

    fn contact_form(&mut self, ui: &mut Ui, now: Instant) {
        let sending = self.form.is_sending();

        ui.add_enabled_ui(!sending, |ui: &mut Ui| {
            ui.label("Nom");
            ui.add(
                egui::TextEdit::singleline(&mut self.form.name)
                    .hint_text("Votre nom")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);
            ui.label("Email");
            ui.add(
                egui::TextEdit::singleline(&mut self.form.email)
                    .hint_text("votre.email@example.com")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);
            ui.label("Message");
            ui.add(
                egui::TextEdit::multiline(&mut self.form.message)
                    .hint_text("Votre message...")
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            );
        });
        ui.add_space(8.0);

        let label = if sending {
            "Envoi en cours..."
        } else {
            "Envoyer le Message"
        };
        if ui.add_enabled(!sending, egui::Button::new(label)).clicked() {
            match self.form.submit(now) {
                Ok(()) => self.form_error = None,
                Err(e) => {
                    log::warn!("Contact form refused: {e}");
                    self.form_error = Some(e.to_string());
                }
            }
        }
        if let Some(err) = &self.form_error {
            ui.label(RichText::new(err).color(Color32::RED));
        }
    }
}

fn description(ui: &mut Ui) {
    ui.label(RichText::new("À Propos de CyberAnalytics").size(30.0).strong());
    ui.add_space(8.0);
    ui.label(
        "CyberAnalytics est une plateforme d'analyse complète des cyberattaques par secteur \
         d'activité. Notre mission est de fournir des données fiables, des analyses approfondies \
         et des recommandations pratiques pour aider les organisations à comprendre et à \
         atténuer les risques de cybersécurité.",
    );

    section(ui, "Objectif du Projet");
    ui.label(
        "Ce projet collecte et analyse les données mensuelles/annuelles sur les cyberattaques \
         pour sept secteurs critiques:",
    );
    for sector in SECTORS {
        ui.label(format!("  • {sector}"));
    }

    section(ui, "Sources de Données");
    highlight(
        ui,
        "Verizon Data Breach Investigations Report (DBIR) 2025",
        "Rapport annuel analysant plus de 22,000 incidents de sécurité réels et 12,195 violations \
         de données confirmées à travers 139 pays.",
        Color32::from_rgb(0x1e, 0x3a, 0x8a),
    );
    highlight(
        ui,
        "IBM Cost of a Data Breach Report 2024",
        "Coût moyen d'une violation de données par secteur, basé sur 604 organisations ayant \
         subi une violation.",
        Color32::from_rgb(0x14, 0x53, 0x2d),
    );

    section(ui, "Insights Clés");
    ui.columns(2, |cols| {
        highlight(
            &mut cols[0],
            "Secteur le Plus Coûteux",
            "Santé: 9,77 M USD par violation",
            Color32::from_rgb(0x7f, 0x1d, 0x1d),
        );
        highlight(
            &mut cols[1],
            "Plus Grand Volume",
            "Industrie & Énergie: 4259 incidents",
            Color32::from_rgb(0x7c, 0x2d, 0x12),
        );
        highlight(
            &mut cols[0],
            "Plus Vulnérable",
            "IT & Télécoms: 0,98 ratio violation/incident",
            Color32::from_rgb(0x71, 0x3f, 0x12),
        );
        highlight(
            &mut cols[1],
            "Motif Dominant",
            "Financier: 90%+ des attaques",
            Color32::from_rgb(0x58, 0x1c, 0x87),
        );
    });

    section(ui, "Recommandations");
    ui.label("Sur la base de nos analyses, nous recommandons aux organisations:");
    for item in RECOMMENDATIONS {
        ui.label(format!("  • {item}"));
    }
}

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(14.0);
    ui.label(RichText::new(title).size(20.0).strong());
    ui.add_space(4.0);
}
