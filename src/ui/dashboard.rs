use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use super::charts::{self, ChartKind};
use super::{card, highlight, offer_download};
use crate::app::AppEvent;
use crate::color::Severity;
use crate::config::Config;
use crate::data::insights::Insights;
use crate::data::model::SectorRecord;
use crate::store::SectorDataStore;
use crate::{download, format};

const COLUMNS: [&str; 6] = [
    "Secteur",
    "Coût (M USD)",
    "Incidents",
    "Violations",
    "Ratio V/I",
    "Motif Principal",
];

// ---------------------------------------------------------------------------
// Dashboard page
// ---------------------------------------------------------------------------

/// Filterable sector table, charts and insights. Owns the data store for
/// as long as the page is open.
pub struct DashboardPage {
    store: SectorDataStore,
    insights: Insights,
}

impl DashboardPage {
    /// Open the page and start fetching the sector data.
    pub fn open(config: &Config, ctx: &egui::Context) -> Self {
        let mut store = SectorDataStore::default();
        let repaint = ctx.clone();
        store.load(config.data_path.clone(), move || repaint.request_repaint());
        Self {
            store,
            insights: Insights::default(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, config: &Config, events: &mut Vec<AppEvent>) {
        if self.store.poll() {
            self.insights = Insights::from_records(self.store.records());
        }

        ui.add_space(16.0);
        ui.label(RichText::new("Tableau de Bord Interactif").size(30.0).strong());
        ui.label("Analysez les cyberattaques par secteur avec filtrage et visualisations");
        ui.add_space(16.0);

        self.filter_bar(ui);
        ui.add_space(12.0);

        let can_download = self.store.raw_bytes().is_some();
        if ui
            .add_enabled(can_download, egui::Button::new("Télécharger CSV"))
            .clicked()
        {
            if let Some(bytes) = self.store.raw_bytes() {
                offer_download(
                    &config.download_file_name,
                    |dest| download::save_bytes(bytes, dest),
                    events,
                );
            }
        }
        ui.add_space(12.0);

        self.charts(ui, config);
        ui.add_space(16.0);

        card(ui, None, |ui: &mut Ui| self.table(ui));
        ui.add_space(16.0);

        self.insight_cards(ui);
        ui.add_space(16.0);
    }

    fn filter_bar(&mut self, ui: &mut Ui) {
        let options = self.store.distinct_sectors();
        card(ui, Some("Filtrer par Secteur"), |ui: &mut Ui| {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for option in options {
                    let is_selected = *self.store.selected() == option;
                    if ui.selectable_label(is_selected, option.label()).clicked() && !is_selected {
                        log::debug!("Filtering dashboard by {option}");
                        self.store.filter_by_sector(option);
                    }
                }
            });
        });
    }

    fn charts(&self, ui: &mut Ui, config: &Config) {
        let records = self.store.records();
        let [wide, left, right] = ChartKind::ALL;

        card(ui, Some(wide.title()), |ui: &mut Ui| {
            charts::chart(ui, wide, &config.chart_dir, records);
        });
        ui.add_space(8.0);
        ui.columns(2, |cols| {
            card(&mut cols[0], Some(left.title()), |ui: &mut Ui| {
                charts::chart(ui, left, &config.chart_dir, records);
            });
            card(&mut cols[1], Some(right.title()), |ui: &mut Ui| {
                charts::chart(ui, right, &config.chart_dir, records);
            });
        });
    }

    fn table(&self, ui: &mut Ui) {
        if self.store.is_loading() {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.spinner();
                ui.label("Chargement des données...");
            });
            return;
        }

        let rows = self.store.filtered_records();
        if rows.is_empty() {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label("Aucune donnée trouvée");
                if let Some(msg) = self.store.status_message() {
                    ui.small(RichText::new(msg).color(Color32::GRAY));
                }
            });
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(200.0))
            .columns(Column::auto().at_least(100.0), 4)
            .column(Column::remainder())
            .header(24.0, |mut header| {
                for title in COLUMNS {
                    header.col(|ui: &mut Ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for record in rows {
                    body.row(24.0, |mut row| table_row(&mut row, record));
                }
            });
    }

    fn insight_cards(&self, ui: &mut Ui) {
        let Insights {
            most_costly,
            largest_volume,
            most_vulnerable,
        } = &self.insights;

        ui.columns(3, |cols| {
            if let Some(r) = most_costly {
                highlight(
                    &mut cols[0],
                    "Secteur le Plus Coûteux",
                    &format!("{}: {} par violation", r.sector, format::cost_musd(r.average_breach_cost_musd)),
                    Color32::from_rgb(0x1e, 0x3a, 0x8a),
                );
            }
            if let Some(r) = largest_volume {
                highlight(
                    &mut cols[1],
                    "Plus Grand Volume",
                    &format!(
                        "{}: {} incidents, {} violations",
                        r.sector,
                        format::count(r.incident_count),
                        format::count(r.breach_count)
                    ),
                    Color32::from_rgb(0x7f, 0x1d, 0x1d),
                );
            }
            if let Some(r) = most_vulnerable {
                highlight(
                    &mut cols[2],
                    "Plus Vulnérable",
                    &format!("{}: {} ratio", r.sector, format::ratio(r.breach_to_incident_ratio)),
                    Color32::from_rgb(0x7c, 0x2d, 0x12),
                );
            }
        });
    }
}

fn table_row(row: &mut egui_extras::TableRow<'_, '_>, record: &SectorRecord) {
    row.col(|ui: &mut Ui| {
        ui.strong(&record.sector);
    });
    row.col(|ui: &mut Ui| {
        ui.label(format::cost_musd(record.average_breach_cost_musd));
    });
    row.col(|ui: &mut Ui| {
        ui.label(format::count(record.incident_count));
    });
    row.col(|ui: &mut Ui| {
        ui.label(format::count(record.breach_count));
    });
    row.col(|ui: &mut Ui| {
        let (fg, bg) = Severity::of_ratio(record.breach_to_incident_ratio).colors();
        ui.label(
            RichText::new(format!(" {} ", format::ratio(record.breach_to_incident_ratio)))
                .color(fg)
                .background_color(bg)
                .strong(),
        );
    });
    row.col(|ui: &mut Ui| {
        ui.label(&record.primary_motive)
            .on_hover_text(record.top_patterns.join(" · "));
    });
}
