use std::path::Path;

use anyhow::Result;
use eframe::egui::{self, Color32, RichText, Ui};

use crate::app::{AppEvent, Notice};
use crate::download;

pub mod about;
pub mod charts;
pub mod dashboard;
pub mod home;
pub mod nav;

pub const ACCENT: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb);

/// Bordered section with an optional heading.
pub fn card<R>(ui: &mut Ui, title: Option<&str>, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            if let Some(title) = title {
                ui.label(RichText::new(title).strong().size(16.0));
                ui.add_space(6.0);
            }
            add_contents(ui)
        })
        .inner
}

/// Small card with a coloured headline and a caption.
pub fn highlight(ui: &mut Ui, headline: &str, caption: &str, color: Color32) {
    card(ui, None, |ui: &mut Ui| {
        ui.label(RichText::new(headline).strong().color(color));
        ui.label(caption);
    });
}

/// Prompt for a destination and write the CSV through `save`, reporting the
/// outcome as a notice.
pub fn offer_download<F>(file_name: &str, save: F, events: &mut Vec<AppEvent>)
where
    F: FnOnce(&Path) -> Result<()>,
{
    let Some(dest) = download::choose_destination(file_name) else {
        return;
    };
    match save(&dest) {
        Ok(()) => events.push(AppEvent::Notify(Notice::success(format!(
            "Données enregistrées dans {}",
            dest.display()
        )))),
        Err(e) => {
            log::error!("Download failed: {e:#}");
            events.push(AppEvent::Notify(Notice::error(format!(
                "Échec du téléchargement : {e:#}"
            ))));
        }
    }
}
