// src/gui/components/header_bar.rs

use eframe::egui::{self, Align, Layout, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Club Member Directory").strong());
        ui.separator();

        if ui.button("Reload").clicked() {
            app.reload();
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(status);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if let Some(dir) = &app.directory {
                ui.label(format!("{} members", dir.len()));
            }
        });
    });
}
