// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    file,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut do_export = false;
    let prev_fmt = app.state.options.export.format;

    ui.horizontal(|ui| {
        {
            let export = &mut app.state.options.export;

            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.checkbox(&mut export.include_headers, "Include headers");
        }

        ui.label("Out:");
        let resp = ui.text_edit_singleline(&mut app.out_path_text);
        if resp.changed() {
            app.out_path_dirty = true;
        }

        let enabled = app.directory.is_some();
        if ui.add_enabled(enabled, egui::Button::new("Export")).clicked() {
            do_export = true;
        }
    });

    if app.state.options.export.format != prev_fmt {
        logf!("UI: Export format → {:?}", app.state.options.export.format);
        // If the user hasn't typed a path, refresh the text field so the
        // extension follows the format.
        if !app.out_path_dirty {
            app.out_path_text = app
                .state
                .options
                .export
                .out_path()
                .to_string_lossy()
                .into_owned();
        }
    }

    if do_export {
        if app.out_path_dirty {
            let text = app.out_path_text.clone();
            app.state.options.export.set_path(&text);
        }

        let result = app
            .directory
            .as_ref()
            .map(|dir| file::write_export(&app.state.options.export, dir.persons()));

        match result {
            Some(Ok(path)) => {
                logf!("Export: OK → {}", path.display());
                app.status(format!("Exported → {}", path.display()));
            }
            Some(Err(e)) => {
                loge!("Export: failed: {}", e);
                app.status(format!("Export failed: {e}"));
            }
            None => {}
        }
    }
}
