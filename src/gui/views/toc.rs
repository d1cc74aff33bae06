// src/gui/views/toc.rs
//
// Numbered member list. Clicking a name jumps to that member's card,
// the same navigation the card ids encode.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::config::state::View;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.directory.is_none() {
        let msg = if app.load_failed {
            "Failed to load member data. Please try again later."
        } else {
            "No data loaded yet."
        };
        ui.label(msg);
        return;
    }

    // Clicks are collected first and applied after the table releases its
    // borrow of the directory.
    let mut jump: Option<(usize, String)> = None;
    let mut show_cards = false;

    {
        let dir = app.directory.as_ref().unwrap();

        ui.horizontal(|ui| {
            ui.heading("Members");
            if ui.button("Show cards").clicked() {
                show_cards = true;
            }
        });
        ui.separator();

        let persons = dir.persons();
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::exact(40.0))
            .column(Column::remainder())
            .column(Column::remainder())
            .header(24.0, |mut header| {
                header.col(|ui| { ui.label(RichText::new("#").strong()); });
                header.col(|ui| { ui.label(RichText::new("Name").strong()); });
                header.col(|ui| { ui.label(RichText::new("Roman").strong()); });
            })
            .body(|body| {
                body.rows(22.0, persons.len(), |mut row| {
                    let p = &persons[row.index()];
                    row.col(|ui| {
                        ui.label(format!("{}", p.index + 1));
                    });
                    row.col(|ui| {
                        if ui.link(p.display_name()).clicked() {
                            jump = Some((p.index, p.id.clone()));
                        }
                    });
                    row.col(|ui| {
                        ui.label(&p.name_roman);
                    });
                });
            });
    }

    if show_cards {
        app.state.gui.view = View::Cards;
        app.state.gui.card_page = 0;
        app.state.gui.focus_id = None;
    }
    if let Some((index, id)) = jump {
        app.jump_to_card(index, &id);
    }
}
