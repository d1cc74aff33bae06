// src/gui/views/cards.rs
//
// Paginated card grid. One page holds CARDS_PER_PAGE members; Prev/Next
// stay clamped to the page range.

use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Stroke};

use crate::config::state::View;
use crate::gui::app::App;
use crate::specs::person::Person;

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

    let (total_pages, cur) = {
        let dir = app.directory.as_ref().unwrap();
        (dir.total_pages(), app.state.gui.card_page)
    };

    let mut back = false;
    let mut delta: i32 = 0;

    ui.horizontal(|ui| {
        if ui.link("Back to list").clicked() {
            back = true;
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.add_enabled(cur + 1 < total_pages, egui::Button::new("Next")).clicked() {
                delta = 1;
            }
            ui.label(format!("Page {} / {}", cur + 1, total_pages));
            if ui.add_enabled(cur > 0, egui::Button::new("Prev")).clicked() {
                delta = -1;
            }
        });
    });
    ui.separator();

    {
        let dir = app.directory.as_ref().unwrap();
        let focus = app.state.gui.focus_id.clone();

        ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for p in dir.page(cur) {
                    let focused = focus.as_deref() == Some(p.id.as_str());
                    draw_card(ui, p, focused);
                }
            });
        });
    }

    if back {
        app.state.gui.view = View::Toc;
        app.state.gui.focus_id = None;
    }
    if delta != 0 {
        let next = (cur as i32 + delta).clamp(0, total_pages as i32 - 1) as usize;
        app.state.gui.card_page = next;
        app.state.gui.focus_id = None;
    }
}

fn draw_card(ui: &mut egui::Ui, p: &Person, focused: bool) {
    let mut frame = egui::Frame::group(ui.style());
    if focused {
        frame = frame.stroke(Stroke::new(2.0, ui.visuals().selection.stroke.color));
    }

    frame.show(ui, |ui| {
        ui.set_width(240.0);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                // Avatar stand-in; remote photo bytes are never fetched.
                ui.label(RichText::new(p.initials()).heading());
                ui.vertical(|ui| {
                    ui.label(RichText::new(p.display_name()).strong());
                    if !p.name_roman.is_empty() && p.name_roman != p.name_local {
                        ui.label(RichText::new(&p.name_roman).weak());
                    }
                });
            });
            ui.separator();

            kv(ui, "Birthdate", &p.birthdate);
            kv(ui, "Major", &p.major);
            kv(ui, "Grade", &p.grade);
            kv(ui, "Kendo Exp.", &p.years);
            kv(ui, "Hobbies", &p.hobbies);
            kv(ui, "Other Skills", &p.skills);

            if !p.greeting.is_empty() {
                ui.separator();
                ui.label(RichText::new(&p.greeting).italics());
            }
            if !p.photo.is_empty() {
                ui.hyperlink_to("Photo", &p.photo);
            }
        });
    });
}

fn kv(ui: &mut egui::Ui, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).weak());
        ui.label(value);
    });
}
