// src/gui/app.rs
use std::error::Error;
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{
    config::state::{AppState, View},
    data::Directory,
    loader,
};

use super::{components, progress::GuiProgress, views};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Club Member Directory",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// Replaced wholesale by a successful load; None until the first one.
    pub directory: Option<Directory>,

    /// Whether the last load exhausted every source.
    pub load_failed: bool,

    // output text field UX (maps <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let mut app = Self {
            state,
            directory: None,
            load_failed: false,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };
        app.reload();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Run the full source chain and swap in the result. Blocking: the
    /// loader owns the UI thread while it runs.
    pub fn reload(&mut self) {
        logf!("Load: begin");
        let sources = loader::default_sources();
        let mut prog = GuiProgress::new(self.status.clone());

        match loader::load_directory(&sources, Some(&mut prog)) {
            Ok(dir) => {
                logf!("Load: OK ({} members, {} pages)", dir.len(), dir.total_pages());
                self.status(format!("Loaded {} members", dir.len()));
                self.directory = Some(dir);
                self.load_failed = false;
                self.state.gui.view = View::Toc;
                self.state.gui.card_page = 0;
                self.state.gui.focus_id = None;
            }
            Err(e) => {
                loge!("Load: failed: {}", e);
                self.status(format!("Error: {e}"));
                self.load_failed = true;
            }
        }
    }

    /// TOC click: show the card page containing `index` and highlight the
    /// card. Same navigation the ids encode for deep links.
    pub fn jump_to_card(&mut self, index: usize, id: &str) {
        if let Some(dir) = &self.directory {
            self.state.gui.card_page = dir.page_of(index);
            self.state.gui.focus_id = Some(s!(id));
            self.state.gui.view = View::Cards;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.gui.view {
                View::Toc => views::toc::draw(ui, self),
                View::Cards => views::cards::draw(ui, self),
            }
        });
    }
}
