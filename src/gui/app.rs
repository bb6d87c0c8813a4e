// src/gui/app.rs
use std::{
    error::Error,
    path::Path,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::ExportOptions,
        state::AppState,
    },
    dom::Rewrite,
    file,
    runner::{rewrite_html, Rewritten},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Currency Formatter",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX
    pub out_path_text: String,

    // loaded document and its current rewrite
    pub source_html: Option<String>,
    pub rewrites: Vec<Rewrite>,
    pub rendered: String,

    // status line
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = ExportOptions::default_gui_path().to_string_lossy().into_owned();
        logf!("Init: class='{}', rounding={}",
            state.options.rewrite.class_name,
            state.options.format.rounding.label()
        );

        Self {
            state,
            out_path_text,
            source_html: None,
            rewrites: Vec::new(),
            rendered: s!(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Read the HTML file named in the path field and rewrite it.
    pub fn load_document(&mut self) {
        let path_text = self.state.gui.source_path.trim().to_string();
        if path_text.is_empty() {
            self.status("Enter an HTML file path first");
            return;
        }

        match file::read_input(Some(Path::new(&path_text))) {
            Ok(html) => {
                logf!("Load: {} ({} bytes)", path_text, html.len());
                self.source_html = Some(html);
                self.reformat();
            }
            Err(e) => {
                loge!("Load: {}", e);
                self.status(format!("Load error: {e}"));
            }
        }
    }

    /// Recompute the rewrite of the loaded document with current options.
    pub fn reformat(&mut self) {
        let Some(html) = &self.source_html else { return };
        let Rewritten { html, rewrites } = rewrite_html(html, &self.state.options);
        let unparsed = rewrites.iter().filter(|r| !r.parsed).count();
        self.status(format!(
            "{} element(s) with class '{}'; {} without a number",
            rewrites.len(),
            self.state.options.rewrite.class_name,
            unparsed
        ));
        logd!("Reformat: elements={}, unparsed={}", rewrites.len(), unparsed);
        self.rendered = html;
        self.rewrites = rewrites;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("amount")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::amount_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::document_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
