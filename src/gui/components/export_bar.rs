// src/gui/components/export_bar.rs

use std::path::PathBuf;

use eframe::egui;

use crate::{file, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            logd!("UI: out_path_text changed → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            if app.source_html.is_none() {
                app.status("Nothing to copy");
                logd!("Copy: Clicked, but nothing is loaded");
            } else {
                ui.ctx().copy_text(app.rendered.clone());
                logf!("Copy: {} bytes", app.rendered.len());
                app.status("Copied to clipboard");
            }
        }

        if ui.button("Export").clicked() {
            if app.source_html.is_none() {
                app.status("Nothing to export");
                logd!("Export: Clicked, but nothing is loaded");
            } else {
                let path = PathBuf::from(file::normalize_separators(app.out_path_text.trim()));
                match file::write_output(Some(&path), &app.rendered) {
                    Ok(()) => {
                        logf!("Export: OK {}", path.display());
                        app.status(format!("Exported {}", path.display()));
                    }
                    Err(e) => {
                        loge!("Export: Error: {}", e);
                        app.status(format!("Export error: {e}"));
                    }
                }
            }
        }

        ui.separator();
        ui.label(format!("Status: {}", app.status_text()));
    });
}
