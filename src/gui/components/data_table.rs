// src/gui/components/data_table.rs
//
// Before/after table for the loaded document. Purely a view.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{core::sanitize::normalize_ws, gui::app::App};

const HEADERS: [&str; 3] = ["#", "Before", "After"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.rewrites.is_empty() {
        ui.label(RichText::new("No matching elements").weak());
        return;
    }

    let avail_h = ui.available_height();
    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(avail_h)
        .column(Column::auto().at_least(30.0))
        .column(Column::initial(240.0).resizable(true).clip(true))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|body| {
            body.rows(18.0, app.rewrites.len(), |mut row| {
                let Some(rw) = app.rewrites.get(row.index()) else { return };
                row.col(|ui| { ui.label(rw.index.to_string()); });
                row.col(|ui| {
                    let before = normalize_ws(&rw.before);
                    if rw.parsed {
                        ui.label(before);
                    } else {
                        ui.label(RichText::new(before).italics().weak());
                    }
                });
                row.col(|ui| { ui.label(RichText::new(&rw.after).monospace()); });
            });
        });
}
