// src/gui/components/amount_panel.rs
//
// Single-value preview: type anything, see exactly what an element would show.

use eframe::egui::{self, RichText};

use crate::{
    config::options::Rounding,
    format::{format_amount_with, parse_leading},
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Amount");
    ui.separator();

    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.sample_amount)
            .font(egui::TextStyle::Monospace)
            .hint_text("e.g. 1234.5"),
    );

    let opts = app.state.options.format;
    let shown = format_amount_with(&app.state.gui.sample_amount, &opts);

    ui.add_space(6.0);
    ui.label(RichText::new(format!("[{shown}]")).monospace().strong());
    if parse_leading(&app.state.gui.sample_amount).is_none() {
        ui.label(RichText::new("No number at the start; shown as zero").weak());
    }

    ui.add_space(10.0);
    ui.label("Ties:");
    let before = app.state.options.format.rounding;
    ui.horizontal(|ui| {
        let r = &mut app.state.options.format.rounding;
        ui.selectable_value(r, Rounding::HalfEven, "Half even");
        ui.selectable_value(r, Rounding::HalfAwayFromZero, "Away from zero");
    });
    if app.state.options.format.rounding != before {
        logf!("UI: rounding → {}", app.state.options.format.rounding.label());
        app.reformat();
    }
}
