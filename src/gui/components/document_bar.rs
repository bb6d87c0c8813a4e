// src/gui/components/document_bar.rs

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("HTML file:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.source_path)
                .font(egui::TextStyle::Monospace)
                .desired_width(360.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || enter {
            app.load_document();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Class:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.options.rewrite.class_name)
                .font(egui::TextStyle::Monospace)
                .desired_width(160.0),
        );
        if resp.changed() {
            logd!("UI: class → '{}'", app.state.options.rewrite.class_name);
            app.reformat();
        }
    });
}
