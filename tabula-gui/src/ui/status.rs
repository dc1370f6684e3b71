//! Status bar at the bottom of the window.

use eframe::egui::{self, RichText};

use crate::app::TabulaApp;
use crate::ui::colors;

/// Render the status bar.
pub fn render(app: &TabulaApp, ui: &mut egui::Ui) {
    let muted = colors::muted(ui.visuals());

    ui.horizontal(|ui| {
        // Status message
        if let Some((msg, _)) = &app.status_message {
            ui.label(RichText::new(msg).size(11.0).color(muted));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("v{}", tabula_core::VERSION))
                    .size(11.0)
                    .color(muted),
            );
        });
    });
}
