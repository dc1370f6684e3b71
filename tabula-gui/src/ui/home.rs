//! Central home panel: greeting and date.

use eframe::egui::{self, RichText, Sense};

use crate::app::TabulaApp;
use crate::ui::colors;

/// Render the greeting and the clickable date.
pub fn render(app: &mut TabulaApp, ui: &mut egui::Ui) {
    let muted = colors::muted(ui.visuals());

    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.35).max(0.0));

        ui.label(RichText::new(&app.greeting).size(34.0).strong());
        ui.add_space(4.0);

        // Clicking re-renders the date in case the session crossed midnight.
        let date = ui
            .add(
                egui::Label::new(RichText::new(&app.date_text).size(16.0).color(muted))
                    .sense(Sense::click()),
            )
            .on_hover_text("Click to refresh");
        if date.clicked() {
            app.refresh_date();
        }
    });
}
