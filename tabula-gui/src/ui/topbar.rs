//! Top bar with the launcher trigger, customize action, and theme control.

use std::time::Instant;

use eframe::egui::{self, RichText};

use tabula_core::{Theme, ThemeControl};

use crate::app::TabulaApp;

/// Render the top bar.
pub fn render(app: &mut TabulaApp, ui: &mut egui::Ui, ctx: &egui::Context, now: Instant) {
    egui::menu::bar(ui, |ui| {
        // App title
        ui.label(RichText::new("Tabula").strong().size(15.0));
        ui.separator();

        // Right-aligned controls
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match app.config.theme_control {
                ThemeControl::Icon => {
                    // Sun icon in dark mode, moon icon in light mode
                    let icon = if app.theme == Theme::Dark { "☀" } else { "🌙" };
                    if ui
                        .button(RichText::new(icon).size(15.0))
                        .on_hover_text("Toggle theme")
                        .clicked()
                    {
                        app.toggle_theme(ctx);
                    }
                }
                ThemeControl::Checkbox => {
                    let mut dark_mode = app.theme == Theme::Dark;
                    if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                        app.toggle_theme(ctx);
                    }
                }
            }

            if app.config.enable_greeting_editor && ui.button("Customize").clicked() {
                app.open_editor(now);
            }

            if app.config.enable_launcher_menu {
                let response = ui
                    .button(RichText::new("⣿").size(15.0))
                    .on_hover_text("Apps");
                if response.clicked() {
                    app.menu.toggle(now);
                }
                app.menu_anchor = Some(response.rect);
            }
        });
    });
}
