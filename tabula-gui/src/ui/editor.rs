//! Greeting editor panel.

use std::time::Instant;

use eframe::egui::{self, Key, RichText, Rounding, Vec2};

use crate::app::TabulaApp;
use crate::ui::colors;

/// Render the greeting editor window.
pub fn render(app: &mut TabulaApp, ctx: &egui::Context, now: Instant) {
    let muted = colors::muted(&ctx.style().visuals);

    let mut save_clicked = false;
    let mut cancel_clicked = false;

    egui::Window::new("Customize")
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(RichText::new("Greeting").strong());
            ui.label(
                RichText::new("Shown in the middle of the page.")
                    .size(11.0)
                    .color(muted),
            );

            let response = ui.add(
                egui::TextEdit::singleline(&mut app.greeting_draft)
                    .desired_width(f32::INFINITY)
                    .hint_text("Hello World!"),
            );

            // Focus is deferred until the open transition has settled.
            if app.editor.take_focus_request(now) {
                response.request_focus();
            }

            // Enter in the input saves.
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                save_clicked = true;
            }

            if let Some(ref msg) = app.greeting_error {
                ui.label(RichText::new(msg).size(11.0).color(colors::ERROR));
            }

            ui.add_space(8.0);
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_sized(
                        Vec2::new(90.0, 28.0),
                        egui::Button::new(RichText::new("Save").strong())
                            .fill(colors::ACCENT)
                            .rounding(Rounding::same(8.0)),
                    )
                    .clicked()
                {
                    save_clicked = true;
                }

                if ui
                    .add_sized(
                        Vec2::new(90.0, 28.0),
                        egui::Button::new("Cancel").rounding(Rounding::same(8.0)),
                    )
                    .clicked()
                {
                    cancel_clicked = true;
                }
            });
        });

    // Handle actions after the window's borrows are released
    if save_clicked {
        app.save_greeting_draft();
    } else if cancel_clicked {
        app.close_editor();
    }
}
