//! Launcher dropdown of external shortcuts.

use std::time::Instant;

use eframe::egui::{self, RichText};

use tabula_core::launcher::{self, SHORTCUTS};
use tabula_core::overlay::HIDE_DELAY;

use crate::app::TabulaApp;
use crate::ui::colors;

const DROPDOWN_WIDTH: f32 = 200.0;

/// Render the dropdown while it is on screen.
pub fn render(app: &mut TabulaApp, ctx: &egui::Context, now: Instant) {
    // Anchor below the trigger, right-aligned with it.
    let pos = match app.menu_anchor {
        Some(rect) => egui::pos2((rect.right() - DROPDOWN_WIDTH).max(8.0), rect.bottom() + 6.0),
        None => egui::pos2(8.0, 32.0),
    };

    // Opacity tracks the active flag; the state machine decides when the
    // dropdown leaves the screen entirely.
    let opacity = ctx.animate_bool_with_time(
        egui::Id::new("launcher_fade"),
        app.menu.is_active(),
        HIDE_DELAY.as_secs_f32(),
    );

    let area = egui::Area::new(egui::Id::new("launcher_dropdown"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            egui::Frame::popup(ui.style())
                .fill(colors::panel_bg(ui.visuals()))
                .stroke(egui::Stroke::new(1.0, colors::border(ui.visuals())))
                .show(ui, |ui| {
                    ui.set_min_width(DROPDOWN_WIDTH);
                    for shortcut in SHORTCUTS {
                        let label = format!("{}  {}", shortcut.icon, shortcut.name);
                        let response = ui.add(
                            egui::Button::new(RichText::new(label).size(13.0))
                                .frame(false)
                                .min_size(egui::vec2(DROPDOWN_WIDTH - 16.0, 24.0)),
                        );
                        if response.clicked() {
                            launcher::open_shortcut(shortcut);
                            app.menu.close(now);
                        }
                    }
                });
        });

    // A click outside both the dropdown and its trigger closes the menu;
    // the trigger's own click was already consumed by toggle.
    if area.response.clicked_elsewhere() {
        app.menu.outside_click(now);
    }
}
