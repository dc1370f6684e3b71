//! Tabula GUI Application
//!
//! A minimal "new tab page"-style dashboard with a native desktop interface.

mod app;
mod ui;

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tabula_core=debug".parse().unwrap())
                .add_directive("tabula_gui=debug".parse().unwrap())
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Tabula v{}", tabula_core::VERSION);

    // Window configuration
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Tabula - New Tab"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Tabula",
        options,
        Box::new(|cc| Ok(Box::new(app::TabulaApp::new(cc)))),
    )
}
