//! Main application state and update loop.

use std::time::Instant;

use eframe::egui;
use tracing::{debug, error, info};

use tabula_core::{config, datetime, AppConfig, Database, EditorState, MenuState, Theme};

use crate::ui;

// =============================================================================
// Application State
// =============================================================================

/// Main application state.
pub struct TabulaApp {
    /// Database connection (settings store).
    pub db: Database,

    /// Feature options, read once at startup.
    pub config: AppConfig,

    // -------------------------------------------------------------------------
    // Dashboard State
    // -------------------------------------------------------------------------
    /// Current theme. Persisted on every toggle.
    pub theme: Theme,

    /// Greeting shown on the home panel.
    pub greeting: String,

    /// Rendered date label. Re-computed on click, not on a timer.
    pub date_text: String,

    // -------------------------------------------------------------------------
    // Overlay State
    // -------------------------------------------------------------------------
    /// Greeting editor panel.
    pub editor: EditorState,

    /// Launcher dropdown.
    pub menu: MenuState,

    /// Screen rect of the apps trigger, recorded while rendering the top
    /// bar so the dropdown can anchor below it.
    pub menu_anchor: Option<egui::Rect>,

    /// Draft text in the greeting editor.
    pub greeting_draft: String,

    /// Inline validation message in the greeting editor.
    pub greeting_error: Option<String>,

    // -------------------------------------------------------------------------
    // UI State
    // -------------------------------------------------------------------------
    /// Status message.
    pub status_message: Option<(String, chrono::DateTime<chrono::Utc>)>,
}

impl TabulaApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing TabulaApp");

        // Open database
        let db = match Database::open() {
            Ok(db) => db,
            Err(e) => {
                error!("Failed to open database: {}", e);
                // In-memory fallback keeps the session usable without persistence.
                Database::open_at(std::path::PathBuf::from(":memory:"))
                    .expect("Failed to create in-memory database")
            }
        };
        if let Err(e) = db.migrate() {
            error!("Failed to migrate database: {}", e);
        }

        // Load feature options
        let config = AppConfig::load();
        debug!(?config, "Loaded feature options");

        // Resolve persisted dashboard state
        let theme = config::resolve_initial_theme(&db, config::system_theme);
        let greeting = config::resolve_initial_greeting(&db);
        debug!(%theme, %greeting, "Resolved startup state");

        // Apply theme
        apply_theme(&cc.egui_ctx, theme);

        // Configure spacing for better readability
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        cc.egui_ctx.set_style(style);

        Self {
            db,
            config,
            theme,
            greeting,
            date_text: datetime::format_date(datetime::today()),
            editor: EditorState::default(),
            menu: MenuState::default(),
            menu_anchor: None,
            greeting_draft: String::new(),
            greeting_error: None,
            status_message: None,
        }
    }

    /// Flip the theme, persist it, and re-apply visuals.
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        info!(theme = %self.theme, "Theme toggled");

        if let Err(e) = config::persist_theme(&self.db, self.theme) {
            error!("Failed to persist theme: {}", e);
            self.set_status("Failed to save theme");
        }

        apply_theme(ctx, self.theme);
    }

    /// Open the greeting editor pre-filled with the current greeting.
    pub fn open_editor(&mut self, now: Instant) {
        if !self.config.enable_greeting_editor {
            return;
        }

        // Only one overlay at a time.
        self.menu.close(now);

        self.greeting_draft = self.greeting.clone();
        self.greeting_error = None;
        self.editor.open(now);
    }

    /// Hide the greeting editor, discarding the draft. Idempotent.
    pub fn close_editor(&mut self) {
        self.editor.close();
        self.greeting_error = None;
    }

    /// Validate and persist the edited greeting.
    ///
    /// An empty draft keeps the editor open and shows an inline message.
    pub fn save_greeting_draft(&mut self) {
        match config::save_greeting(&self.db, &self.greeting_draft) {
            Ok(Some(saved)) => {
                info!(greeting = %saved, "Greeting updated");
                self.greeting = saved;
                self.close_editor();
                self.set_status("Greeting updated");
            }
            Ok(None) => {
                self.greeting_error = Some("Greeting cannot be empty".to_string());
            }
            Err(e) => {
                error!("Failed to persist greeting: {}", e);
                self.set_status("Failed to save greeting");
            }
        }
    }

    /// Re-render the date label from the wall clock.
    pub fn refresh_date(&mut self) {
        self.date_text = datetime::format_date(datetime::today());
    }

    /// Set a status message.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some((msg.to_string(), chrono::Utc::now()));
    }

    /// Clear old status messages.
    pub fn clear_old_status(&mut self) {
        if let Some((_, time)) = &self.status_message {
            if chrono::Utc::now() - *time > chrono::Duration::seconds(5) {
                self.status_message = None;
            }
        }
    }
}

/// Map the theme to egui visuals.
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let visuals = match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    };
    ctx.set_visuals(visuals);
}

impl eframe::App for TabulaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.clear_old_status();

        // Top bar with the launcher trigger, customize action, and theme control
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui::topbar::render(self, ui, ctx, now);
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_panel")
            .max_height(24.0)
            .show(ctx, |ui| {
                ui::status::render(self, ui);
            });

        // Launcher dropdown while it is on screen
        if self.config.enable_launcher_menu && self.menu.is_visible() {
            ui::launcher::render(self, ctx, now);
        }

        // Greeting editor modal if open
        if self.editor.is_open() {
            ui::editor::render(self, ctx, now);
        }

        // Home panel (fills remaining space)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::home::render(self, ui);
        });

        // Advance overlay deadlines and keep repainting until they settle.
        self.menu.tick(now);
        if let Some(deadline) = earliest(self.menu.next_deadline(), self.editor.next_deadline()) {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    }
}
