//! UI components for Tabula.

pub mod editor;
pub mod home;
pub mod launcher;
pub mod status;
pub mod topbar;

// Theme-aware colors for the UI
pub mod colors {
    use eframe::egui::{Color32, Visuals};

    /// Accent for primary buttons (same for both themes)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246); // Blue

    /// Error red
    pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);

    /// Get muted text color based on theme
    pub fn muted(visuals: &Visuals) -> Color32 {
        if visuals.dark_mode {
            Color32::from_rgb(156, 163, 175)
        } else {
            Color32::from_rgb(100, 100, 110)
        }
    }

    /// Get dropdown background based on theme
    pub fn panel_bg(visuals: &Visuals) -> Color32 {
        if visuals.dark_mode {
            Color32::from_rgb(40, 40, 45)
        } else {
            Color32::from_rgb(245, 245, 250)
        }
    }

    /// Get border color based on theme
    pub fn border(visuals: &Visuals) -> Color32 {
        if visuals.dark_mode {
            Color32::from_rgb(70, 70, 75)
        } else {
            Color32::from_rgb(200, 200, 210)
        }
    }
}
