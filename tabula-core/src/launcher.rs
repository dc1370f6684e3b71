//! Launcher shortcut catalog.
//!
//! A fixed, ordered list of external sites shown in the apps dropdown.
//! Icons are plain glyphs; the list is compiled in and not user-editable.

/// A single launcher entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

/// Shortcuts rendered in the launcher dropdown, in display order.
pub static SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        name: "Mail",
        url: "https://mail.google.com/",
        icon: "✉",
    },
    Shortcut {
        name: "Calendar",
        url: "https://calendar.google.com/",
        icon: "🗓",
    },
    Shortcut {
        name: "Drive",
        url: "https://drive.google.com/",
        icon: "🗄",
    },
    Shortcut {
        name: "YouTube",
        url: "https://www.youtube.com/",
        icon: "▶",
    },
    Shortcut {
        name: "Maps",
        url: "https://maps.google.com/",
        icon: "🗺",
    },
    Shortcut {
        name: "Search",
        url: "https://www.google.com/",
        icon: "🔍",
    },
    Shortcut {
        name: "News",
        url: "https://news.google.com/",
        icon: "📰",
    },
    Shortcut {
        name: "Docs",
        url: "https://docs.google.com/",
        icon: "🖹",
    },
];

/// Open a shortcut in the default browser.
pub fn open_shortcut(shortcut: &Shortcut) {
    if let Err(e) = webbrowser::open(shortcut.url) {
        tracing::warn!(url = shortcut.url, error = %e, "Failed to open shortcut");
    } else {
        tracing::debug!(name = shortcut.name, "Opened shortcut");
    }
}
