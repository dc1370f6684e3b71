//! Overlay state for the greeting editor and the launcher dropdown.
//!
//! Deferred visual sequencing (focus-after-open, hide-after-fade-out) is
//! modeled with explicit deadlines held on the component state and
//! re-checked every frame, not fire-and-forget timers. Opening cancels a
//! pending hide, so a rapid re-open can never race a stale close.

use std::time::{Duration, Instant};

/// Delay before the greeting input takes focus, leaving room for the
/// editor's open transition to settle.
pub const FOCUS_DELAY: Duration = Duration::from_millis(300);

/// Delay before an opening dropdown reaches its active (full opacity) state.
pub const FADE_IN_DELAY: Duration = Duration::from_millis(10);

/// Delay before a closing dropdown leaves the screen, matching the fade-out.
pub const HIDE_DELAY: Duration = Duration::from_millis(200);

// =============================================================================
// Greeting Editor
// =============================================================================

/// Greeting editor panel state.
#[derive(Debug, Default)]
pub struct EditorState {
    open: bool,
    focus_at: Option<Instant>,
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the panel and schedule input focus for after the transition.
    pub fn open(&mut self, now: Instant) {
        self.open = true;
        self.focus_at = Some(now + FOCUS_DELAY);
    }

    /// Hide the panel. Idempotent; cancels any pending focus request.
    pub fn close(&mut self) {
        self.open = false;
        self.focus_at = None;
    }

    /// True exactly once, when the scheduled focus deadline has passed.
    pub fn take_focus_request(&mut self, now: Instant) -> bool {
        match self.focus_at {
            Some(at) if now >= at => {
                self.focus_at = None;
                true
            }
            _ => false,
        }
    }

    /// Next pending deadline, for repaint scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.focus_at
    }
}

// =============================================================================
// Launcher Dropdown
// =============================================================================

/// Launcher dropdown state.
///
/// `visible` says whether the dropdown occupies the screen at all;
/// `active` drives its opacity. Opening shows it immediately and
/// activates after a short fade-in; closing deactivates immediately and
/// hides once the fade-out delay elapses.
#[derive(Debug, Default)]
pub struct MenuState {
    visible: bool,
    active: bool,
    activate_at: Option<Instant>,
    hide_at: Option<Instant>,
    trigger_clicked: bool,
}

impl MenuState {
    /// Logically open: active or about to become active.
    pub fn is_open(&self) -> bool {
        self.active || self.activate_at.is_some()
    }

    /// On screen (possibly mid fade-out).
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// At full opacity.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Toggle from a click on the trigger button.
    ///
    /// The click is recorded so the outside-click pass running later in
    /// the same frame cannot double-handle it.
    pub fn toggle(&mut self, now: Instant) {
        self.trigger_clicked = true;
        if self.is_open() {
            self.close(now);
        } else {
            self.open(now);
        }
    }

    /// Show the dropdown; full opacity follows after the fade-in delay.
    ///
    /// Cancels a pending hide, so a stale close scheduled before this
    /// open cannot clobber it.
    pub fn open(&mut self, now: Instant) {
        self.visible = true;
        self.hide_at = None;
        if !self.active {
            self.activate_at = Some(now + FADE_IN_DELAY);
        }
    }

    /// Drop the active state now; the dropdown leaves the screen once the
    /// fade-out delay elapses. Idempotent - an already-scheduled hide is
    /// not extended.
    pub fn close(&mut self, now: Instant) {
        if !self.visible {
            return;
        }
        self.active = false;
        self.activate_at = None;
        if self.hide_at.is_none() {
            self.hide_at = Some(now + HIDE_DELAY);
        }
    }

    /// Close in response to a click outside both the dropdown and the
    /// trigger. A frame whose click was already handled by the trigger is
    /// ignored.
    pub fn outside_click(&mut self, now: Instant) {
        if self.trigger_clicked {
            return;
        }
        self.close(now);
    }

    /// Advance deadlines. Called once at the end of every frame.
    pub fn tick(&mut self, now: Instant) {
        self.trigger_clicked = false;

        if let Some(at) = self.activate_at {
            if now >= at {
                self.activate_at = None;
                self.active = true;
            }
        }

        if let Some(at) = self.hide_at {
            if self.is_open() {
                // Re-opened while the hide was pending: the deadline is stale.
                self.hide_at = None;
            } else if now >= at {
                self.hide_at = None;
                self.visible = false;
            }
        }
    }

    /// Next pending deadline, for repaint scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.activate_at, self.hide_at) {
            (Some(a), Some(h)) => Some(a.min(h)),
            (a, None) => a,
            (None, h) => h,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> Instant {
        Instant::now()
    }

    // -------------------------------------------------------------------------
    // Editor Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_editor_starts_closed() {
        let editor = EditorState::default();
        assert!(!editor.is_open());
        assert!(editor.next_deadline().is_none());
    }

    #[test]
    fn test_editor_open_schedules_focus() {
        let now = t0();
        let mut editor = EditorState::default();
        editor.open(now);

        assert!(editor.is_open());
        assert_eq!(editor.next_deadline(), Some(now + FOCUS_DELAY));

        // Before the deadline: no focus yet.
        assert!(!editor.take_focus_request(now + FOCUS_DELAY / 2));

        // At the deadline: focus exactly once.
        assert!(editor.take_focus_request(now + FOCUS_DELAY));
        assert!(!editor.take_focus_request(now + FOCUS_DELAY * 2));
    }

    #[test]
    fn test_editor_close_is_idempotent_and_cancels_focus() {
        let now = t0();
        let mut editor = EditorState::default();
        editor.open(now);

        editor.close();
        editor.close();

        assert!(!editor.is_open());
        assert!(!editor.take_focus_request(now + FOCUS_DELAY * 2));
    }

    // -------------------------------------------------------------------------
    // Menu Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_menu_toggle_opens_then_activates() {
        let now = t0();
        let mut menu = MenuState::default();

        menu.toggle(now);
        assert!(menu.is_visible());
        assert!(menu.is_open());
        assert!(!menu.is_active());

        menu.tick(now + FADE_IN_DELAY);
        assert!(menu.is_active());
    }

    #[test]
    fn test_menu_toggle_twice_returns_to_hidden() {
        let now = t0();
        let mut menu = MenuState::default();

        menu.toggle(now);
        menu.tick(now + FADE_IN_DELAY);

        let later = now + FADE_IN_DELAY;
        menu.toggle(later);
        assert!(!menu.is_open());
        assert!(menu.is_visible()); // still fading out

        menu.tick(later + HIDE_DELAY);
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_menu_reopen_cancels_pending_hide() {
        let now = t0();
        let mut menu = MenuState::default();

        menu.toggle(now);
        menu.tick(now + FADE_IN_DELAY);
        menu.close(now + FADE_IN_DELAY);

        // Re-open before the hide deadline.
        let reopen = now + FADE_IN_DELAY + HIDE_DELAY / 2;
        menu.open(reopen);

        // Ticking past the stale deadline must not hide the fresh open.
        menu.tick(reopen + HIDE_DELAY * 2);
        assert!(menu.is_visible());
        assert!(menu.is_open());
    }

    #[test]
    fn test_menu_close_is_idempotent() {
        let now = t0();
        let mut menu = MenuState::default();

        menu.open(now);
        menu.tick(now + FADE_IN_DELAY);

        menu.close(now + FADE_IN_DELAY);
        let first_deadline = menu.next_deadline();

        // A second close must not push the hide out further.
        menu.close(now + FADE_IN_DELAY + HIDE_DELAY / 2);
        assert_eq!(menu.next_deadline(), first_deadline);

        // Closing an already-hidden menu is a no-op.
        menu.tick(now + FADE_IN_DELAY + HIDE_DELAY);
        menu.close(now + FADE_IN_DELAY + HIDE_DELAY);
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_menu_outside_click_closes() {
        let now = t0();
        let mut menu = MenuState::default();

        menu.open(now);
        menu.tick(now + FADE_IN_DELAY);

        menu.outside_click(now + FADE_IN_DELAY);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_trigger_click_is_not_double_handled() {
        let now = t0();
        let mut menu = MenuState::default();

        menu.open(now);
        menu.tick(now + FADE_IN_DELAY);
        assert!(menu.is_active());

        // The trigger is clicked while open: toggle closes...
        let later = now + FADE_IN_DELAY;
        menu.toggle(later);
        assert!(!menu.is_open());
        let deadline = menu.next_deadline();

        // ...and the outside-click pass in the same frame is swallowed
        // instead of scheduling a second close.
        menu.outside_click(later);
        assert_eq!(menu.next_deadline(), deadline);

        // Next frame, outside clicks work again.
        menu.tick(later);
        menu.open(later);
        menu.tick(later + FADE_IN_DELAY);
        menu.outside_click(later + FADE_IN_DELAY);
        assert!(!menu.is_open());
    }
}
