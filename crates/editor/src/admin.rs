//! The hidden admin gesture.
//!
//! Tapping the catalog logo a set number of times in a row toggles admin
//! mode, which reveals the editing controls. This is a convenience for the
//! shop owner and nothing more: it is not authentication, and nothing in
//! this crate checks it before applying an edit.

use tracing::info;

/// Consecutive logo taps that toggle admin mode.
pub const DEFAULT_TAPS_REQUIRED: u32 = 5;

/// Per-session UI flags unlocked by the logo gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    taps_required: u32,
    taps: u32,
    admin_active: bool,
    edit_mode: bool,
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::new(DEFAULT_TAPS_REQUIRED)
    }
}

impl AdminSession {
    /// A session that toggles after `taps_required` taps (at least one).
    #[must_use]
    pub fn new(taps_required: u32) -> Self {
        Self {
            taps_required: taps_required.max(1),
            taps: 0,
            admin_active: false,
            edit_mode: false,
        }
    }

    /// Register one logo tap. Returns `true` when this tap toggled admin mode.
    pub fn tap_logo(&mut self) -> bool {
        self.taps += 1;
        if self.taps < self.taps_required {
            return false;
        }

        self.taps = 0;
        self.admin_active = !self.admin_active;
        if !self.admin_active {
            self.edit_mode = false;
        }
        info!(admin_active = self.admin_active, "Admin mode toggled");
        true
    }

    /// Break the tap streak, e.g. when any other control is used.
    pub const fn reset_taps(&mut self) {
        self.taps = 0;
    }

    /// Switch between editing and customer view. Has no effect outside
    /// admin mode. Returns the new edit-mode state.
    pub const fn toggle_edit_mode(&mut self) -> bool {
        if self.admin_active {
            self.edit_mode = !self.edit_mode;
        }
        self.edit_mode
    }

    #[must_use]
    pub const fn is_admin_active(&self) -> bool {
        self.admin_active
    }

    #[must_use]
    pub const fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Whether editing controls should be shown.
    #[must_use]
    pub const fn can_edit(&self) -> bool {
        self.admin_active && self.edit_mode
    }

    /// Taps registered in the current streak.
    #[must_use]
    pub const fn taps(&self) -> u32 {
        self.taps
    }
}
