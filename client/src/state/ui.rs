//! Site-wide UI chrome state (theme, mobile menu).
//!
//! DESIGN
//! ======
//! One `RwSignal<UiState>` is provided at the app root and read through
//! `expect_context`, so the theme preference has a single owner instead of
//! living in ambient globals.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the navbar and the root theme effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
