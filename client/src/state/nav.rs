//! Mobile navigation menu state.
//!
//! The toggle icon and the menu panel share one flag, so they can never be
//! observed out of sync.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Handle a click anywhere in the document.
    ///
    /// Returns `true` when the click landed outside the navigation while the
    /// menu was open and the menu was closed as a result.
    pub fn on_document_click(&mut self, inside_nav: bool) -> bool {
        if self.open && !inside_nav {
            self.open = false;
            return true;
        }
        false
    }
}
