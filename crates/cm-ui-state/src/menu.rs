//! Mobile navigation menu state
//!
//! A single visibility flag: the burger button flips it, and selecting
//! any navigation item forces it closed so the menu never covers the page
//! the user just navigated to.

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force closed. Fired when any nav item is selected.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_both_ways() {
        let mut menu = MobileMenu::new();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_nav_selection_closes_from_either_state() {
        let mut menu = MobileMenu::new();
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }
}
