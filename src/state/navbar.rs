//! Navbar State - Scrolled style and mobile menu
//!
//! Two independent flags packed into one `Copy` value:
//! - `SCROLLED` follows the scroll offset against a pixel threshold
//! - `MENU_OPEN` follows the hamburger toggle and nav-link clicks
//!
//! Every mutator reports whether the flag actually changed, so adapters can
//! skip redundant class writes.

use std::cell::Cell;
use std::rc::Rc;

bitflags::bitflags! {
    /// Visual state of the navbar.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NavFlags: u8 {
        const SCROLLED = 1 << 0;
        const MENU_OPEN = 1 << 1;
    }
}

/// Navbar state shared between the scroll pipeline and the menu listeners.
pub type SharedNavbar = Rc<Cell<NavbarState>>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarState {
    flags: NavFlags,
    threshold: f64,
}

impl NavbarState {
    pub fn new(threshold: f64) -> Self {
        Self {
            flags: NavFlags::empty(),
            threshold,
        }
    }

    pub fn shared(threshold: f64) -> SharedNavbar {
        Rc::new(Cell::new(Self::new(threshold)))
    }

    pub fn flags(&self) -> NavFlags {
        self.flags
    }

    pub fn is_scrolled(&self) -> bool {
        self.flags.contains(NavFlags::SCROLLED)
    }

    pub fn is_menu_open(&self) -> bool {
        self.flags.contains(NavFlags::MENU_OPEN)
    }

    /// Re-evaluate the scrolled flag. Strictly above the threshold counts.
    ///
    /// Returns `Some(new_value)` on a transition, `None` otherwise.
    pub fn update_scroll(&mut self, scroll_top: f64) -> Option<bool> {
        let scrolled = scroll_top > self.threshold;
        self.set_flag(NavFlags::SCROLLED, scrolled)
    }

    /// Flip the mobile menu. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.flags.toggle(NavFlags::MENU_OPEN);
        self.is_menu_open()
    }

    /// Close the mobile menu. Returns `true` if it was open.
    pub fn close_menu(&mut self) -> bool {
        self.set_flag(NavFlags::MENU_OPEN, false).is_some()
    }

    fn set_flag(&mut self, flag: NavFlags, value: bool) -> Option<bool> {
        if self.flags.contains(flag) == value {
            return None;
        }
        self.flags.set(flag, value);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_transitions() {
        let mut nav = NavbarState::new(100.0);

        assert_eq!(nav.update_scroll(0.0), None);
        assert_eq!(nav.update_scroll(100.0), None); // Not strictly above
        assert_eq!(nav.update_scroll(101.0), Some(true));
        assert_eq!(nav.update_scroll(500.0), None); // Already scrolled
        assert!(nav.is_scrolled());

        assert_eq!(nav.update_scroll(99.0), Some(false));
        assert_eq!(nav.update_scroll(0.0), None);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = NavbarState::new(100.0);

        assert!(nav.toggle_menu());
        assert!(nav.is_menu_open());
        assert!(!nav.toggle_menu());
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_close_menu() {
        let mut nav = NavbarState::new(100.0);

        assert!(!nav.close_menu()); // Already closed
        nav.toggle_menu();
        assert!(nav.close_menu());
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_flags_independent() {
        let mut nav = NavbarState::new(100.0);
        nav.toggle_menu();
        nav.update_scroll(200.0);
        assert_eq!(nav.flags(), NavFlags::SCROLLED | NavFlags::MENU_OPEN);

        nav.close_menu();
        assert_eq!(nav.flags(), NavFlags::SCROLLED);
    }

    #[test]
    fn test_shared_cell() {
        let shared = NavbarState::shared(100.0);
        let other = shared.clone();

        let mut nav = shared.get();
        nav.toggle_menu();
        shared.set(nav);

        assert!(other.get().is_menu_open());
    }
}
