// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile navigation menu.

/// Open/closed state of the burger menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

/// What the DOM shows for a menu state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MenuView {
    /// Menu and burger carry `is-active`.
    pub active: bool,
    /// Value of the burger's `aria-expanded`.
    pub aria_expanded: &'static str,
    /// `overflow` of the page body; the page stops scrolling behind an open
    /// menu.
    pub body_overflow: &'static str,
}

impl MobileMenu {
    /// A closed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Whether the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the menu.
    pub fn open(&mut self) -> MenuView {
        self.open = true;
        self.view()
    }

    /// Closes the menu, as a click on any menu link does.
    pub fn close(&mut self) -> MenuView {
        self.open = false;
        self.view()
    }

    /// Flips the menu, as a click on the burger does.
    pub fn toggle(&mut self) -> MenuView {
        self.open = !self.open;
        self.view()
    }

    /// The current view.
    #[must_use]
    pub const fn view(&self) -> MenuView {
        if self.open {
            MenuView {
                active: true,
                aria_expanded: "true",
                body_overflow: "hidden",
            }
        } else {
            MenuView {
                active: false,
                aria_expanded: "false",
                body_overflow: "",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burger_toggles_and_links_close() {
        let mut menu = MobileMenu::new();
        let open = menu.toggle();
        assert!(open.active);
        assert_eq!(open.aria_expanded, "true");
        assert_eq!(open.body_overflow, "hidden");

        let closed = menu.close();
        assert_eq!(closed, MobileMenu::new().view());
        assert_eq!(closed.body_overflow, "");

        // Closing twice is harmless.
        assert!(!menu.close().active);
        assert!(menu.open().active);
        assert!(!menu.toggle().active);
    }
}
