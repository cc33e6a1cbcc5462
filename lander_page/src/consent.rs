// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cookie consent banner.

/// Storage key for the consent flag.
pub const CONSENT_STORAGE_KEY: &str = "cookieConsent";

/// Value stored once the visitor accepts.
pub const CONSENT_ACCEPTED: &str = "accepted";

/// Delay before the banner slides in.
pub const CONSENT_SHOW_DELAY_MS: u32 = 2_000;

/// Visibility of the consent banner.
///
/// Any stored value counts as consent; the banner only appears for visitors
/// without one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CookieConsent {
    consented: bool,
    visible: bool,
}

impl CookieConsent {
    /// Restores state from the stored flag.
    #[must_use]
    pub fn new(stored: Option<&str>) -> Self {
        Self {
            consented: stored.is_some(),
            visible: false,
        }
    }

    /// Whether the host should schedule [`Self::show`] after
    /// [`CONSENT_SHOW_DELAY_MS`].
    #[must_use]
    pub const fn should_prompt(&self) -> bool {
        !self.consented
    }

    /// The delay elapsed. Returns `true` if the banner becomes visible.
    pub fn show(&mut self) -> bool {
        if self.consented || self.visible {
            return false;
        }
        self.visible = true;
        true
    }

    /// Whether the banner carries `is-visible`.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Records consent, hides the banner, and returns the value to persist
    /// under [`CONSENT_STORAGE_KEY`].
    pub fn accept(&mut self) -> &'static str {
        self.consented = true;
        self.visible = false;
        CONSENT_ACCEPTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_visitor_is_prompted() {
        let mut consent = CookieConsent::new(None);
        assert!(consent.should_prompt());
        assert!(!consent.is_visible());
        assert!(consent.show());
        assert!(!consent.show());
        assert_eq!(consent.accept(), "accepted");
        assert!(!consent.is_visible());
        assert!(!consent.should_prompt());
    }

    #[test]
    fn returning_visitor_is_not_prompted() {
        let mut consent = CookieConsent::new(Some("accepted"));
        assert!(!consent.should_prompt());
        assert!(!consent.show());
    }
}
