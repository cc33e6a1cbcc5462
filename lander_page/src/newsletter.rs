// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Newsletter signup button feedback.
//!
//! There is no backend; submitting only acknowledges the visitor and resets
//! the form after a pause.

use alloc::string::String;

/// Label shown after submitting.
pub const SUBSCRIBED_LABEL: &str = "SUBSCRIBED!";

/// How long the acknowledgement stays before the form resets.
pub const SUBSCRIBED_RESET_MS: u32 = 3_000;

/// Submit button state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterButton {
    original_label: Option<String>,
}

impl NewsletterButton {
    /// An idle button.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            original_label: None,
        }
    }

    /// Handles a submit while the button shows `current_label`.
    ///
    /// Returns `false` while a previous submit is still acknowledged; the
    /// button is disabled then and the submit is ignored.
    pub fn submit(&mut self, current_label: &str) -> bool {
        if self.original_label.is_some() {
            return false;
        }
        self.original_label = Some(current_label.into());
        true
    }

    /// Whether the button is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.original_label.is_some()
    }

    /// Label to show while acknowledged, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.original_label.as_ref().map(|_| SUBSCRIBED_LABEL)
    }

    /// The reset delay elapsed. Returns the label to restore; the host also
    /// resets the form.
    pub fn reset(&mut self) -> Option<String> {
        self.original_label.take()
    }
}
