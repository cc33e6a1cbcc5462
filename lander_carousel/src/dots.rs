// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indicator dot projection.

use smallvec::SmallVec;

bitflags::bitflags! {
    /// Presentation flags for a single indicator dot.
    ///
    /// A dot with no flags set is shown and inactive.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DotFlags: u8 {
        /// The dot marks the current position (`active` class).
        const ACTIVE = 0b0000_0001;
        /// The dot does not correspond to a reachable position (`display: none`).
        const HIDDEN = 0b0000_0010;
    }
}

impl DotFlags {
    /// Returns `true` if the dot should be displayed.
    #[must_use]
    pub const fn is_shown(self) -> bool {
        !self.contains(Self::HIDDEN)
    }

    /// Returns `true` if the dot marks the current position.
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.contains(Self::ACTIVE)
    }
}

/// Dot states for a typical indicator row without spilling to the heap.
pub type DotStates = SmallVec<[DotFlags; 8]>;

/// Computes the flags for `dot_count` dots.
///
/// The first `needed` dots are shown; the dot at `current` among them is active.
/// Dots at or beyond `needed` are hidden and never active.
#[must_use]
pub fn dot_states(dot_count: usize, needed: usize, current: usize) -> DotStates {
    (0..dot_count)
        .map(|index| {
            if index >= needed {
                DotFlags::HIDDEN
            } else if index == current {
                DotFlags::ACTIVE
            } else {
                DotFlags::empty()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{DotFlags, dot_states};

    #[test]
    fn excess_dots_are_hidden() {
        let states = dot_states(7, 5, 2);
        assert_eq!(states.len(), 7);
        assert_eq!(states.iter().filter(|d| d.is_shown()).count(), 5);
        assert!(states[2].is_active());
        assert!(!states[5].is_shown());
        assert!(!states[6].is_shown());
    }

    #[test]
    fn hidden_dot_is_never_active() {
        // Current index past the shown range.
        let states = dot_states(3, 1, 2);
        assert_eq!(
            states.as_slice(),
            &[DotFlags::empty(), DotFlags::HIDDEN, DotFlags::HIDDEN]
        );
    }

    #[test]
    fn no_dots_is_fine() {
        assert!(dot_states(0, 4, 0).is_empty());
    }
}
