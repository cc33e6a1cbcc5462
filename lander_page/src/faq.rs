// Copyright 2025 the Lander Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! FAQ accordion with collapsible categories.

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Indices whose open state changed in one toggle.
pub type FaqChanges = SmallVec<[usize; 4]>;

#[derive(Copy, Clone, Debug)]
struct FaqItem {
    category: Option<usize>,
    open: bool,
}

/// Open/closed state of FAQ categories and questions.
///
/// Opening a question closes the other questions of its category. A question
/// outside any category closes every other question on the page. Category
/// headers toggle independently of each other and of their questions.
#[derive(Clone, Debug, Default)]
pub struct FaqAccordion {
    categories: Vec<bool>,
    items: Vec<FaqItem>,
}

impl FaqAccordion {
    /// Creates an empty accordion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a closed category and returns its index.
    pub fn add_category(&mut self) -> usize {
        self.categories.push(false);
        self.categories.len() - 1
    }

    /// Adds a closed question and returns its index.
    ///
    /// `category` must be an index returned by [`Self::add_category`];
    /// unknown categories are treated as none.
    pub fn add_item(&mut self, category: Option<usize>) -> usize {
        let category = category.filter(|&c| c < self.categories.len());
        self.items.push(FaqItem {
            category,
            open: false,
        });
        self.items.len() - 1
    }

    /// Number of questions.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether question `index` is open.
    #[must_use]
    pub fn is_item_open(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.open)
    }

    /// Whether category `index` is open.
    #[must_use]
    pub fn is_category_open(&self, index: usize) -> bool {
        self.categories.get(index).copied().unwrap_or(false)
    }

    /// Toggles category `index`; returns its new state, or `None` if out of
    /// range.
    pub fn toggle_category(&mut self, index: usize) -> Option<bool> {
        let open = self.categories.get_mut(index)?;
        *open = !*open;
        Some(*open)
    }

    /// Toggles question `index`, closing its siblings.
    ///
    /// Returns every question whose state changed, including `index`.
    pub fn toggle_item(&mut self, index: usize) -> FaqChanges {
        let mut changes = FaqChanges::new();
        let Some(category) = self.items.get(index).map(|item| item.category) else {
            return changes;
        };
        for (other, item) in self.items.iter_mut().enumerate() {
            if other == index {
                item.open = !item.open;
                changes.push(other);
            } else if item.open && (category.is_none() || item.category == category) {
                item.open = false;
                changes.push(other);
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(index, changed = changes.len(), "faq item toggled");
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accordion() -> FaqAccordion {
        let mut faq = FaqAccordion::new();
        let tickets = faq.add_category();
        let travel = faq.add_category();
        faq.add_item(Some(tickets)); // 0
        faq.add_item(Some(tickets)); // 1
        faq.add_item(Some(travel)); // 2
        faq.add_item(None); // 3
        faq
    }

    #[test]
    fn opening_closes_category_siblings_only() {
        let mut faq = accordion();
        faq.toggle_item(0);
        faq.toggle_item(2);
        let changes = faq.toggle_item(1);
        assert_eq!(changes.as_slice(), [0, 1]);
        assert!(!faq.is_item_open(0));
        assert!(faq.is_item_open(1));
        assert!(faq.is_item_open(2));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut faq = accordion();
        faq.toggle_item(2);
        assert_eq!(faq.toggle_item(2).as_slice(), [2]);
        assert!(!faq.is_item_open(2));
    }

    #[test]
    fn ungrouped_item_closes_everything() {
        let mut faq = accordion();
        faq.toggle_item(0);
        faq.toggle_item(2);
        let changes = faq.toggle_item(3);
        assert_eq!(changes.as_slice(), [0, 2, 3]);
        assert!((0..3).all(|i| !faq.is_item_open(i)));
        assert!(faq.is_item_open(3));
    }

    #[test]
    fn categories_toggle_independently() {
        let mut faq = accordion();
        assert_eq!(faq.toggle_category(0), Some(true));
        assert_eq!(faq.toggle_category(1), Some(true));
        assert_eq!(faq.toggle_category(0), Some(false));
        assert!(faq.is_category_open(1));
        assert_eq!(faq.toggle_category(9), None);
        assert!(faq.toggle_item(9).is_empty());
    }
}
