// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single highlighted item of a list.

/// What happens when linear navigation runs off either end.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Stop at the first/last item.
    Never,
    /// Continue from the opposite end.
    #[default]
    Wrap,
}

/// The keyboard/pointer highlight within a list of `len` items.
///
/// The index is always `None` for an empty list and otherwise either `None`
/// or within `0..len`. When the list shrinks the index is clamped down to the
/// new last item rather than cleared.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Highlight {
    index: Option<usize>,
    len: usize,
}

impl Highlight {
    /// No highlight over `len` items.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: None, len }
    }

    /// The highlighted index.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Number of items the highlight ranges over.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `index` is highlighted.
    #[must_use]
    pub fn is(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    /// Adapts to a new item count, clamping the index into range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = match (self.index, len) {
            (_, 0) | (None, _) => None,
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }

    /// Highlights `index`. Out-of-range indices are ignored.
    ///
    /// Returns `true` if the highlight changed.
    pub fn set(&mut self, index: usize) -> bool {
        if index >= self.len || self.index == Some(index) {
            return false;
        }
        self.index = Some(index);
        true
    }

    /// Clears the highlight.
    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Moves to the next item.
    ///
    /// With no highlight this lands on the first item.
    pub fn next(&mut self, wrap: WrapMode) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let next = match self.index {
            None => 0,
            Some(i) if i + 1 < self.len => i + 1,
            Some(i) => match wrap {
                WrapMode::Wrap => 0,
                WrapMode::Never => i,
            },
        };
        self.index = Some(next);
        self.index
    }

    /// Moves to the previous item.
    ///
    /// With no highlight this lands on the last item.
    pub fn prev(&mut self, wrap: WrapMode) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let prev = match self.index {
            None => self.len - 1,
            Some(i) if i > 0 => i - 1,
            Some(i) => match wrap {
                WrapMode::Wrap => self.len - 1,
                WrapMode::Never => i,
            },
        };
        self.index = Some(prev);
        self.index
    }

    /// Moves to the first item.
    pub fn first(&mut self) -> Option<usize> {
        self.index = (self.len > 0).then_some(0);
        self.index
    }

    /// Moves to the last item.
    pub fn last(&mut self) -> Option<usize> {
        self.index = self.len.checked_sub(1);
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::{Highlight, WrapMode};

    #[test]
    fn shrinking_clamps_instead_of_clearing() {
        let mut highlight = Highlight::new(10);
        highlight.set(9);
        highlight.set_len(5);
        assert_eq!(highlight.index(), Some(4));

        highlight.set_len(0);
        assert_eq!(highlight.index(), None);
    }

    #[test]
    fn growing_keeps_the_index() {
        let mut highlight = Highlight::new(3);
        highlight.set(2);
        highlight.set_len(30);
        assert_eq!(highlight.index(), Some(2));
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut highlight = Highlight::new(3);
        highlight.set(2);
        assert_eq!(highlight.next(WrapMode::Wrap), Some(0));
        assert_eq!(highlight.prev(WrapMode::Wrap), Some(2));
    }

    #[test]
    fn never_wrap_stops_at_edges() {
        let mut highlight = Highlight::new(3);
        highlight.set(2);
        assert_eq!(highlight.next(WrapMode::Never), Some(2));
        highlight.set(0);
        assert_eq!(highlight.prev(WrapMode::Never), Some(0));
    }

    #[test]
    fn first_move_from_nothing() {
        let mut down = Highlight::new(4);
        assert_eq!(down.next(WrapMode::Wrap), Some(0));
        let mut up = Highlight::new(4);
        assert_eq!(up.prev(WrapMode::Wrap), Some(3));
    }

    #[test]
    fn empty_list_has_no_highlight() {
        let mut highlight = Highlight::new(0);
        assert_eq!(highlight.next(WrapMode::Wrap), None);
        assert_eq!(highlight.first(), None);
        assert_eq!(highlight.last(), None);
        assert!(!highlight.set(0));
    }

    #[test]
    fn out_of_range_set_is_ignored() {
        let mut highlight = Highlight::new(2);
        highlight.set(1);
        assert!(!highlight.set(7));
        assert!(highlight.is(1));
    }
}
