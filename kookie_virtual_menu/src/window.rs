// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible range computation.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{ItemSizes, Scalar};

/// One realized item: its index in the source collection plus its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualItem<S: Scalar> {
    /// Index into the source collection.
    pub index: usize,
    /// Start of the item from the start of the content.
    pub offset: S,
    /// Extent of the item along the scroll axis.
    pub size: S,
}

impl<S: Scalar> VirtualItem<S> {
    /// End of the item from the start of the content.
    #[must_use]
    pub fn end(&self) -> S {
        self.offset + self.size
    }
}

/// The contiguous slice of items to realize, overscan included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRange<S: Scalar> {
    /// First realized index (inclusive).
    pub start: usize,
    /// One past the last realized index (exclusive).
    pub end: usize,
    /// Total extent of all items, used to size the scrollable content.
    pub total_size: S,
}

impl<S: Scalar> VisibleRange<S> {
    /// A range that realizes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            start: 0,
            end: 0,
            total_size: S::zero(),
        }
    }

    /// Returns `true` if no items are realized.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of realized items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if `index` is realized.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// The realized indices.
    #[must_use]
    pub const fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Computes which items intersect the viewport, extended by `overscan` items on each side.
///
/// - `scroll_offset`: leading edge of the viewport in content coordinates.
/// - `viewport_extent`: size of the viewport.
/// - `overscan`: extra items realized before and after the visible ones.
///
/// An item is visible when it ends after the leading edge and starts at or
/// before the trailing edge.
pub fn compute_visible_range<M>(
    model: &mut M,
    scroll_offset: M::Scalar,
    viewport_extent: M::Scalar,
    overscan: usize,
) -> VisibleRange<M::Scalar>
where
    M: ItemSizes,
{
    let zero = M::Scalar::zero();
    let len = model.len();
    if len == 0 {
        return VisibleRange::empty();
    }
    let total_size = model.total_size().max(zero);
    if total_size == zero {
        // Every item collapsed; nothing can be seen.
        return VisibleRange::empty();
    }

    let leading = scroll_offset.max(zero);
    let trailing = leading + viewport_extent.max(zero);

    let mut first = model.index_at_offset(leading).min(len - 1);
    while first > 0 && model.offset_of(first) > leading {
        first -= 1;
    }
    // Skip items that end exactly at the leading edge.
    while first + 1 < len && model.offset_of(first) + model.size_of(first) <= leading {
        first += 1;
    }

    let mut last = first;
    while last + 1 < len && model.offset_of(last + 1) <= trailing {
        last += 1;
    }

    VisibleRange {
        start: first.saturating_sub(overscan),
        end: last.saturating_add(1).saturating_add(overscan).min(len),
        total_size,
    }
}

/// Positions for every item in `range`.
pub fn virtual_items<M>(model: &mut M, range: &VisibleRange<M::Scalar>) -> Vec<VirtualItem<M::Scalar>>
where
    M: ItemSizes,
{
    range
        .indices()
        .map(|index| VirtualItem {
            index,
            offset: model.offset_of(index),
            size: model.size_of(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{VisibleRange, compute_visible_range, virtual_items};
    use crate::{EstimatedSizes, UniformSizes};

    #[test]
    fn empty_model_realizes_nothing() {
        let mut model = UniformSizes::new(0, 10.0_f32);
        let range = compute_visible_range(&mut model, 0.0, 100.0, 3);
        assert_eq!(range, VisibleRange::empty());
    }

    #[test]
    fn collapsed_items_realize_nothing() {
        let mut model = UniformSizes::new(10, 0.0_f32);
        assert!(compute_visible_range(&mut model, 0.0, 100.0, 0).is_empty());
    }

    #[test]
    fn top_of_list_without_overscan() {
        let mut model = UniformSizes::new(100, 10.0_f32);
        let range = compute_visible_range(&mut model, 0.0, 55.0, 0);
        assert_eq!(range.indices(), 0..6);
        assert_eq!(range.total_size, 1000.0);
    }

    #[test]
    fn overscan_extends_both_sides() {
        let mut model = UniformSizes::new(100, 10.0_f32);
        let range = compute_visible_range(&mut model, 200.0, 35.0, 2);
        // Visible: 20..=23; overscan adds 18, 19 and 24, 25.
        assert_eq!(range.indices(), 18..26);
    }

    #[test]
    fn overscan_clamps_at_the_ends() {
        let mut model = UniformSizes::new(5, 10.0_f32);
        let range = compute_visible_range(&mut model, 0.0, 20.0, 10);
        assert_eq!(range.indices(), 0..5);
    }

    #[test]
    fn item_ending_at_leading_edge_is_skipped() {
        let mut model = UniformSizes::new(10, 10.0_f32);
        let range = compute_visible_range(&mut model, 30.0, 15.0, 0);
        assert_eq!(range.start, 3);
        assert_eq!(range.end, 5);
    }

    #[test]
    fn scrolled_past_the_end_keeps_last_item() {
        let mut model = UniformSizes::new(4, 10.0_f32);
        let range = compute_visible_range(&mut model, 400.0, 20.0, 0);
        assert_eq!(range.indices(), 3..4);
    }

    #[test]
    fn variable_sizes_produce_contiguous_positions() {
        let mut model = EstimatedSizes::from_estimate(6, &|i| if i == 0 { 48.0_f32 } else { 36.0 });
        let range = compute_visible_range(&mut model, 0.0, 100.0, 0);
        let items = virtual_items(&mut model, &range);
        assert_eq!(items.first().map(|i| i.index), Some(0));
        assert_eq!(items.len(), 3);
        for pair in items.windows(2) {
            assert_eq!(pair[0].end(), pair[1].offset);
        }
    }
}
