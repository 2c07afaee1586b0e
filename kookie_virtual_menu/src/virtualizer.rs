// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll state plus a size model, with index-based scrolling.

use alloc::vec::Vec;

use crate::{ItemSizes, Scalar, VirtualItem, VisibleRange, compute_visible_range, virtual_items};

/// Where to place an item when scrolling it into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Item start at the viewport start.
    Start,
    /// Item centered in the viewport.
    Center,
    /// Item end at the viewport end.
    End,
    /// Nearest edge, minimal movement; no movement if already fully visible.
    #[default]
    Auto,
}

/// Owns a size model and the scroll state of one scroll container.
///
/// The host reports scroll and viewport changes; the virtualizer answers
/// which items to realize and where. [`Virtualizer::scroll_to_index`] computes
/// and stores a new offset, which the host then assigns to its container.
/// Successive calls simply overwrite the target.
#[derive(Debug)]
pub struct Virtualizer<M: ItemSizes> {
    model: M,
    scroll_offset: M::Scalar,
    viewport_extent: M::Scalar,
    overscan: usize,

    dirty: bool,
    last_range: VisibleRange<M::Scalar>,
}

impl<M: ItemSizes> Virtualizer<M> {
    /// Creates a virtualizer scrolled to the top.
    #[must_use]
    pub fn new(model: M, viewport_extent: M::Scalar, overscan: usize) -> Self {
        Self {
            model,
            scroll_offset: M::Scalar::zero(),
            viewport_extent: viewport_extent.max(M::Scalar::zero()),
            overscan,
            dirty: true,
            last_range: VisibleRange::empty(),
        }
    }

    /// The size model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the size model; invalidates the cached range.
    pub fn model_mut(&mut self) -> &mut M {
        self.dirty = true;
        &mut self.model
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> M::Scalar {
        self.scroll_offset
    }

    /// Records the container's scroll offset. Negative offsets clamp to zero.
    pub fn set_scroll_offset(&mut self, offset: M::Scalar) {
        let offset = offset.max(M::Scalar::zero());
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.dirty = true;
        }
    }

    /// Current viewport extent.
    #[must_use]
    pub const fn viewport_extent(&self) -> M::Scalar {
        self.viewport_extent
    }

    /// Records the container's visible extent.
    pub fn set_viewport_extent(&mut self, extent: M::Scalar) {
        let extent = extent.max(M::Scalar::zero());
        if extent != self.viewport_extent {
            self.viewport_extent = extent;
            self.dirty = true;
        }
    }

    /// Items realized beyond each edge of the viewport.
    #[must_use]
    pub const fn overscan(&self) -> usize {
        self.overscan
    }

    /// Sets the overscan item count.
    pub fn set_overscan(&mut self, overscan: usize) {
        if overscan != self.overscan {
            self.overscan = overscan;
            self.dirty = true;
        }
    }

    /// Computes or returns the cached visible range.
    pub fn visible_range(&mut self) -> VisibleRange<M::Scalar> {
        if self.dirty {
            self.last_range = compute_visible_range(
                &mut self.model,
                self.scroll_offset,
                self.viewport_extent,
                self.overscan,
            );
            self.dirty = false;
        }
        self.last_range
    }

    /// Positions for every realized item.
    pub fn virtual_items(&mut self) -> Vec<VirtualItem<M::Scalar>> {
        let range = self.visible_range();
        virtual_items(&mut self.model, &range)
    }

    /// Total content extent.
    pub fn total_size(&mut self) -> M::Scalar {
        self.model.total_size()
    }

    /// Largest scroll offset that keeps the viewport inside the content.
    pub fn max_scroll_offset(&mut self) -> M::Scalar {
        (self.model.total_size() - self.viewport_extent).max(M::Scalar::zero())
    }

    /// Clamps the scroll offset into `0..=max_scroll_offset()`.
    pub fn clamp_scroll_to_content(&mut self) {
        let max = self.max_scroll_offset();
        self.set_scroll_offset(self.scroll_offset.min(max));
    }

    /// Returns `true` if item `index` lies entirely inside the viewport.
    pub fn is_index_fully_visible(&mut self, index: usize) -> bool {
        if index >= self.model.len() {
            return false;
        }
        let start = self.model.offset_of(index);
        let end = start + self.model.size_of(index);
        start >= self.scroll_offset && end <= self.scroll_offset + self.viewport_extent
    }

    /// First item overlapping the viewport, ignoring overscan.
    pub fn first_visible_index(&mut self) -> Option<usize> {
        let range = compute_visible_range(
            &mut self.model,
            self.scroll_offset,
            self.viewport_extent,
            0,
        );
        (!range.is_empty()).then_some(range.start)
    }

    /// Last item overlapping the viewport, ignoring overscan.
    pub fn last_visible_index(&mut self) -> Option<usize> {
        let range = compute_visible_range(
            &mut self.model,
            self.scroll_offset,
            self.viewport_extent,
            0,
        );
        (!range.is_empty()).then(|| range.end - 1)
    }

    /// Scrolls item `index` into view and returns the new offset.
    ///
    /// Indices past the end are clamped to the last item. The result is
    /// clamped into the scrollable range.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> M::Scalar {
        let zero = M::Scalar::zero();
        let len = self.model.len();
        if len == 0 {
            self.set_scroll_offset(zero);
            return zero;
        }
        let index = index.min(len - 1);
        let item_start = self.model.offset_of(index);
        let item_end = item_start + self.model.size_of(index);
        let viewport = self.viewport_extent;
        let current = self.scroll_offset;

        let target = match align {
            ScrollAlign::Start => item_start,
            ScrollAlign::End => item_end - viewport,
            ScrollAlign::Center => {
                let two = M::Scalar::from_usize(2);
                (item_start + item_end) / two - viewport / two
            }
            ScrollAlign::Auto => {
                if item_start >= current && item_end <= current + viewport {
                    current
                } else if item_start < current {
                    item_start
                } else {
                    item_end - viewport
                }
            }
        };

        let max = self.max_scroll_offset();
        self.set_scroll_offset(target.max(zero).min(max));
        self.scroll_offset
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollAlign, Virtualizer};
    use crate::{EstimatedSizes, ItemSizes, UniformSizes};

    #[test]
    fn range_tracks_scroll_and_viewport() {
        let mut list = Virtualizer::new(UniformSizes::new(100, 10.0_f32), 45.0, 0);
        assert_eq!(list.visible_range().indices(), 0..5);

        list.set_scroll_offset(10.0);
        assert_eq!(list.visible_range().indices(), 1..6);
        assert_eq!(list.first_visible_index(), Some(1));
        assert_eq!(list.last_visible_index(), Some(5));

        list.set_viewport_extent(15.0);
        assert_eq!(list.visible_range().indices(), 1..3);
    }

    #[test]
    fn scroll_alignment() {
        let mut list = Virtualizer::new(UniformSizes::new(10, 10.0_f32), 30.0, 0);

        assert_eq!(list.scroll_to_index(3, ScrollAlign::Start), 30.0);
        assert_eq!(list.scroll_to_index(3, ScrollAlign::End), 10.0);
        assert_eq!(list.scroll_to_index(3, ScrollAlign::Center), 20.0);

        // Already fully visible: no movement.
        assert_eq!(list.scroll_to_index(3, ScrollAlign::Auto), 20.0);
        // Below the viewport: align the end.
        assert_eq!(list.scroll_to_index(6, ScrollAlign::Auto), 40.0);
        // Above the viewport: align the start.
        assert_eq!(list.scroll_to_index(1, ScrollAlign::Auto), 10.0);
    }

    #[test]
    fn scroll_targets_clamp_to_content() {
        let mut list = Virtualizer::new(UniformSizes::new(10, 10.0_f32), 30.0, 0);
        // Start-aligning the last item would overscroll; max offset is 70.
        assert_eq!(list.scroll_to_index(9, ScrollAlign::Start), 70.0);
        assert_eq!(list.scroll_to_index(0, ScrollAlign::End), 0.0);
        assert_eq!(list.scroll_to_index(99, ScrollAlign::End), 70.0);
    }

    #[test]
    fn later_scroll_requests_override_earlier_ones() {
        let mut list = Virtualizer::new(UniformSizes::new(50, 10.0_f32), 30.0, 0);
        list.scroll_to_index(40, ScrollAlign::Start);
        list.scroll_to_index(2, ScrollAlign::Start);
        assert_eq!(list.scroll_offset(), 20.0);
    }

    #[test]
    fn clamp_and_visibility_queries() {
        let mut list = Virtualizer::new(UniformSizes::new(5, 10.0_f32), 30.0, 1);
        list.set_scroll_offset(100.0);
        list.clamp_scroll_to_content();
        assert_eq!(list.scroll_offset(), 20.0);
        assert!(list.is_index_fully_visible(2));
        assert!(!list.is_index_fully_visible(1));
        assert!(!list.is_index_fully_visible(5));
    }

    #[test]
    fn model_changes_invalidate_the_cache() {
        let mut list = Virtualizer::new(EstimatedSizes::from_estimate(10, &|_| 10.0_f32), 20.0, 0);
        assert_eq!(list.visible_range().indices(), 0..3);
        list.model_mut().measure(0, 25.0);
        assert_eq!(list.visible_range().indices(), 0..1);
        assert_eq!(list.model().len(), 10);
    }

    #[test]
    fn empty_list_scrolls_to_top() {
        let mut list = Virtualizer::new(UniformSizes::new(0, 10.0_f32), 30.0, 0);
        list.set_scroll_offset(50.0);
        assert_eq!(list.scroll_to_index(3, ScrollAlign::Auto), 0.0);
        assert!(list.visible_range().is_empty());
    }
}
