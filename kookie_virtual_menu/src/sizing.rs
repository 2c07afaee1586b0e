// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item size models.
//!
//! Items are stacked along the scroll axis with no gaps: item `i` starts at the
//! sum of the sizes of items `0..i`. A model answers size and offset queries and
//! maps a scroll offset back to the item under it.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Scalar;

/// A dense strip of items, indexed `0..len`, with per-item sizes.
///
/// Offset queries take `&mut self` so implementations can maintain lazy
/// prefix-sum caches without interior mutability.
pub trait ItemSizes {
    /// Scalar used for sizes and offsets.
    type Scalar: Scalar;

    /// Number of items.
    fn len(&self) -> usize;

    /// Returns `true` if there are no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all item sizes.
    fn total_size(&mut self) -> Self::Scalar;

    /// Size of item `index`. Out-of-range indices report zero.
    fn size_of(&mut self, index: usize) -> Self::Scalar;

    /// Start of item `index` from the start of the strip.
    ///
    /// `offset_of(0) == 0` and `offset_of(i + 1) == offset_of(i) + size_of(i)`.
    fn offset_of(&mut self, index: usize) -> Self::Scalar;

    /// The item whose span contains `offset`, clamped into `0..len`.
    ///
    /// Returns `0` for an empty strip.
    fn index_at_offset(&mut self, offset: Self::Scalar) -> usize;
}

fn sanitize<S: Scalar>(size: S) -> S {
    debug_assert!(size.is_finite(), "item sizes must be finite; got {size:?}");
    if size.is_sign_negative() {
        S::zero()
    } else {
        size
    }
}

/// Every item shares one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSizes<S: Scalar> {
    len: usize,
    size: S,
}

impl<S: Scalar> UniformSizes<S> {
    /// Creates `len` items of `size`. Negative sizes clamp to zero.
    #[must_use]
    pub fn new(len: usize, size: S) -> Self {
        Self {
            len,
            size: sanitize(size),
        }
    }

    /// Sets the number of items.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// The shared item size.
    #[must_use]
    pub const fn size(&self) -> S {
        self.size
    }

    /// Replaces the shared item size.
    pub fn set_size(&mut self, size: S) {
        self.size = sanitize(size);
    }
}

impl<S: Scalar> ItemSizes for UniformSizes<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        self.len
    }

    fn total_size(&mut self) -> S {
        self.size * S::from_usize(self.len)
    }

    fn size_of(&mut self, index: usize) -> S {
        if index < self.len {
            self.size
        } else {
            S::zero()
        }
    }

    fn offset_of(&mut self, index: usize) -> S {
        S::from_usize(index.min(self.len)) * self.size
    }

    fn index_at_offset(&mut self, offset: S) -> usize {
        if self.len == 0 || self.size <= S::zero() {
            return 0;
        }
        let i = (offset / self.size).floor_to_isize().max(0);
        i.unsigned_abs().min(self.len - 1)
    }
}

/// Per-item sizes with a lazily maintained prefix-sum cache.
///
/// Sizes start as caller-supplied estimates and can be refined one item at a
/// time with [`EstimatedSizes::measure`] once real layout is known. Changing
/// a size only invalidates the cached offsets from that item onward.
#[derive(Clone, Default, Debug)]
pub struct EstimatedSizes<S: Scalar> {
    sizes: Vec<S>,
    starts: Vec<S>,
    valid_through: Option<usize>,
}

impl<S: Scalar> EstimatedSizes<S> {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sizes: Vec::new(),
            starts: Vec::new(),
            valid_through: None,
        }
    }

    /// Creates `len` items sized by `estimate(index)`.
    #[must_use]
    pub fn from_estimate(len: usize, estimate: &dyn Fn(usize) -> S) -> Self {
        let mut model = Self::new();
        model.resize_with(len, estimate);
        model
    }

    /// Grows or shrinks to `len` items.
    ///
    /// Surviving items keep their current (possibly measured) sizes; new items
    /// are sized by `estimate(index)`.
    pub fn resize_with(&mut self, len: usize, estimate: &dyn Fn(usize) -> S) {
        let old = self.sizes.len();
        if len < old {
            self.sizes.truncate(len);
            self.starts.truncate(len);
        } else {
            self.sizes.extend((old..len).map(|i| sanitize(estimate(i))));
            self.starts.resize(len, S::zero());
        }
        self.invalidate_from(old.min(len));
    }

    /// Records the real size of item `index`.
    ///
    /// Indices past the end are ignored; they come from rows that were
    /// removed before their measurement arrived.
    pub fn measure(&mut self, index: usize, size: S) {
        let Some(slot) = self.sizes.get_mut(index) else {
            return;
        };
        *slot = sanitize(size);
        self.invalidate_from(index);
    }

    fn invalidate_from(&mut self, index: usize) {
        self.valid_through = match (index, self.valid_through) {
            (0, _) | (_, None) => None,
            (i, Some(v)) => Some(v.min(i - 1)),
        };
    }

    fn ensure_through(&mut self, through: usize) {
        let len = self.sizes.len();
        if len == 0 {
            return;
        }
        let through = through.min(len - 1);
        let first_stale = match self.valid_through {
            Some(v) if v >= through => return,
            Some(v) => v + 1,
            None => 0,
        };
        let mut pos = if first_stale == 0 {
            S::zero()
        } else {
            self.starts[first_stale - 1] + self.sizes[first_stale - 1]
        };
        for i in first_stale..=through {
            self.starts[i] = pos;
            pos = pos + self.sizes[i];
        }
        self.valid_through = Some(through);
    }
}

impl<S: Scalar> ItemSizes for EstimatedSizes<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        self.sizes.len()
    }

    fn total_size(&mut self) -> S {
        let len = self.sizes.len();
        if len == 0 {
            return S::zero();
        }
        self.ensure_through(len - 1);
        self.starts[len - 1] + self.sizes[len - 1]
    }

    fn size_of(&mut self, index: usize) -> S {
        self.sizes.get(index).copied().unwrap_or_else(S::zero)
    }

    fn offset_of(&mut self, index: usize) -> S {
        let len = self.sizes.len();
        if index == 0 || len == 0 {
            return S::zero();
        }
        if index >= len {
            return self.total_size();
        }
        self.ensure_through(index);
        self.starts[index]
    }

    fn index_at_offset(&mut self, offset: S) -> usize {
        let len = self.sizes.len();
        if len == 0 {
            return 0;
        }
        self.ensure_through(len - 1);
        let target = offset.max(S::zero());
        // Last item starting at or before `target`.
        let after = self.starts.partition_point(|start| *start <= target);
        after.saturating_sub(1)
    }
}

/// How the caller sizes items: one size for all, or an estimate per index.
pub enum ItemSize<S: Scalar = f32> {
    /// Every item has this size.
    Fixed(S),
    /// Item `index` is estimated at `f(index)`.
    PerIndex(Box<dyn Fn(usize) -> S>),
}

impl<S: Scalar> ItemSize<S> {
    /// Convenience constructor for [`ItemSize::PerIndex`].
    pub fn per_index(estimate: impl Fn(usize) -> S + 'static) -> Self {
        Self::PerIndex(Box::new(estimate))
    }

    /// The estimated size of item `index`.
    pub fn estimate(&self, index: usize) -> S {
        match self {
            Self::Fixed(size) => *size,
            Self::PerIndex(f) => f(index),
        }
    }

    /// Builds a model of `len` items sized by this strategy.
    #[must_use]
    pub fn build(&self, len: usize) -> SizeModel<S> {
        match self {
            Self::Fixed(size) => SizeModel::Uniform(UniformSizes::new(len, *size)),
            Self::PerIndex(f) => SizeModel::Estimated(EstimatedSizes::from_estimate(len, &**f)),
        }
    }
}

impl<S: Scalar> fmt::Debug for ItemSize<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(size) => f.debug_tuple("Fixed").field(size).finish(),
            Self::PerIndex(_) => f.write_str("PerIndex(..)"),
        }
    }
}

/// The model a [`ItemSize`] strategy produces.
///
/// Uniform lists stay O(1) until an item is measured at a different size, at
/// which point the model switches to per-item storage.
#[derive(Clone, Debug)]
pub enum SizeModel<S: Scalar> {
    /// All items share one size.
    Uniform(UniformSizes<S>),
    /// Items have individual sizes.
    Estimated(EstimatedSizes<S>),
}

impl<S: Scalar> SizeModel<S> {
    /// Grows or shrinks to `len`, sizing new items with `strategy`.
    pub fn resize(&mut self, len: usize, strategy: &ItemSize<S>) {
        match self {
            Self::Uniform(model) => model.set_len(len),
            Self::Estimated(model) => model.resize_with(len, &|i| strategy.estimate(i)),
        }
    }

    /// Records the measured size of item `index`.
    pub fn measure(&mut self, index: usize, size: S) {
        match self {
            Self::Uniform(model) => {
                if index >= model.len() || size == model.size() {
                    return;
                }
                let uniform = model.size();
                let mut sizes = EstimatedSizes::from_estimate(model.len(), &|_| uniform);
                sizes.measure(index, size);
                *self = Self::Estimated(sizes);
            }
            Self::Estimated(model) => model.measure(index, size),
        }
    }
}

impl<S: Scalar> ItemSizes for SizeModel<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        match self {
            Self::Uniform(m) => m.len(),
            Self::Estimated(m) => m.len(),
        }
    }

    fn total_size(&mut self) -> S {
        match self {
            Self::Uniform(m) => m.total_size(),
            Self::Estimated(m) => m.total_size(),
        }
    }

    fn size_of(&mut self, index: usize) -> S {
        match self {
            Self::Uniform(m) => m.size_of(index),
            Self::Estimated(m) => m.size_of(index),
        }
    }

    fn offset_of(&mut self, index: usize) -> S {
        match self {
            Self::Uniform(m) => m.offset_of(index),
            Self::Estimated(m) => m.offset_of(index),
        }
    }

    fn index_at_offset(&mut self, offset: S) -> usize {
        match self {
            Self::Uniform(m) => m.index_at_offset(offset),
            Self::Estimated(m) => m.index_at_offset(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EstimatedSizes, ItemSize, ItemSizes, SizeModel, UniformSizes};

    #[test]
    fn uniform_offsets_and_lookup() {
        let mut model = UniformSizes::new(5, 10.0_f32);
        assert_eq!(model.total_size(), 50.0);
        assert_eq!(model.offset_of(3), 30.0);
        assert_eq!(model.index_at_offset(0.0), 0);
        assert_eq!(model.index_at_offset(9.9), 0);
        assert_eq!(model.index_at_offset(10.0), 1);
        assert_eq!(model.index_at_offset(500.0), 4);
        assert_eq!(model.index_at_offset(-5.0), 0);
    }

    #[test]
    fn negative_sizes_clamp_to_zero() {
        let mut model = UniformSizes::new(3, -4.0_f32);
        assert_eq!(model.size(), 0.0);
        assert_eq!(model.index_at_offset(10.0), 0);

        let mut sizes = EstimatedSizes::from_estimate(1, &|_| 10.0_f32);
        sizes.measure(0, -2.0);
        assert_eq!(sizes.size_of(0), 0.0);
    }

    #[test]
    fn stale_measurements_are_ignored() {
        let mut sizes = EstimatedSizes::from_estimate(3, &|_| 10.0_f32);
        sizes.measure(10, 20.0);
        assert_eq!(sizes.len(), 3);
        assert_eq!(sizes.total_size(), 30.0);

        let mut uniform = ItemSize::Fixed(10.0_f32).build(3);
        uniform.measure(10, 20.0);
        assert!(matches!(uniform, SizeModel::Uniform(_)));
        assert_eq!(uniform.len(), 3);
        assert_eq!(uniform.total_size(), 30.0);
    }

    #[test]
    fn estimated_offsets_are_running_sums() {
        let mut model = EstimatedSizes::from_estimate(4, &|i| if i == 1 { 48.0_f32 } else { 36.0 });
        assert_eq!(model.offset_of(0), 0.0);
        assert_eq!(model.offset_of(1), 36.0);
        assert_eq!(model.offset_of(2), 84.0);
        assert_eq!(model.offset_of(3), 120.0);
        assert_eq!(model.total_size(), 156.0);
        assert_eq!(model.index_at_offset(84.0), 2);
        assert_eq!(model.index_at_offset(83.9), 1);
    }

    #[test]
    fn measuring_invalidates_later_offsets_only() {
        let mut model = EstimatedSizes::from_estimate(4, &|_| 10.0_f32);
        assert_eq!(model.offset_of(3), 30.0);
        model.measure(1, 25.0);
        assert_eq!(model.offset_of(1), 10.0);
        assert_eq!(model.offset_of(2), 35.0);
        assert_eq!(model.total_size(), 55.0);
    }

    #[test]
    fn resize_keeps_measured_sizes() {
        let mut model = EstimatedSizes::from_estimate(2, &|_| 10.0_f32);
        model.measure(0, 30.0);
        model.resize_with(4, &|_| 5.0);
        assert_eq!(model.size_of(0), 30.0);
        assert_eq!(model.size_of(3), 5.0);
        assert_eq!(model.total_size(), 50.0);
        model.resize_with(1, &|_| 5.0);
        assert_eq!(model.total_size(), 30.0);
    }

    #[test]
    fn uniform_model_switches_on_divergent_measurement() {
        let strategy = ItemSize::Fixed(20.0_f32);
        let mut model = strategy.build(3);
        model.measure(1, 20.0);
        assert!(matches!(model, SizeModel::Uniform(_)));
        model.measure(1, 40.0);
        assert!(matches!(model, SizeModel::Estimated(_)));
        assert_eq!(model.offset_of(2), 60.0);
        assert_eq!(model.total_size(), 80.0);
    }

    #[test]
    fn per_index_strategy_sizes_new_items() {
        let strategy = ItemSize::per_index(|i| if i % 2 == 0 { 10.0_f32 } else { 20.0 });
        let mut model = strategy.build(2);
        assert_eq!(model.total_size(), 30.0);
        model.resize(4, &strategy);
        assert_eq!(model.total_size(), 60.0);
    }
}
