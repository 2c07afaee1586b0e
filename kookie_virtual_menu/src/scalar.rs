// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric abstraction for sizes, offsets, and scroll positions.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// A floating-point type usable for item sizes and scroll offsets.
///
/// Implemented for `f32` and `f64`. Only operations available in `core` are
/// required, so the crate stays `no_std` without pulling in `libm`.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Converts an index or count.
    fn from_usize(value: usize) -> Self;

    /// The larger of `self` and `other`.
    #[must_use]
    fn max(self, other: Self) -> Self;

    /// The smaller of `self` and `other`.
    #[must_use]
    fn min(self, other: Self) -> Self;

    /// Returns `true` for values that are neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Returns `true` for negative values, including `-0.0`.
    fn is_sign_negative(self) -> bool;

    /// Rounds toward negative infinity and converts to `isize`, saturating.
    fn floor_to_isize(self) -> isize;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            #[allow(
                clippy::cast_precision_loss,
                reason = "Item counts far below 2^24 are exact"
            )]
            fn from_usize(value: usize) -> Self {
                value as Self
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                <$ty>::max(self, other)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                <$ty>::min(self, other)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }

            #[inline]
            #[allow(
                clippy::cast_possible_truncation,
                reason = "`as` saturates; the result is corrected toward negative infinity"
            )]
            fn floor_to_isize(self) -> isize {
                let truncated = self as isize;
                if (truncated as Self) > self {
                    truncated - 1
                } else {
                    truncated
                }
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
