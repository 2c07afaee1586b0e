// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive values and mobile-first resolution.

use crate::Breakpoint;

/// A partial mapping from [`Breakpoint`] to `T`.
///
/// Unset tiers are `None`. With the `serde` feature this (de)serializes as an
/// object keyed by tier names, for example `{ "initial": "a", "md": "b" }`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointMap<T> {
    /// Value for [`Breakpoint::Initial`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub initial: Option<T>,
    /// Value for [`Breakpoint::Xs`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub xs: Option<T>,
    /// Value for [`Breakpoint::Sm`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sm: Option<T>,
    /// Value for [`Breakpoint::Md`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub md: Option<T>,
    /// Value for [`Breakpoint::Lg`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lg: Option<T>,
    /// Value for [`Breakpoint::Xl`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub xl: Option<T>,
}

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BreakpointMap<T> {
    /// Creates a mapping with no tiers set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial: None,
            xs: None,
            sm: None,
            md: None,
            lg: None,
            xl: None,
        }
    }

    /// Builder-style setter for one tier.
    #[must_use]
    pub fn with(mut self, breakpoint: Breakpoint, value: T) -> Self {
        self.set(breakpoint, value);
        self
    }

    /// Sets the value for `breakpoint`, returning the previous one.
    pub fn set(&mut self, breakpoint: Breakpoint, value: T) -> Option<T> {
        self.slot_mut(breakpoint).replace(value)
    }

    /// Clears the value for `breakpoint`, returning it.
    pub fn remove(&mut self, breakpoint: Breakpoint) -> Option<T> {
        self.slot_mut(breakpoint).take()
    }

    /// The value set for exactly `breakpoint`, without fallback.
    #[must_use]
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match breakpoint {
            Breakpoint::Initial => self.initial.as_ref(),
            Breakpoint::Xs => self.xs.as_ref(),
            Breakpoint::Sm => self.sm.as_ref(),
            Breakpoint::Md => self.md.as_ref(),
            Breakpoint::Lg => self.lg.as_ref(),
            Breakpoint::Xl => self.xl.as_ref(),
        }
    }

    fn slot_mut(&mut self, breakpoint: Breakpoint) -> &mut Option<T> {
        match breakpoint {
            Breakpoint::Initial => &mut self.initial,
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        }
    }

    /// Returns `true` if no tier is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Breakpoint::ALL.into_iter().all(|bp| self.get(bp).is_none())
    }

    /// The value for `breakpoint`, falling back toward smaller tiers.
    ///
    /// The exact tier is consulted first, then each smaller tier in turn,
    /// ending with [`Breakpoint::Initial`].
    #[must_use]
    pub fn fallback(&self, breakpoint: Breakpoint) -> Option<&T> {
        breakpoint.fallback_chain().find_map(|bp| self.get(bp))
    }
}

/// A value that is either concrete or varies per [`Breakpoint`].
///
/// With the `serde` feature this is untagged: a bare value deserializes as
/// [`Responsive::Value`] and an object keyed by tier names as [`Responsive::ByBreakpoint`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Responsive<T> {
    /// The same value at every breakpoint.
    Value(T),
    /// A per-tier mapping, resolved mobile-first.
    ByBreakpoint(BreakpointMap<T>),
}

impl<T> Responsive<T> {
    /// Resolves against `breakpoint`, returning `None` if the fallback chain is empty.
    #[must_use]
    pub fn try_resolve(&self, breakpoint: Breakpoint) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::ByBreakpoint(map) => map.fallback(breakpoint),
        }
    }

    /// Resolves against `breakpoint`, borrowing `default` if nothing applies.
    ///
    /// The result borrows from `self` or `default`, so repeated calls with the
    /// same inputs yield the same reference.
    #[must_use]
    pub fn resolve_or<'a>(&'a self, breakpoint: Breakpoint, default: &'a T) -> &'a T {
        self.try_resolve(breakpoint).unwrap_or(default)
    }

    /// Returns `true` if this is a per-tier mapping.
    #[must_use]
    pub const fn is_responsive(&self) -> bool {
        matches!(self, Self::ByBreakpoint(_))
    }
}

impl<T: Clone> Responsive<T> {
    /// Resolves against `breakpoint`, returning `default` if nothing applies.
    #[must_use]
    pub fn resolve(&self, breakpoint: Breakpoint, default: T) -> T {
        match self.try_resolve(breakpoint) {
            Some(value) => value.clone(),
            None => default,
        }
    }
}

impl<T> From<BreakpointMap<T>> for Responsive<T> {
    fn from(map: BreakpointMap<T>) -> Self {
        Self::ByBreakpoint(map)
    }
}

/// Resolves an optional responsive configuration.
///
/// A missing configuration resolves to `default`, as does a mapping with
/// nothing set at or below `breakpoint`.
#[must_use]
pub fn resolve_responsive<T: Clone>(
    value: Option<&Responsive<T>>,
    breakpoint: Breakpoint,
    default: T,
) -> T {
    match value {
        Some(value) => value.resolve(breakpoint, default),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::{BreakpointMap, Responsive, resolve_responsive};
    use crate::Breakpoint;

    #[test]
    fn plain_values_ignore_breakpoint() {
        let value = Responsive::Value('a');
        for bp in Breakpoint::ALL {
            assert_eq!(value.resolve(bp, 'z'), 'a');
        }
    }

    #[test]
    fn exact_tier_wins() {
        let value: Responsive<_> = BreakpointMap::new()
            .with(Breakpoint::Initial, 'b')
            .with(Breakpoint::Md, 'a')
            .into();
        assert_eq!(value.resolve(Breakpoint::Md, 'z'), 'a');
    }

    #[test]
    fn falls_back_to_smaller_tiers() {
        let value: Responsive<_> = BreakpointMap::new()
            .with(Breakpoint::Sm, 'a')
            .with(Breakpoint::Initial, 'b')
            .into();
        assert_eq!(value.resolve(Breakpoint::Lg, 'z'), 'a');
        assert_eq!(value.resolve(Breakpoint::Xs, 'z'), 'b');
        assert_eq!(value.resolve(Breakpoint::Initial, 'z'), 'b');
    }

    #[test]
    fn larger_tiers_are_never_consulted() {
        let value: Responsive<_> = BreakpointMap::new().with(Breakpoint::Xl, 'a').into();
        assert_eq!(value.resolve(Breakpoint::Sm, 'z'), 'z');
        assert_eq!(value.try_resolve(Breakpoint::Lg), None);
        assert_eq!(value.try_resolve(Breakpoint::Xl), Some(&'a'));
    }

    #[test]
    fn empty_mapping_uses_default() {
        let value: Responsive<char> = BreakpointMap::new().into();
        assert!(value.is_responsive());
        assert_eq!(value.resolve(Breakpoint::Xl, 'z'), 'z');
        assert_eq!(resolve_responsive(None, Breakpoint::Md, 'y'), 'y');
    }

    #[test]
    fn resolve_or_borrows_from_inputs() {
        let value: Responsive<char> = BreakpointMap::new().with(Breakpoint::Xs, 'a').into();
        let default = 'z';
        let first = value.resolve_or(Breakpoint::Md, &default);
        let second = value.resolve_or(Breakpoint::Md, &default);
        assert!(core::ptr::eq(first, second));
        assert!(core::ptr::eq(
            value.resolve_or(Breakpoint::Initial, &default),
            &default
        ));
    }

    #[test]
    fn set_and_remove_report_previous_values() {
        let mut map = BreakpointMap::new();
        assert_eq!(map.set(Breakpoint::Lg, 1), None);
        assert_eq!(map.set(Breakpoint::Lg, 2), Some(1));
        assert_eq!(map.remove(Breakpoint::Lg), Some(2));
        assert!(map.is_empty());
    }
}
