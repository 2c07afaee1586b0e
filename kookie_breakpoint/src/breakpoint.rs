// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint tiers and sets of matched tiers.

use bitflags::bitflags;

static ORDER: [Breakpoint; 6] = Breakpoint::ALL;

/// A viewport-width tier.
///
/// Tiers are ordered from smallest to largest, with [`Breakpoint::Initial`] acting
/// as the sentinel for "no media query matched" (server-side rendering, or
/// before the first real viewport measurement).
///
/// The order is only meaningful for fallback search via [`Breakpoint::position`]
/// and [`Breakpoint::fallback_chain`]; tiers deliberately do not implement `Ord`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Breakpoint {
    /// No viewport query matched.
    #[default]
    Initial,
    /// Extra small viewports (`min-width: 520px`).
    Xs,
    /// Small viewports (`min-width: 768px`).
    Sm,
    /// Medium viewports (`min-width: 1024px`).
    Md,
    /// Large viewports (`min-width: 1280px`).
    Lg,
    /// Extra large viewports (`min-width: 1640px`).
    Xl,
}

impl Breakpoint {
    /// Every tier, smallest first.
    pub const ALL: [Self; 6] = [Self::Initial, Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Tiers backed by a media query, smallest first.
    pub const QUERIED: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Position of this tier in [`Breakpoint::ALL`].
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Initial => 0,
            Self::Xs => 1,
            Self::Sm => 2,
            Self::Md => 3,
            Self::Lg => 4,
            Self::Xl => 5,
        }
    }

    /// Lowercase name used in responsive configuration objects.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Looks a tier up by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bp| bp.name() == name)
    }

    /// Minimum viewport width, in CSS pixels, at which this tier applies.
    ///
    /// Returns `None` for [`Breakpoint::Initial`], which has no query.
    #[must_use]
    pub const fn min_width(self) -> Option<u32> {
        match self {
            Self::Initial => None,
            Self::Xs => Some(520),
            Self::Sm => Some(768),
            Self::Md => Some(1024),
            Self::Lg => Some(1280),
            Self::Xl => Some(1640),
        }
    }

    /// The media query string watched for this tier.
    #[must_use]
    pub const fn media_query(self) -> Option<&'static str> {
        match self {
            Self::Initial => None,
            Self::Xs => Some("(min-width: 520px)"),
            Self::Sm => Some("(min-width: 768px)"),
            Self::Md => Some("(min-width: 1024px)"),
            Self::Lg => Some("(min-width: 1280px)"),
            Self::Xl => Some("(min-width: 1640px)"),
        }
    }

    /// Walks from this tier down to [`Breakpoint::Initial`], inclusive.
    ///
    /// This is the mobile-first fallback order used when resolving responsive values.
    pub fn fallback_chain(self) -> impl DoubleEndedIterator<Item = Self> {
        ORDER[..=self.position()].iter().rev().copied()
    }

    const fn flag(self) -> BreakpointSet {
        match self {
            Self::Initial => BreakpointSet::empty(),
            Self::Xs => BreakpointSet::XS,
            Self::Sm => BreakpointSet::SM,
            Self::Md => BreakpointSet::MD,
            Self::Lg => BreakpointSet::LG,
            Self::Xl => BreakpointSet::XL,
        }
    }
}

bitflags! {
    /// The set of tiers whose media queries currently match.
    ///
    /// With ascending `min-width` queries several tiers match at once; the
    /// current tier is the largest of them (see [`BreakpointSet::largest`]).
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BreakpointSet: u8 {
        /// `xs` matched.
        const XS = 1 << 0;
        /// `sm` matched.
        const SM = 1 << 1;
        /// `md` matched.
        const MD = 1 << 2;
        /// `lg` matched.
        const LG = 1 << 3;
        /// `xl` matched.
        const XL = 1 << 4;
    }
}

impl BreakpointSet {
    /// Adds `breakpoint` to the set. [`Breakpoint::Initial`] is a no-op.
    pub fn add(&mut self, breakpoint: Breakpoint) {
        self.insert(breakpoint.flag());
    }

    /// Returns `true` if the set contains `breakpoint`.
    ///
    /// [`Breakpoint::Initial`] is reported as contained only when nothing matched.
    #[must_use]
    pub fn matches(self, breakpoint: Breakpoint) -> bool {
        match breakpoint {
            Breakpoint::Initial => self.is_empty(),
            bp => self.contains(bp.flag()),
        }
    }

    /// The largest matched tier, or [`Breakpoint::Initial`] if none matched.
    #[must_use]
    pub fn largest(self) -> Breakpoint {
        Breakpoint::QUERIED
            .into_iter()
            .rev()
            .find(|bp| self.contains(bp.flag()))
            .unwrap_or(Breakpoint::Initial)
    }
}

impl FromIterator<Breakpoint> for BreakpointSet {
    fn from_iter<I: IntoIterator<Item = Breakpoint>>(iter: I) -> Self {
        let mut set = Self::empty();
        for bp in iter {
            set.add(bp);
        }
        set
    }
}
