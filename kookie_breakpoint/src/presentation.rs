// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation styles for adaptive layout containers.

use crate::{Breakpoint, Responsive};

/// How an adaptive panel (for example a shell sidebar) is laid out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Presentation {
    /// Occupies its own column in the layout flow.
    #[default]
    Fixed,
    /// Floats above content and is dismissed independently.
    Overlay,
    /// Stacks above or below neighboring content.
    Stacked,
}

/// A presentation that may vary per breakpoint.
pub type ResponsivePresentation = Responsive<Presentation>;

/// Resolves a responsive presentation, defaulting to [`Presentation::Fixed`].
///
/// This uses the same mobile-first fallback as [`Responsive::resolve`].
#[must_use]
pub fn resolve_presentation(value: &ResponsivePresentation, breakpoint: Breakpoint) -> Presentation {
    value.resolve(breakpoint, Presentation::Fixed)
}
