// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Submenu interaction modes and their responsive resolution.

use kookie_breakpoint::{Breakpoint, Responsive, resolve_responsive};

/// How submenus open.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum InteractionMode {
    /// Submenus open as floating panels next to their parent.
    #[default]
    Cascade,
    /// A submenu replaces its parent's content, with a back affordance.
    DrillDown,
}

impl InteractionMode {
    /// Returns `true` for [`InteractionMode::DrillDown`].
    #[must_use]
    pub const fn is_drill_down(self) -> bool {
        matches!(self, Self::DrillDown)
    }
}

/// An interaction mode that may vary per breakpoint.
pub type ResponsiveMode = Responsive<InteractionMode>;

/// Resolves the interaction mode at `breakpoint`, defaulting to
/// [`InteractionMode::Cascade`] when nothing is configured.
#[must_use]
pub fn resolve_mode(config: Option<&ResponsiveMode>, breakpoint: Breakpoint) -> InteractionMode {
    resolve_responsive(config, breakpoint, InteractionMode::Cascade)
}

/// Which way the last navigation went, for choosing a transition.
///
/// This never affects navigation state; `None` in an `Option<AnimationDirection>`
/// means no transition should play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AnimationDirection {
    /// Into a submenu.
    Forward,
    /// Back toward the root.
    Backward,
}
