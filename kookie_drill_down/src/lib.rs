// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kookie_drill_down --heading-base-level=0

//! Kookie Drill Down: responsive submenu navigation.
//!
//! Menus open submenus in one of two [`InteractionMode`]s: cascading floating
//! panels, or drill-down, where a submenu replaces its parent's content and a
//! back button returns. The mode is a [`Responsive`](kookie_breakpoint::Responsive)
//! value, so a menu can drill down on phones and cascade on desktops.
//!
//! - [`NavigationStack`]: the path of open submenu ids; empty is the root.
//! - [`DrillDownProvider`]: owns the stack for one menu content mount,
//!   re-resolves the mode on breakpoint changes, and resets to the root when
//!   drill-down turns into cascade.
//! - [`DrillDownActions`] and [`DrillDownState`]: the stable action channel and
//!   the volatile state channel, split so that triggers do not depend on state.
//! - [`DrillDownScope`] and [`SubmenuScope`]: how components find their
//!   provider and identify their submenu.
//!
//! ## Minimal example
//!
//! ```rust
//! use kookie_breakpoint::Responsive;
//! use kookie_drill_down::{AnimationDirection, DrillDownProvider, InteractionMode, SubmenuScope};
//!
//! let provider = DrillDownProvider::new(Some(Responsive::Value(InteractionMode::DrillDown)));
//! let actions = provider.actions();
//! let share = SubmenuScope::new("share", "Share");
//!
//! share.open(&actions)?;
//! let state = provider.state();
//! assert!(share.is_shown(&state));
//! assert_eq!(state.animation_direction, Some(AnimationDirection::Forward));
//!
//! share.back(&actions)?;
//! assert!(provider.state().is_root());
//! # Ok::<(), kookie_drill_down::DrillDownError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`InteractionMode`]
//!   (`"cascade"`, `"drill-down"`) and [`AnimationDirection`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod mode;
mod provider;
mod stack;
mod submenu;

pub use error::DrillDownError;
pub use mode::{AnimationDirection, InteractionMode, ResponsiveMode, resolve_mode};
pub use provider::{DrillDownActions, DrillDownProvider, DrillDownScope, DrillDownState};
pub use stack::NavigationStack;
pub use submenu::SubmenuScope;
