// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kookie_breakpoint --heading-base-level=0

//! Kookie Breakpoint: viewport tiers and responsive values.
//!
//! This crate is the foundational viewport signal for Kookie components:
//!
//! - [`Breakpoint`]: the ordered set of viewport tiers (`initial`, `xs`, `sm`,
//!   `md`, `lg`, `xl`), with `initial` meaning "no media query matched".
//! - [`BreakpointObserver`]: watches one media query per tier through a host
//!   [`Viewport`] and reports the largest matching tier plus a `ready` flag.
//! - [`Responsive`]: a value that is either concrete or mapped per tier, resolved
//!   mobile-first: the current tier, then each smaller tier, then a default.
//! - [`Presentation`] and [`resolve_presentation`]: the same resolution applied to
//!   adaptive layout containers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kookie_breakpoint::{Breakpoint, BreakpointMap, Responsive};
//!
//! let columns: Responsive<u8> = BreakpointMap::new()
//!     .with(Breakpoint::Initial, 1)
//!     .with(Breakpoint::Sm, 2)
//!     .into();
//!
//! assert_eq!(columns.resolve(Breakpoint::Xs, 0), 1);
//! // `lg` is unset, so resolution falls back to `md`, then `sm`.
//! assert_eq!(columns.resolve(Breakpoint::Lg, 0), 2);
//! ```
//!
//! Media query listeners come in two registration styles. [`select_subscriber`]
//! picks one per list from its [`ListenerCapabilities`], preferring `change`
//! events over the legacy API.
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for tiers, responsive values,
//!   and presentations.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod breakpoint;
pub mod media;
mod observer;
mod presentation;
mod responsive;

pub use breakpoint::{Breakpoint, BreakpointSet};
pub use media::{
    ListenerCapabilities, ListenerError, ListenerId, MediaQueryList, Subscriber, Viewport,
    select_subscriber,
};
pub use observer::{BreakpointObserver, BreakpointState};
pub use presentation::{Presentation, ResponsivePresentation, resolve_presentation};
pub use responsive::{BreakpointMap, Responsive, resolve_responsive};
