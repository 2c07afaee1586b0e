// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kookie_virtual_menu --heading-base-level=0

//! Kookie Virtual Menu: a headless, windowed menu for large item lists.
//!
//! Only the items in or near the viewport are realized, while keyboard
//! navigation and accessibility metadata behave as if the whole list were
//! mounted.
//!
//! The crate is layered:
//!
//! - [`ItemSizes`] models ([`UniformSizes`], [`EstimatedSizes`], and the
//!   switching [`SizeModel`]) answer size and offset queries.
//! - [`compute_visible_range`] and [`virtual_items`] turn a scroll position into
//!   the realized subset.
//! - [`Virtualizer`] owns a model plus scroll state and computes
//!   [`scroll_to_index`](Virtualizer::scroll_to_index) targets.
//! - [`VirtualMenu`] adds a [`Highlight`], the menu key bindings, pointer
//!   handling, and the [`RootProps`]/[`ItemProps`] bundles a host spreads onto
//!   its elements.
//! - [`MenuEnvironment`] carries what an enclosing menu tells the lists inside
//!   it: whether it already owns the `menu` role and which [`MenuSize`] its
//!   items use.
//!
//! ## Minimal example
//!
//! ```rust
//! use kookie_virtual_menu::{ItemSize, Key, VirtualMenu, VirtualMenuOptions};
//!
//! let items: Vec<String> = (0..10_000).map(|i| format!("Row {i}")).collect();
//! let mut menu = VirtualMenu::<String, ()>::builder()
//!     .label_field(String::as_str)
//!     .options(VirtualMenuOptions {
//!         estimated_item_size: Some(ItemSize::Fixed(32.0)),
//!         overscan: 3,
//!         ..VirtualMenuOptions::default()
//!     })
//!     .viewport_extent(320.0)
//!     .build()?;
//!
//! let view = menu.render(&items);
//! assert_eq!(view.root.role, Some("menu"));
//! // Items 0..=10 touch the viewport, plus three below.
//! assert_eq!(view.items.len(), 14);
//!
//! let outcome = menu.handle_key(&items, Key::End);
//! assert_eq!(outcome.highlighted, Some(9_999));
//! assert_eq!(outcome.scroll_to, Some(320_000.0 - 320.0));
//! # Ok::<(), kookie_virtual_menu::ConfigError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`MenuSize`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod context;
mod highlight;
mod keyboard;
mod menu;
mod props;
mod render;
mod scalar;
mod sizing;
mod virtualizer;
mod window;

pub use context::{DEFAULT_ITEM_EXTENT, MenuEnvironment, MenuSize};
pub use highlight::{Highlight, WrapMode};
pub use keyboard::{Key, KeyOutcome};
pub use menu::{MenuView, VirtualMenu, VirtualMenuBuilder, VirtualMenuOptions};
pub use props::{ItemEvent, ItemHandlers, ItemProps, ItemStyle, RootProps, item_id};
pub use render::{ConfigError, ItemRenderer, ItemView, LabelAccessor};
pub use scalar::Scalar;
pub use sizing::{EstimatedSizes, ItemSize, ItemSizes, SizeModel, UniformSizes};
pub use virtualizer::{ScrollAlign, Virtualizer};
pub use window::{VirtualItem, VisibleRange, compute_visible_range, virtual_items};
