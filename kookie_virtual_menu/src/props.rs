// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prop bundles handed to the host for the list container and each item.
//!
//! A host spreads these onto its rendered elements. The bundles are plain data;
//! [`ItemProps::attributes`] and [`RootProps::attributes`] flatten them into
//! DOM-style `(name, value)` pairs for hosts that work with attribute lists.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Positioning for one realized item.
///
/// Items are absolutely positioned inside a content box of the list's total
/// size; the host supplies the static part (`position`, `top`, `left`, `width`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemStyle {
    /// Extent along the scroll axis.
    pub height: f32,
    /// Offset from the start of the content.
    pub translate_y: f32,
}

impl ItemStyle {
    /// Inline CSS for the dynamic part of the style.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "height: {}px; transform: translateY({}px)",
            self.height, self.translate_y
        )
    }
}

/// Something that happened to a rendered item.
///
/// Events carry only the item index, so a host can bind one handler per list
/// rather than one per item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemEvent {
    /// The pointer entered the item.
    PointerEnter(usize),
    /// The pointer left the item.
    PointerLeave(usize),
    /// The item was clicked.
    Click(usize),
}

impl ItemEvent {
    /// The item the event targets.
    #[must_use]
    pub const fn index(&self) -> usize {
        match *self {
            Self::PointerEnter(index) | Self::PointerLeave(index) | Self::Click(index) => index,
        }
    }
}

/// Event bindings for one item.
///
/// The bindings only remember the item index; they stay equal across renders
/// as long as the item keeps its position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemHandlers {
    index: usize,
}

impl ItemHandlers {
    /// Bindings for item `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Event for the pointer entering the item.
    #[must_use]
    pub const fn pointer_enter(&self) -> ItemEvent {
        ItemEvent::PointerEnter(self.index)
    }

    /// Event for the pointer leaving the item.
    #[must_use]
    pub const fn pointer_leave(&self) -> ItemEvent {
        ItemEvent::PointerLeave(self.index)
    }

    /// Event for a click on the item.
    #[must_use]
    pub const fn click(&self) -> ItemEvent {
        ItemEvent::Click(self.index)
    }
}

/// Everything a rendered item must expose for the keyboard, pointer and
/// accessibility contracts to hold.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemProps {
    /// Element id, referenced by the container's `aria-activedescendant`.
    pub id: String,
    /// Index into the source collection.
    pub index: usize,
    /// Whether this is the highlighted item.
    pub is_highlighted: bool,
    /// Dynamic positioning.
    pub style: ItemStyle,
    /// Always `"menuitem"`.
    pub role: &'static str,
    /// `0` for the highlighted item, `-1` otherwise.
    pub tab_index: i32,
    /// One-based position among all items, mounted or not.
    pub aria_posinset: usize,
    /// Total number of items.
    pub aria_setsize: usize,
    /// Event bindings.
    pub handlers: ItemHandlers,
}

impl ItemProps {
    /// The props as DOM attributes.
    ///
    /// `data-highlighted` is only present on the highlighted item.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::with_capacity(8);
        attrs.push(("id", self.id.clone()));
        attrs.push(("role", self.role.to_string()));
        attrs.push(("tabindex", self.tab_index.to_string()));
        attrs.push(("aria-posinset", self.aria_posinset.to_string()));
        attrs.push(("aria-setsize", self.aria_setsize.to_string()));
        if self.is_highlighted {
            attrs.push(("data-highlighted", String::new()));
        }
        attrs.push(("data-index", self.index.to_string()));
        attrs.push(("style", self.style.to_css()));
        attrs
    }
}

/// Props for the scroll container.
#[derive(Clone, Debug, PartialEq)]
pub struct RootProps {
    /// Element id; item ids are derived from it.
    pub id: String,
    /// `Some("menu")` unless an enclosing menu already owns the role.
    pub role: Option<&'static str>,
    /// Accessible label.
    pub aria_label: Option<String>,
    /// Id of the highlighted item, if any.
    pub aria_activedescendant: Option<String>,
    /// Always `0`: the container takes focus, items do not.
    pub tab_index: i32,
    /// Extent of the content box that gives the container its scroll range.
    pub total_size: f32,
}

impl RootProps {
    /// The props as DOM attributes. Absent optional props are omitted.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::with_capacity(5);
        attrs.push(("id", self.id.clone()));
        if let Some(role) = self.role {
            attrs.push(("role", role.to_string()));
        }
        if let Some(label) = &self.aria_label {
            attrs.push(("aria-label", label.clone()));
        }
        if let Some(active) = &self.aria_activedescendant {
            attrs.push(("aria-activedescendant", active.clone()));
        }
        attrs.push(("tabindex", self.tab_index.to_string()));
        attrs
    }

    /// Returns the value of attribute `name`, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes()
            .into_iter()
            .find_map(|(attr, value)| (attr == name).then_some(value))
    }
}

/// Id of item `index` in the menu with id `menu_id`.
#[must_use]
pub fn item_id(menu_id: &str, index: usize) -> String {
    format!("{menu_id}-item-{index}")
}
