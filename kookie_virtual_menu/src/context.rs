// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ambient information a menu container passes to the lists inside it.

use crate::ItemSize;

/// Item extent used when neither the caller nor an enclosing menu sizes items.
pub const DEFAULT_ITEM_EXTENT: f32 = 36.0;

/// Size tier of a menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MenuSize {
    /// Compact.
    #[cfg_attr(feature = "serde", serde(rename = "1"))]
    Size1,
    /// Regular.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "2"))]
    Size2,
    /// Large.
    #[cfg_attr(feature = "serde", serde(rename = "3"))]
    Size3,
}

impl MenuSize {
    /// Item extent for this tier, in logical pixels.
    #[must_use]
    pub const fn item_extent(self) -> f32 {
        match self {
            Self::Size1 => 24.0,
            Self::Size2 => 32.0,
            Self::Size3 => 40.0,
        }
    }
}

/// What a list knows about the menu it is mounted in.
///
/// A menu container creates one for its descendants with
/// [`MenuEnvironment::inside_menu`]; root-level lists use the default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MenuEnvironment {
    /// An ancestor already owns the `menu` role and keyboard handling.
    pub is_nested_in_menu: bool,
    /// Size tier of the enclosing menu, if any.
    pub inherited_size: Option<MenuSize>,
}

impl MenuEnvironment {
    /// Not inside any menu.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            is_nested_in_menu: false,
            inherited_size: None,
        }
    }

    /// Inside a menu of the given size.
    #[must_use]
    pub const fn inside_menu(size: MenuSize) -> Self {
        Self {
            is_nested_in_menu: true,
            inherited_size: Some(size),
        }
    }

    /// Whether a list here should expose the `menu` role itself.
    #[must_use]
    pub const fn owns_menu_role(&self) -> bool {
        !self.is_nested_in_menu
    }

    /// Item extent implied by the enclosing menu, or [`DEFAULT_ITEM_EXTENT`].
    #[must_use]
    pub fn default_item_extent(&self) -> f32 {
        self.inherited_size
            .map_or(DEFAULT_ITEM_EXTENT, MenuSize::item_extent)
    }

    /// Item sizing for lists that do not size items themselves.
    #[must_use]
    pub fn default_item_size(&self) -> ItemSize {
        ItemSize::Fixed(self.default_item_extent())
    }
}
