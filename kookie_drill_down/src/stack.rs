// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The path of open submenus.

use alloc::string::String;

use smallvec::SmallVec;

/// Submenu ids from the root menu to the one currently shown.
///
/// The empty stack is the root. Only the top may be added or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NavigationStack {
    ids: SmallVec<[String; 4]>,
}

impl NavigationStack {
    /// The root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens submenu `id` on top of the current one.
    pub fn push(&mut self, id: String) {
        self.ids.push(id);
    }

    /// Closes the current submenu. Does nothing at the root.
    pub fn pop(&mut self) -> Option<String> {
        self.ids.pop()
    }

    /// Returns to the root.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Depth below the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` at the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The submenu currently shown, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.ids.last().map(String::as_str)
    }

    /// Returns `true` if `id` is the submenu currently shown.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.current() == Some(id)
    }

    /// Ids from the outermost submenu to the current one.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    /// Iterates ids from the outermost submenu to the current one.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
