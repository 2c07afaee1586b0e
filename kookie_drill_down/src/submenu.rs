// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity of one submenu, shared by its trigger, content and back button.

use alloc::string::String;

use crate::{DrillDownActions, DrillDownError, DrillDownState};

/// One submenu: the id pushed when it opens and the label its back button shows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubmenuScope {
    id: String,
    label: String,
}

impl SubmenuScope {
    /// A submenu with the given id and back-button label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// The id pushed onto the navigation stack.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Label for the back button shown while this submenu is current.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` if this submenu is the one currently drilled into.
    #[must_use]
    pub fn is_shown(&self, state: &DrillDownState) -> bool {
        state.mode.is_drill_down() && state.is_active(&self.id)
    }

    /// Drills into this submenu.
    pub fn open(&self, actions: &DrillDownActions) -> Result<(), DrillDownError> {
        actions.push(self.id.clone())
    }

    /// Leaves this submenu for its parent.
    pub fn back(&self, actions: &DrillDownActions) -> Result<(), DrillDownError> {
        actions.pop()
    }
}
