// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keys the list container handles and what it reports back.

/// A key press routed to the list container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Highlight the next item, wrapping to the first.
    ArrowDown,
    /// Highlight the previous item, wrapping to the last.
    ArrowUp,
    /// Highlight the first item.
    Home,
    /// Highlight the last item.
    End,
    /// Select the highlighted item.
    Enter,
    /// Select the highlighted item.
    Space,
    /// Suppressed so focus stays in the list.
    Tab,
    /// Releases focus to an enclosing container.
    Escape,
    /// Anything else; ignored.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowDown" => Self::ArrowDown,
            "ArrowUp" => Self::ArrowUp,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// The effect of one key press.
///
/// The host applies these to the platform event and container: cancel the
/// default action, blur the container, assign the new scroll offset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct KeyOutcome {
    /// The platform default action should be cancelled.
    pub default_prevented: bool,
    /// The container should give up focus so an ancestor can react.
    pub release_focus: bool,
    /// The highlighted index after a navigation key.
    pub highlighted: Option<usize>,
    /// The new scroll offset to assign, if the list scrolled.
    pub scroll_to: Option<f32>,
    /// The index passed to the selection callback, if any.
    pub selected: Option<usize>,
}

impl KeyOutcome {
    /// A key that was not handled.
    #[must_use]
    pub const fn ignored() -> Self {
        Self {
            default_prevented: false,
            release_focus: false,
            highlighted: None,
            scroll_to: None,
            selected: None,
        }
    }

    /// A handled key with its default action cancelled.
    #[must_use]
    pub const fn prevented() -> Self {
        Self {
            default_prevented: true,
            ..Self::ignored()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn dom_key_names() {
        assert_eq!(Key::from_dom_key("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_dom_key(" "), Key::Space);
        assert_eq!(Key::from_dom_key("Esc"), Key::Escape);
        assert_eq!(Key::from_dom_key("a"), Key::Other);
    }
}
