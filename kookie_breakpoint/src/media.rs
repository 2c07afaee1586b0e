// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing media query abstraction.
//!
//! Hosts expose their viewport through [`Viewport`], which hands out one
//! [`MediaQueryList`] per query string. Lists come in two flavors: those that
//! accept `change` event listeners and older ones that only accept plain
//! listeners. [`select_subscriber`] inspects [`ListenerCapabilities`] once and
//! returns the matching [`Subscriber`], so callers never branch on the flavor
//! again.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use bitflags::bitflags;

/// Identifies a listener registered with a [`MediaQueryList`].
///
/// When a list fires, the host reports the change back to whichever observer
/// handed out the id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

/// Errors raised while registering or removing media query listeners.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListenerError {
    /// The list does not implement the requested registration style.
    #[error("media query list does not support this listener style")]
    Unsupported,
    /// The listener was never registered or has already been removed.
    #[error("listener {0:?} is not attached")]
    NotAttached(ListenerId),
    /// The host refused the operation.
    #[error("media query list rejected the listener: {0}")]
    Rejected(String),
}

bitflags! {
    /// Listener registration styles a [`MediaQueryList`] implements.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ListenerCapabilities: u8 {
        /// `addEventListener("change")` / `removeEventListener("change")`.
        const CHANGE_EVENT = 1 << 0;
        /// `addListener` / `removeListener`.
        const LEGACY = 1 << 1;
    }
}

/// One media query, as exposed by the host.
///
/// Registration methods default to [`ListenerError::Unsupported`]; hosts override
/// the pair matching the capabilities they report.
pub trait MediaQueryList {
    /// Whether the query currently matches the viewport.
    fn matches(&self) -> bool;

    /// Registration styles this list implements.
    fn capabilities(&self) -> ListenerCapabilities;

    /// Registers `id` for `change` events.
    fn add_change_listener(&mut self, id: ListenerId) -> Result<(), ListenerError> {
        let _ = id;
        Err(ListenerError::Unsupported)
    }

    /// Removes a `change` event registration.
    fn remove_change_listener(&mut self, id: ListenerId) -> Result<(), ListenerError> {
        let _ = id;
        Err(ListenerError::Unsupported)
    }

    /// Registers `id` with the legacy listener API.
    fn add_listener(&mut self, id: ListenerId) -> Result<(), ListenerError> {
        let _ = id;
        Err(ListenerError::Unsupported)
    }

    /// Removes a legacy listener registration.
    fn remove_listener(&mut self, id: ListenerId) -> Result<(), ListenerError> {
        let _ = id;
        Err(ListenerError::Unsupported)
    }
}

/// Source of [`MediaQueryList`]s, typically a browser window.
pub trait Viewport {
    /// Creates a list watching `query`.
    fn match_media(&mut self, query: &str) -> Box<dyn MediaQueryList>;
}

/// A listener registration style.
///
/// Implementations wrap one pair of [`MediaQueryList`] registration methods.
pub trait Subscriber: fmt::Debug {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Registers `id` with `list`.
    fn subscribe(&self, list: &mut dyn MediaQueryList, id: ListenerId)
    -> Result<(), ListenerError>;

    /// Removes the registration of `id` from `list`.
    fn unsubscribe(
        &self,
        list: &mut dyn MediaQueryList,
        id: ListenerId,
    ) -> Result<(), ListenerError>;
}

/// Registers through `change` events.
#[derive(Copy, Clone, Debug, Default)]
pub struct ChangeEventSubscriber;

impl Subscriber for ChangeEventSubscriber {
    fn name(&self) -> &'static str {
        "change-event"
    }

    fn subscribe(
        &self,
        list: &mut dyn MediaQueryList,
        id: ListenerId,
    ) -> Result<(), ListenerError> {
        list.add_change_listener(id)
    }

    fn unsubscribe(
        &self,
        list: &mut dyn MediaQueryList,
        id: ListenerId,
    ) -> Result<(), ListenerError> {
        list.remove_change_listener(id)
    }
}

/// Registers through the legacy `addListener` API.
#[derive(Copy, Clone, Debug, Default)]
pub struct LegacySubscriber;

impl Subscriber for LegacySubscriber {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn subscribe(
        &self,
        list: &mut dyn MediaQueryList,
        id: ListenerId,
    ) -> Result<(), ListenerError> {
        list.add_listener(id)
    }

    fn unsubscribe(
        &self,
        list: &mut dyn MediaQueryList,
        id: ListenerId,
    ) -> Result<(), ListenerError> {
        list.remove_listener(id)
    }
}

static CHANGE_EVENT: ChangeEventSubscriber = ChangeEventSubscriber;
static LEGACY: LegacySubscriber = LegacySubscriber;

/// Picks the registration style for a list with `capabilities`.
///
/// `change` events are preferred; the legacy API is the fallback. Returns
/// `None` when the list supports neither, in which case it can still be
/// polled through [`MediaQueryList::matches`] but will never notify.
#[must_use]
pub fn select_subscriber(capabilities: ListenerCapabilities) -> Option<&'static dyn Subscriber> {
    if capabilities.contains(ListenerCapabilities::CHANGE_EVENT) {
        Some(&CHANGE_EVENT)
    } else if capabilities.contains(ListenerCapabilities::LEGACY) {
        Some(&LEGACY)
    } else {
        None
    }
}
