// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live tracking of the current breakpoint.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::media::{ListenerId, MediaQueryList, Subscriber, Viewport, select_subscriber};
use crate::{Breakpoint, BreakpointSet};

/// Snapshot of an observer's output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BreakpointState {
    /// The current tier.
    pub breakpoint: Breakpoint,
    /// `false` until the viewport has been measured at least once.
    ///
    /// Hosts should hold back breakpoint-dependent content while this is
    /// `false` to avoid flashing pre-measurement output.
    pub ready: bool,
}

struct Watcher {
    breakpoint: Breakpoint,
    list: Box<dyn MediaQueryList>,
    subscriber: Option<&'static dyn Subscriber>,
    listener: ListenerId,
}

impl fmt::Debug for Watcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watcher")
            .field("breakpoint", &self.breakpoint)
            .field("matches", &self.list.matches())
            .field("subscriber", &self.subscriber.map(|s| s.name()))
            .field("listener", &self.listener)
            .finish()
    }
}

/// Watches one media query per tier and reports the current [`Breakpoint`].
///
/// The observer is event driven: after [`BreakpointObserver::attach`] the host
/// calls [`BreakpointObserver::handle_change`] whenever any of the registered
/// lists fires. The current tier is the largest one whose query matches, or
/// [`Breakpoint::Initial`] when none do.
///
/// Listeners are removed by [`BreakpointObserver::detach`], which also runs on
/// drop.
///
/// ```rust
/// use kookie_breakpoint::{Breakpoint, BreakpointObserver};
///
/// // Without a viewport (for example during pre-rendering) nothing is observed.
/// let mut observer = BreakpointObserver::new();
/// let state = observer.attach(None);
/// assert_eq!(state.breakpoint, Breakpoint::Initial);
/// assert!(!state.ready);
/// ```
#[derive(Debug, Default)]
pub struct BreakpointObserver {
    state: BreakpointState,
    watchers: Vec<Watcher>,
}

impl BreakpointObserver {
    /// Creates an unattached observer at [`Breakpoint::Initial`], not ready.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching `viewport`, measuring it immediately.
    ///
    /// Passing `None` models the absence of a viewport: nothing is registered
    /// and the state stays at its default. Attaching twice detaches the
    /// previous lists first.
    pub fn attach(&mut self, viewport: Option<&mut dyn Viewport>) -> BreakpointState {
        let Some(viewport) = viewport else {
            return self.state;
        };
        self.detach();

        for (slot, breakpoint) in Breakpoint::QUERIED.into_iter().enumerate() {
            let Some(query) = breakpoint.media_query() else {
                continue;
            };
            let mut list = viewport.match_media(query);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "There are only five queried tiers"
            )]
            let listener = ListenerId(slot as u32);
            let subscriber = select_subscriber(list.capabilities()).and_then(|subscriber| {
                match subscriber.subscribe(list.as_mut(), listener) {
                    Ok(()) => {
                        tracing::trace!(
                            breakpoint = breakpoint.name(),
                            style = subscriber.name(),
                            "registered media query listener"
                        );
                        Some(subscriber)
                    }
                    Err(err) => {
                        if cfg!(debug_assertions) {
                            tracing::warn!(
                                breakpoint = breakpoint.name(),
                                %err,
                                "media query listener registration failed"
                            );
                        }
                        None
                    }
                }
            });
            self.watchers.push(Watcher {
                breakpoint,
                list,
                subscriber,
                listener,
            });
        }

        self.recompute();
        self.state
    }

    /// Recomputes the current tier after a list fired.
    ///
    /// Returns the new state if it differs from the previous one.
    pub fn handle_change(&mut self) -> Option<BreakpointState> {
        if self.watchers.is_empty() {
            return None;
        }
        let before = self.state;
        self.recompute();
        (self.state != before).then_some(self.state)
    }

    fn recompute(&mut self) {
        let next = self.matched().largest();
        if next != self.state.breakpoint {
            tracing::debug!(
                from = self.state.breakpoint.name(),
                to = next.name(),
                "breakpoint changed"
            );
        }
        self.state = BreakpointState {
            breakpoint: next,
            ready: true,
        };
    }

    /// The set of tiers whose queries currently match.
    #[must_use]
    pub fn matched(&self) -> BreakpointSet {
        self.watchers
            .iter()
            .filter(|w| w.list.matches())
            .map(|w| w.breakpoint)
            .collect()
    }

    /// The tier whose list registered `listener`, if any.
    #[must_use]
    pub fn breakpoint_for(&self, listener: ListenerId) -> Option<Breakpoint> {
        self.watchers
            .iter()
            .find(|w| w.listener == listener)
            .map(|w| w.breakpoint)
    }

    /// The latest snapshot.
    #[must_use]
    pub const fn state(&self) -> BreakpointState {
        self.state
    }

    /// The current tier.
    #[must_use]
    pub const fn breakpoint(&self) -> Breakpoint {
        self.state.breakpoint
    }

    /// Whether a real measurement has happened.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.state.ready
    }

    /// Returns `true` while lists are attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.watchers.is_empty()
    }

    /// Removes every registered listener and drops the lists.
    ///
    /// Each removal is attempted even if an earlier one failed. Failures are
    /// never propagated; in debug builds they are logged.
    ///
    /// The last snapshot is kept.
    pub fn detach(&mut self) {
        for mut watcher in self.watchers.drain(..) {
            let Some(subscriber) = watcher.subscriber else {
                continue;
            };
            if let Err(err) = subscriber.unsubscribe(watcher.list.as_mut(), watcher.listener) {
                if cfg!(debug_assertions) {
                    tracing::warn!(
                        breakpoint = watcher.breakpoint.name(),
                        style = subscriber.name(),
                        %err,
                        "media query listener cleanup failed"
                    );
                }
            }
        }
    }
}

impl Drop for BreakpointObserver {
    fn drop(&mut self) {
        self.detach();
    }
}
