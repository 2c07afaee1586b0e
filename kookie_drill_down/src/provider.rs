// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation provider and its two channels.
//!
//! A [`DrillDownProvider`] owns the navigation state of one menu content
//! mount. It hands out two kinds of access:
//!
//! - [`DrillDownActions`]: a cheap handle for `push`/`pop`/`reset`. Every
//!   handle from one provider compares equal, forever, so components that only
//!   trigger navigation never need to refresh it.
//! - [`DrillDownState`]: a snapshot of the stack, mode and derived flags. Its
//!   [`revision`](DrillDownState::revision) changes with every state change,
//!   so subscribers can skip snapshots they have already seen.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;
use core::mem;

use kookie_breakpoint::{Breakpoint, BreakpointState};

use crate::{
    AnimationDirection, DrillDownError, InteractionMode, NavigationStack, ResponsiveMode,
    resolve_mode,
};

#[derive(Debug)]
struct Shared {
    stack: NavigationStack,
    direction: Option<AnimationDirection>,
    config: Option<ResponsiveMode>,
    viewport: BreakpointState,
    mode: InteractionMode,
    revision: u64,
}

impl Shared {
    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn push(&mut self, id: String) {
        tracing::trace!(id = id.as_str(), depth = self.stack.len() + 1, "drill-down push");
        self.stack.push(id);
        self.direction = Some(AnimationDirection::Forward);
        self.touch();
    }

    fn pop(&mut self) {
        let popped = self.stack.pop();
        tracing::trace!(id = popped.as_deref(), depth = self.stack.len(), "drill-down pop");
        self.direction = Some(AnimationDirection::Backward);
        self.touch();
    }

    fn reset(&mut self) {
        tracing::trace!(depth = self.stack.len(), "drill-down reset");
        self.stack.clear();
        self.direction = None;
        self.touch();
    }

    /// Re-resolves the mode; returns `true` if anything changed.
    fn resolve(&mut self) -> bool {
        let mode = resolve_mode(self.config.as_ref(), self.viewport.breakpoint);
        if mode == self.mode {
            return false;
        }
        let previous = mem::replace(&mut self.mode, mode);
        if previous.is_drill_down() && !mode.is_drill_down() {
            tracing::debug!(
                depth = self.stack.len(),
                breakpoint = self.viewport.breakpoint.name(),
                "drill-down switched to cascade; returning to the root menu"
            );
            self.stack.clear();
            self.direction = None;
        }
        true
    }

    fn snapshot(&self) -> DrillDownState {
        DrillDownState {
            stack: self.stack.clone(),
            mode: self.mode,
            breakpoint: self.viewport.breakpoint,
            ready: self.viewport.ready,
            animation_direction: self.direction,
            revision: self.revision,
        }
    }
}

/// Owns the navigation state of one menu content mount.
///
/// The interaction mode is derived from the responsive configuration and the
/// current breakpoint. It is re-resolved on every breakpoint or configuration
/// change, and a switch from drill-down to cascade returns to the root menu so
/// the user is never left inside a submenu with no way back.
///
/// ```rust
/// use kookie_breakpoint::{Breakpoint, BreakpointMap, BreakpointState};
/// use kookie_drill_down::{DrillDownProvider, InteractionMode};
///
/// let config = BreakpointMap::new()
///     .with(Breakpoint::Initial, InteractionMode::DrillDown)
///     .with(Breakpoint::Md, InteractionMode::Cascade)
///     .into();
/// let mut provider = DrillDownProvider::new(Some(config));
/// let actions = provider.actions();
///
/// actions.push("share")?;
/// assert_eq!(provider.state().current_id(), Some("share"));
///
/// // Growing past `md` switches to cascade, which resets the stack.
/// provider.set_breakpoint(BreakpointState { breakpoint: Breakpoint::Lg, ready: true });
/// assert!(provider.state().is_root());
/// # Ok::<(), kookie_drill_down::DrillDownError>(())
/// ```
#[derive(Debug)]
pub struct DrillDownProvider {
    shared: Rc<RefCell<Shared>>,
}

impl DrillDownProvider {
    /// A provider at the root menu, before the viewport has been measured.
    ///
    /// `config` of `None` means the menu always cascades.
    #[must_use]
    pub fn new(config: Option<ResponsiveMode>) -> Self {
        let viewport = BreakpointState::default();
        let mode = resolve_mode(config.as_ref(), viewport.breakpoint);
        Self {
            shared: Rc::new(RefCell::new(Shared {
                stack: NavigationStack::new(),
                direction: None,
                config,
                viewport,
                mode,
                revision: 0,
            })),
        }
    }

    /// The stable actions channel.
    #[must_use]
    pub fn actions(&self) -> DrillDownActions {
        DrillDownActions {
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// A snapshot of the state channel.
    #[must_use]
    pub fn state(&self) -> DrillDownState {
        self.shared.borrow().snapshot()
    }

    /// Revision of the current state.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.shared.borrow().revision
    }

    /// The resolved interaction mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.shared.borrow().mode
    }

    /// A scope that resolves to this provider.
    #[must_use]
    pub fn scope(&self) -> DrillDownScope<'_> {
        DrillDownScope::within(self)
    }

    /// Feeds a new breakpoint observation.
    ///
    /// Returns `true` if the state changed.
    pub fn set_breakpoint(&mut self, viewport: BreakpointState) -> bool {
        let mut shared = self.shared.borrow_mut();
        if shared.viewport == viewport {
            return false;
        }
        shared.viewport = viewport;
        shared.resolve();
        shared.touch();
        true
    }

    /// Returns to the root menu and clears the direction.
    pub fn reset(&mut self) {
        self.shared.borrow_mut().reset();
    }

    /// Replaces the responsive mode configuration.
    ///
    /// Returns `true` if the resolved mode changed.
    pub fn set_config(&mut self, config: Option<ResponsiveMode>) -> bool {
        let mut shared = self.shared.borrow_mut();
        shared.config = config;
        let changed = shared.resolve();
        if changed {
            shared.touch();
        }
        changed
    }
}

/// The stable actions channel of a [`DrillDownProvider`].
///
/// Handles are cheap to clone and all handles of one provider compare equal.
/// They do not keep the provider alive; using one after the provider is gone
/// fails with [`DrillDownError::ProviderDropped`].
#[derive(Clone)]
pub struct DrillDownActions {
    shared: Weak<RefCell<Shared>>,
}

impl DrillDownActions {
    fn with(&self, f: impl FnOnce(&mut Shared)) -> Result<(), DrillDownError> {
        let shared = self
            .shared
            .upgrade()
            .ok_or(DrillDownError::ProviderDropped)?;
        f(&mut *shared.borrow_mut());
        Ok(())
    }

    /// Drills into submenu `id` and sets the direction to forward.
    ///
    /// The id is not validated; any string is accepted.
    pub fn push(&self, id: impl Into<String>) -> Result<(), DrillDownError> {
        let id = id.into();
        self.with(|shared| shared.push(id))
    }

    /// Returns to the parent menu and sets the direction to backward.
    ///
    /// At the root the stack is left empty.
    pub fn pop(&self) -> Result<(), DrillDownError> {
        self.with(Shared::pop)
    }

    /// Returns to the root menu and clears the direction.
    pub fn reset(&self) -> Result<(), DrillDownError> {
        self.with(Shared::reset)
    }

    /// Returns `true` while the provider is alive.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.shared.strong_count() > 0
    }
}

impl PartialEq for DrillDownActions {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.shared, &other.shared)
    }
}

impl Eq for DrillDownActions {}

impl fmt::Debug for DrillDownActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrillDownActions")
            .field("attached", &self.is_attached())
            .finish_non_exhaustive()
    }
}

/// A snapshot of the state channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrillDownState {
    /// Open submenus, outermost first.
    pub stack: NavigationStack,
    /// The resolved interaction mode.
    pub mode: InteractionMode,
    /// The breakpoint the mode was resolved at.
    pub breakpoint: Breakpoint,
    /// Whether the viewport has been measured.
    pub ready: bool,
    /// Direction of the last navigation, `None` after a reset.
    pub animation_direction: Option<AnimationDirection>,
    /// Changes whenever any other field changes.
    pub revision: u64,
}

impl DrillDownState {
    /// Returns `true` when no submenu is open.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.stack.is_empty()
    }

    /// The submenu currently shown.
    #[must_use]
    pub fn current_id(&self) -> Option<&str> {
        self.stack.current()
    }

    /// Returns `true` if `id` is the submenu currently shown.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.stack.is_active(id)
    }
}

/// Where a component looks for its provider.
///
/// Components mounted under a menu content container get a scope
/// [`within`](Self::within) its provider; anything else gets
/// [`outside`](Self::outside). Asking an outside scope for a channel is a
/// programming error reported as [`DrillDownError::OutsideProvider`]; the
/// `_optional` accessors are for components that work either way.
#[derive(Copy, Clone, Debug, Default)]
pub struct DrillDownScope<'a> {
    provider: Option<&'a DrillDownProvider>,
}

impl<'a> DrillDownScope<'a> {
    /// A scope with no provider.
    #[must_use]
    pub const fn outside() -> Self {
        Self { provider: None }
    }

    /// A scope served by `provider`.
    #[must_use]
    pub const fn within(provider: &'a DrillDownProvider) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Returns `true` if a provider serves this scope.
    #[must_use]
    pub const fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// The actions channel.
    pub fn actions(&self) -> Result<DrillDownActions, DrillDownError> {
        self.actions_optional()
            .ok_or(DrillDownError::OutsideProvider)
    }

    /// The state channel.
    pub fn state(&self) -> Result<DrillDownState, DrillDownError> {
        self.state_optional().ok_or(DrillDownError::OutsideProvider)
    }

    /// The actions channel, if a provider serves this scope.
    #[must_use]
    pub fn actions_optional(&self) -> Option<DrillDownActions> {
        self.provider.map(DrillDownProvider::actions)
    }

    /// The state channel, if a provider serves this scope.
    #[must_use]
    pub fn state_optional(&self) -> Option<DrillDownState> {
        self.provider.map(DrillDownProvider::state)
    }
}

#[cfg(test)]
mod tests {
    use kookie_breakpoint::{Breakpoint, BreakpointMap, BreakpointState, Responsive};

    use super::{DrillDownProvider, DrillDownScope};
    use crate::{AnimationDirection, DrillDownError, InteractionMode, SubmenuScope};

    fn at(breakpoint: Breakpoint) -> BreakpointState {
        BreakpointState {
            breakpoint,
            ready: true,
        }
    }

    fn small_screens_drill_down() -> DrillDownProvider {
        let config = BreakpointMap::new()
            .with(Breakpoint::Initial, InteractionMode::DrillDown)
            .with(Breakpoint::Md, InteractionMode::Cascade)
            .into();
        DrillDownProvider::new(Some(config))
    }

    #[test]
    fn push_pop_reset_directions() {
        let provider = small_screens_drill_down();
        let actions = provider.actions();

        actions.push("a").unwrap();
        actions.push("b").unwrap();
        let state = provider.state();
        assert_eq!(state.current_id(), Some("b"));
        assert!(state.is_active("b"));
        assert!(!state.is_active("a"));
        assert_eq!(state.animation_direction, Some(AnimationDirection::Forward));

        actions.pop().unwrap();
        let state = provider.state();
        assert_eq!(state.current_id(), Some("a"));
        assert_eq!(state.animation_direction, Some(AnimationDirection::Backward));

        actions.reset().unwrap();
        let state = provider.state();
        assert!(state.is_root());
        assert_eq!(state.animation_direction, None);
    }

    #[test]
    fn pop_at_root_keeps_the_stack_empty() {
        let provider = DrillDownProvider::new(None);
        provider.actions().pop().unwrap();
        let state = provider.state();
        assert!(state.is_root());
        assert_eq!(state.animation_direction, Some(AnimationDirection::Backward));
    }

    #[test]
    fn provider_reset_returns_to_root() {
        let mut provider = DrillDownProvider::new(None);
        let actions = provider.actions();
        actions.push("a").unwrap();
        actions.push("b").unwrap();
        let before = provider.revision();

        provider.reset();
        let state = provider.state();
        assert!(state.is_root());
        assert_eq!(state.animation_direction, None);
        assert!(state.revision > before);
        assert!(actions.is_attached());
    }

    #[test]
    fn switching_to_cascade_resets() {
        let mut provider = small_screens_drill_down();
        provider.set_breakpoint(at(Breakpoint::Sm));
        assert_eq!(provider.mode(), InteractionMode::DrillDown);

        provider.actions().push("settings").unwrap();
        assert!(!provider.state().is_root());

        provider.set_breakpoint(at(Breakpoint::Lg));
        let state = provider.state();
        assert_eq!(state.mode, InteractionMode::Cascade);
        assert!(state.is_root());
        assert_eq!(state.animation_direction, None);
    }

    #[test]
    fn reset_rule_applies_on_every_flip() {
        let mut provider = small_screens_drill_down();
        for _ in 0..3 {
            provider.set_breakpoint(at(Breakpoint::Xs));
            provider.actions().push("x").unwrap();
            provider.set_breakpoint(at(Breakpoint::Xl));
            assert!(provider.state().is_root());
        }
    }

    #[test]
    fn cascade_to_drill_down_keeps_the_stack() {
        let mut provider = small_screens_drill_down();
        provider.set_breakpoint(at(Breakpoint::Lg));
        provider.actions().push("kept").unwrap();
        provider.set_breakpoint(at(Breakpoint::Xs));
        assert_eq!(provider.state().current_id(), Some("kept"));
    }

    #[test]
    fn config_changes_also_reset() {
        let mut provider = DrillDownProvider::new(Some(Responsive::Value(InteractionMode::DrillDown)));
        provider.actions().push("deep").unwrap();
        assert!(provider.set_config(None));
        assert!(provider.state().is_root());
        assert!(!provider.set_config(None));
    }

    #[test]
    fn ready_follows_the_breakpoint_observation() {
        let mut provider = DrillDownProvider::new(None);
        assert!(!provider.state().ready);
        assert!(provider.set_breakpoint(at(Breakpoint::Initial)));
        assert!(provider.state().ready);
        assert!(!provider.set_breakpoint(at(Breakpoint::Initial)));
    }

    #[test]
    fn revision_moves_with_state() {
        let mut provider = small_screens_drill_down();
        let r0 = provider.revision();
        provider.actions().push("a").unwrap();
        let r1 = provider.revision();
        assert_ne!(r0, r1);
        // Same tier, same readiness: nothing to report.
        provider.set_breakpoint(BreakpointState::default());
        assert_eq!(provider.revision(), r1);
    }

    #[test]
    fn actions_are_stable_and_detach_on_drop() {
        let provider = DrillDownProvider::new(None);
        let first = provider.actions();
        provider.actions().push("a").unwrap();
        assert_eq!(first, provider.actions());

        drop(provider);
        assert!(!first.is_attached());
        assert_eq!(first.push("b"), Err(DrillDownError::ProviderDropped));
    }

    #[test]
    fn scopes() {
        let outside = DrillDownScope::outside();
        assert_eq!(outside.actions(), Err(DrillDownError::OutsideProvider));
        assert_eq!(outside.state().unwrap_err(), DrillDownError::OutsideProvider);
        assert!(outside.actions_optional().is_none());
        assert!(outside.state_optional().is_none());

        let provider = DrillDownProvider::new(None);
        let inside = provider.scope();
        assert!(inside.has_provider());
        assert_eq!(inside.actions().unwrap(), provider.actions());
        assert!(inside.state().unwrap().is_root());
    }

    #[test]
    fn submenu_open_and_back() {
        let mut provider = small_screens_drill_down();
        provider.set_breakpoint(at(Breakpoint::Xs));
        let submenu = SubmenuScope::new("share", "Share");
        let actions = provider.actions();

        submenu.open(&actions).unwrap();
        assert!(submenu.is_shown(&provider.state()));
        assert_eq!(submenu.label(), "Share");

        submenu.back(&actions).unwrap();
        assert!(!submenu.is_shown(&provider.state()));
    }
}
