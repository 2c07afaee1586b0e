// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kookie_menu --heading-base-level=0

//! Kookie Menu: the content container of a dropdown menu.
//!
//! [`MenuContent`] is the piece that ties the other Kookie crates together for
//! one open menu:
//!
//! - it owns a [`BreakpointObserver`] and feeds every observation into a
//!   [`DrillDownProvider`], so the submenu interaction mode follows the viewport;
//! - it resolves its responsive [`MenuSize`] at the current breakpoint;
//! - it establishes the [`MenuEnvironment`] for lists mounted inside it, so a
//!   nested [`VirtualMenu`](kookie_virtual_menu::VirtualMenu) sizes its items
//!   from the menu and leaves the `menu` role to the container.
//!
//! ## Minimal example
//!
//! ```rust
//! use kookie_breakpoint::{Breakpoint, BreakpointMap, Responsive};
//! use kookie_drill_down::InteractionMode;
//! use kookie_menu::MenuContent;
//! use kookie_virtual_menu::MenuSize;
//!
//! let behavior = BreakpointMap::new()
//!     .with(Breakpoint::Initial, InteractionMode::DrillDown)
//!     .with(Breakpoint::Md, InteractionMode::Cascade)
//!     .into();
//! let mut content = MenuContent::new(Responsive::Value(MenuSize::Size1), Some(behavior));
//!
//! // No viewport yet (for example while pre-rendering): nothing is observed.
//! let state = content.mount(None);
//! assert!(!state.ready);
//! assert_eq!(state.mode, InteractionMode::DrillDown);
//!
//! let mut list = content
//!     .virtual_menu::<&str, ()>()
//!     .label_field(|s| *s)
//!     .viewport_extent(96.0)
//!     .build()?;
//! let view = list.render(&["Copy", "Paste", "Delete"]);
//! assert_eq!(view.root.role, None);
//! assert_eq!(view.root.total_size, 72.0);
//! # Ok::<(), kookie_virtual_menu::ConfigError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: enables `serde` in every component crate.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

#[cfg(test)]
extern crate alloc;

use kookie_breakpoint::{BreakpointObserver, BreakpointState, Responsive, Viewport};
use kookie_drill_down::{
    DrillDownActions, DrillDownProvider, DrillDownScope, DrillDownState, ResponsiveMode,
};
use kookie_virtual_menu::{MenuEnvironment, MenuSize, VirtualMenuBuilder};

/// The content area of one open menu.
///
/// Mount it with [`MenuContent::mount`], forward media query notifications to
/// [`MenuContent::on_media_change`], and drop or [`unmount`](Self::unmount) it
/// when the menu closes.
#[derive(Debug)]
pub struct MenuContent {
    size: Responsive<MenuSize>,
    observer: BreakpointObserver,
    drill_down: DrillDownProvider,
}

impl MenuContent {
    /// Content of the given size whose submenus follow `submenu_behavior`.
    #[must_use]
    pub fn new(size: Responsive<MenuSize>, submenu_behavior: Option<ResponsiveMode>) -> Self {
        Self {
            size,
            observer: BreakpointObserver::new(),
            drill_down: DrillDownProvider::new(submenu_behavior),
        }
    }

    /// Starts observing `viewport` and returns the resulting navigation state.
    ///
    /// With `None` nothing is observed and the state stays unmeasured.
    pub fn mount(&mut self, viewport: Option<&mut dyn Viewport>) -> DrillDownState {
        let observed = self.observer.attach(viewport);
        self.apply(observed);
        self.drill_down.state()
    }

    /// Handles a notification from any of the observed media queries.
    ///
    /// Returns `true` if the navigation state changed.
    pub fn on_media_change(&mut self) -> bool {
        match self.observer.handle_change() {
            Some(observed) => self.apply(observed),
            None => false,
        }
    }

    fn apply(&mut self, observed: BreakpointState) -> bool {
        let changed = self.drill_down.set_breakpoint(observed);
        if changed {
            tracing::debug!(
                breakpoint = observed.breakpoint.name(),
                mode = ?self.drill_down.mode(),
                "menu content re-resolved"
            );
        }
        changed
    }

    /// Stops observing the viewport and returns to the root menu.
    pub fn unmount(&mut self) {
        self.observer.detach();
        self.drill_down.reset();
    }

    /// The latest breakpoint observation.
    #[must_use]
    pub const fn breakpoint(&self) -> BreakpointState {
        self.observer.state()
    }

    /// The menu size at the current breakpoint.
    #[must_use]
    pub fn size(&self) -> MenuSize {
        self.size
            .resolve(self.observer.breakpoint(), MenuSize::default())
    }

    /// Replaces the responsive size.
    pub fn set_size(&mut self, size: Responsive<MenuSize>) {
        self.size = size;
    }

    /// Replaces the submenu behavior configuration.
    ///
    /// Returns `true` if the resolved interaction mode changed.
    pub fn set_submenu_behavior(&mut self, submenu_behavior: Option<ResponsiveMode>) -> bool {
        self.drill_down.set_config(submenu_behavior)
    }

    /// What lists mounted inside this content see.
    #[must_use]
    pub fn environment(&self) -> MenuEnvironment {
        MenuEnvironment::inside_menu(self.size())
    }

    /// The navigation provider.
    #[must_use]
    pub const fn drill_down(&self) -> &DrillDownProvider {
        &self.drill_down
    }

    /// The scope handed to components inside this content.
    #[must_use]
    pub fn scope(&self) -> DrillDownScope<'_> {
        self.drill_down.scope()
    }

    /// The stable navigation actions.
    #[must_use]
    pub fn actions(&self) -> DrillDownActions {
        self.drill_down.actions()
    }

    /// The current navigation state.
    #[must_use]
    pub fn state(&self) -> DrillDownState {
        self.drill_down.state()
    }

    /// A virtual menu builder preconfigured for this content's environment.
    #[must_use]
    pub fn virtual_menu<T, N>(&self) -> VirtualMenuBuilder<T, N> {
        VirtualMenuBuilder::new().environment(self.environment())
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kookie_breakpoint::{
        Breakpoint, BreakpointMap, ListenerCapabilities, ListenerError, ListenerId,
        MediaQueryList, Responsive, Viewport,
    };
    use kookie_drill_down::InteractionMode;
    use kookie_virtual_menu::MenuSize;

    use super::MenuContent;

    struct Query {
        min_width: u32,
        width: Rc<Cell<u32>>,
    }

    impl MediaQueryList for Query {
        fn matches(&self) -> bool {
            self.width.get() >= self.min_width
        }

        fn capabilities(&self) -> ListenerCapabilities {
            ListenerCapabilities::LEGACY
        }

        fn add_listener(&mut self, _: ListenerId) -> Result<(), ListenerError> {
            Ok(())
        }

        fn remove_listener(&mut self, id: ListenerId) -> Result<(), ListenerError> {
            Err(ListenerError::NotAttached(id))
        }
    }

    struct Window {
        width: Rc<Cell<u32>>,
    }

    impl Viewport for Window {
        fn match_media(&mut self, query: &str) -> Box<dyn MediaQueryList> {
            let min_width = Breakpoint::QUERIED
                .into_iter()
                .find(|bp| bp.media_query() == Some(query))
                .and_then(Breakpoint::min_width)
                .unwrap();
            Box::new(Query {
                min_width,
                width: Rc::clone(&self.width),
            })
        }
    }

    fn content() -> MenuContent {
        let behavior = BreakpointMap::new()
            .with(Breakpoint::Initial, InteractionMode::DrillDown)
            .with(Breakpoint::Md, InteractionMode::Cascade)
            .into();
        let size = BreakpointMap::new()
            .with(Breakpoint::Initial, MenuSize::Size1)
            .with(Breakpoint::Lg, MenuSize::Size3)
            .into();
        MenuContent::new(size, Some(behavior))
    }

    #[test]
    fn viewport_growth_resets_drill_down() {
        let width = Rc::new(Cell::new(600));
        let mut window = Window {
            width: Rc::clone(&width),
        };
        let mut content = content();

        let state = content.mount(Some(&mut window));
        assert!(state.ready);
        assert_eq!(state.breakpoint, Breakpoint::Xs);
        assert_eq!(state.mode, InteractionMode::DrillDown);

        content.actions().push("share").unwrap();
        assert_eq!(content.state().current_id(), Some("share"));

        width.set(1300);
        assert!(content.on_media_change());
        let state = content.state();
        assert_eq!(state.mode, InteractionMode::Cascade);
        assert!(state.is_root());
        assert_eq!(state.animation_direction, None);

        // Nothing moved: no change reported.
        assert!(!content.on_media_change());
    }

    #[test]
    fn size_and_environment_follow_the_breakpoint() {
        let width = Rc::new(Cell::new(300));
        let mut window = Window {
            width: Rc::clone(&width),
        };
        let mut content = content();
        content.mount(Some(&mut window));
        assert_eq!(content.size(), MenuSize::Size1);
        assert_eq!(content.environment().default_item_extent(), 24.0);

        width.set(1700);
        content.on_media_change();
        assert_eq!(content.size(), MenuSize::Size3);
        assert!(!content.environment().owns_menu_role());
    }

    #[test]
    fn nested_lists_inherit_the_environment() {
        let mut content = MenuContent::new(Responsive::Value(MenuSize::Size2), None);
        content.mount(None);
        let mut list = content
            .virtual_menu::<u8, ()>()
            .label(kookie_virtual_menu::LabelAccessor::computed(|n: &u8| {
                alloc::format!("{n}")
            }))
            .viewport_extent(64.0)
            .build()
            .unwrap();
        let view = list.render(&[1, 2, 3, 4]);
        assert_eq!(view.root.role, None);
        assert_eq!(view.root.total_size, 128.0);
    }

    #[test]
    fn unmount_tolerates_cleanup_failures() {
        let width = Rc::new(Cell::new(600));
        let mut window = Window {
            width: Rc::clone(&width),
        };
        let mut content = content();
        content.mount(Some(&mut window));
        content.actions().push("a").unwrap();

        content.unmount();
        let state = content.state();
        assert!(state.is_root());
        assert_eq!(state.animation_direction, None);
        assert!(!content.on_media_change());
    }

    #[test]
    fn scope_reaches_the_provider() {
        let content = content();
        let scope = content.scope();
        assert_eq!(scope.actions().unwrap(), content.actions());
        assert!(scope.state().unwrap().is_root());
    }
}
