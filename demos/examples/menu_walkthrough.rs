// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A dropdown menu driven through a simulated browser window.
//!
//! This example shows how to combine:
//! - `kookie_breakpoint` for media query observation and responsive layout,
//! - `kookie_menu` for the menu content container,
//! - `kookie_drill_down` for submenu navigation that changes with the viewport,
//! - `kookie_virtual_menu` for a long, windowed list inside a submenu.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p kookie_demos --example menu_walkthrough`

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kookie_breakpoint::{
    Breakpoint, BreakpointMap, ListenerCapabilities, ListenerError, ListenerId, MediaQueryList,
    Presentation, Responsive, Viewport, resolve_presentation,
};
use kookie_drill_down::{InteractionMode, SubmenuScope};
use kookie_menu::MenuContent;
use kookie_virtual_menu::{ItemEvent, ItemView, Key, MenuSize};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// A browser-like window whose width can be changed from the outside.
struct Window {
    width: Rc<Cell<u32>>,
    listeners: Rc<RefCell<Vec<ListenerId>>>,
}

struct WindowQuery {
    min_width: u32,
    width: Rc<Cell<u32>>,
    listeners: Rc<RefCell<Vec<ListenerId>>>,
}

impl MediaQueryList for WindowQuery {
    fn matches(&self) -> bool {
        self.width.get() >= self.min_width
    }

    fn capabilities(&self) -> ListenerCapabilities {
        ListenerCapabilities::CHANGE_EVENT | ListenerCapabilities::LEGACY
    }

    fn add_change_listener(&mut self, id: ListenerId) -> Result<(), ListenerError> {
        self.listeners.borrow_mut().push(id);
        Ok(())
    }

    fn remove_change_listener(&mut self, id: ListenerId) -> Result<(), ListenerError> {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|l| *l != id);
        if listeners.len() == before {
            return Err(ListenerError::NotAttached(id));
        }
        Ok(())
    }
}

impl Viewport for Window {
    fn match_media(&mut self, query: &str) -> Box<dyn MediaQueryList> {
        let min_width = Breakpoint::QUERIED
            .into_iter()
            .find(|bp| bp.media_query() == Some(query))
            .and_then(Breakpoint::min_width)
            .unwrap_or(u32::MAX);
        Box::new(WindowQuery {
            min_width,
            width: Rc::clone(&self.width),
            listeners: Rc::clone(&self.listeners),
        })
    }
}

fn print_list(view: &[ItemView<()>]) {
    for item in view {
        if let ItemView::Label { props, text } = item {
            let marker = if props.is_highlighted { '>' } else { ' ' };
            println!(
                "  {marker} [{}/{}] {text} @ {}px",
                props.aria_posinset, props.aria_setsize, props.style.translate_y
            );
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let width = Rc::new(Cell::new(390));
    let mut window = Window {
        width: Rc::clone(&width),
        listeners: Rc::default(),
    };

    // Phones drill down into submenus; tablets and up cascade.
    let behavior = BreakpointMap::new()
        .with(Breakpoint::Initial, InteractionMode::DrillDown)
        .with(Breakpoint::Md, InteractionMode::Cascade)
        .into();
    let size = BreakpointMap::new()
        .with(Breakpoint::Initial, MenuSize::Size2)
        .with(Breakpoint::Lg, MenuSize::Size3)
        .into();
    let sidebar: Responsive<Presentation> = BreakpointMap::new()
        .with(Breakpoint::Initial, Presentation::Overlay)
        .with(Breakpoint::Md, Presentation::Fixed)
        .into();

    let mut content = MenuContent::new(size, Some(behavior));
    let state = content.mount(Some(&mut window));
    println!(
        "mounted at {}px: {:?}, {:?} mode, sidebar {:?}",
        width.get(),
        state.breakpoint,
        state.mode,
        resolve_presentation(&sidebar, state.breakpoint)
    );

    // A "Move to" submenu holding thousands of folders.
    let move_to = SubmenuScope::new("move-to", "Move to");
    let folders: Vec<String> = (0..5_000).map(|i| format!("Folder {i:04}")).collect();
    let actions = content.actions();
    if let Err(err) = move_to.open(&actions) {
        eprintln!("cannot open submenu: {err}");
        return;
    }
    let state = content.state();
    println!(
        "opened {:?} (shown: {}, back label: {:?})",
        state.current_id(),
        move_to.is_shown(&state),
        move_to.label()
    );

    let mut list = match content
        .virtual_menu::<String, ()>()
        .label_field(String::as_str)
        .on_select(|folder: &String, index| println!("selected {folder} (#{index})"))
        .viewport_extent(160.0)
        .build()
    {
        Ok(list) => list,
        Err(err) => {
            eprintln!("bad menu configuration: {err}");
            return;
        }
    };

    let view = list.render(&folders);
    println!(
        "realized {} of {} folders, content height {}px",
        view.items.len(),
        folders.len(),
        view.root.total_size
    );
    print_list(&view.items);

    for key in [Key::ArrowDown, Key::ArrowDown, Key::End, Key::ArrowDown, Key::ArrowUp] {
        let outcome = list.handle_key(&folders, key);
        println!(
            "{key:?}: highlight {:?}, scroll to {:?}",
            outcome.highlighted, outcome.scroll_to
        );
    }

    let view = list.render(&folders);
    println!(
        "aria-activedescendant = {:?}",
        view.root.aria_activedescendant
    );
    print_list(&view.items);

    list.handle_item_event(&folders, ItemEvent::Click(4_999));
    // Stale index from before the collection shrank: ignored.
    let shrunk = &folders[..10];
    list.handle_item_event(shrunk, ItemEvent::Click(4_999));
    println!("highlight after shrinking: {:?}", list.highlighted_index());

    // Rotate the device: the tablet layout cascades, so the submenu closes.
    width.set(1024);
    content.on_media_change();
    let state = content.state();
    println!(
        "resized to {}px: {:?}, {:?} mode, root: {}, sidebar {:?}",
        width.get(),
        state.breakpoint,
        state.mode,
        state.is_root(),
        resolve_presentation(&sidebar, state.breakpoint)
    );

    content.unmount();
    println!("listeners left after unmount: {}", window.listeners.borrow().len());
}
