// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based tests for highlight state and key handling.
//!
//! # Invariants Tested
//! - The highlight is `None` for an empty list and in range otherwise
//! - ArrowDown from the last item lands on the first, ArrowUp from the first on the last
//! - Selecting past the end never calls back

use std::cell::Cell;
use std::rc::Rc;

use kookie_virtual_menu::{Highlight, ItemSize, Key, VirtualMenu, VirtualMenuOptions};
use proptest::prelude::*;

fn menu(selections: &Rc<Cell<usize>>) -> VirtualMenu<u32, ()> {
    let selections = Rc::clone(selections);
    VirtualMenu::builder()
        .label(kookie_virtual_menu::LabelAccessor::computed(|n: &u32| n.to_string()))
        .on_select(move |_, _| selections.set(selections.get() + 1))
        .options(VirtualMenuOptions {
            estimated_item_size: Some(ItemSize::Fixed(20.0)),
            ..VirtualMenuOptions::default()
        })
        .viewport_extent(100.0)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn highlight_stays_in_range(
        start in 0_usize..50,
        initial in 0_usize..50,
        lens in prop::collection::vec(0_usize..50, 1..20),
    ) {
        let mut highlight = Highlight::new(start);
        highlight.set(initial);
        for len in lens {
            highlight.set_len(len);
            match highlight.index() {
                None => {}
                Some(i) => prop_assert!(i < len),
            }
            if len == 0 {
                prop_assert_eq!(highlight.index(), None);
            }
        }
    }

    #[test]
    fn arrows_wrap(len in 1_usize..300) {
        let items: Vec<u32> = (0..len as u32).collect();
        let calls = Rc::new(Cell::new(0));
        let mut menu = menu(&calls);
        menu.sync_len(len);

        menu.set_highlighted(len - 1);
        prop_assert_eq!(menu.handle_key(&items, Key::ArrowDown).highlighted, Some(0));
        prop_assert_eq!(menu.handle_key(&items, Key::ArrowUp).highlighted, Some(len - 1));
    }

    #[test]
    fn stale_selections_are_ignored(len in 0_usize..50, extra in 0_usize..50) {
        let items: Vec<u32> = (0..len as u32).collect();
        let calls = Rc::new(Cell::new(0));
        let mut menu = menu(&calls);

        prop_assert!(!menu.select(&items, len + extra));
        prop_assert_eq!(calls.get(), 0);
    }
}
