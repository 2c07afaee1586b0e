// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire shape of submenu behavior configuration with the `serde` feature.

#![cfg(feature = "serde")]

use kookie_breakpoint::Breakpoint;
use kookie_drill_down::{AnimationDirection, InteractionMode, ResponsiveMode, resolve_mode};

#[test]
fn modes_use_kebab_case() {
    assert_eq!(
        serde_json::to_string(&InteractionMode::DrillDown).unwrap(),
        "\"drill-down\""
    );
    assert_eq!(
        serde_json::from_str::<InteractionMode>("\"cascade\"").unwrap(),
        InteractionMode::Cascade
    );
    assert_eq!(
        serde_json::to_string(&AnimationDirection::Backward).unwrap(),
        "\"backward\""
    );
}

#[test]
fn responsive_submenu_behavior() {
    let config: ResponsiveMode =
        serde_json::from_str(r#"{ "initial": "drill-down", "md": "cascade" }"#).unwrap();
    assert_eq!(
        resolve_mode(Some(&config), Breakpoint::Sm),
        InteractionMode::DrillDown
    );
    assert_eq!(
        resolve_mode(Some(&config), Breakpoint::Lg),
        InteractionMode::Cascade
    );

    let plain: ResponsiveMode = serde_json::from_str("\"drill-down\"").unwrap();
    assert_eq!(
        resolve_mode(Some(&plain), Breakpoint::Xl),
        InteractionMode::DrillDown
    );
}
