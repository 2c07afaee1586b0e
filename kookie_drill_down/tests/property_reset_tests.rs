// Copyright 2025 the Kookie Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based tests for drill-down navigation.
//!
//! # Invariants Tested
//! - Any drill-down to cascade flip leaves the stack empty and the direction cleared
//! - Push and pop behave as a LIFO stack regardless of mode

use kookie_breakpoint::{Breakpoint, BreakpointMap, BreakpointState};
use kookie_drill_down::{DrillDownProvider, InteractionMode};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Pop,
    Reset,
    Resize(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::Push),
        Just(Op::Pop),
        Just(Op::Reset),
        (0_usize..6).prop_map(Op::Resize),
    ]
}

fn provider() -> DrillDownProvider {
    let config = BreakpointMap::new()
        .with(Breakpoint::Initial, InteractionMode::DrillDown)
        .with(Breakpoint::Md, InteractionMode::Cascade)
        .into();
    DrillDownProvider::new(Some(config))
}

proptest! {
    #[test]
    fn flips_to_cascade_always_reset(ops in prop::collection::vec(op(), 0..64)) {
        let mut provider = provider();
        let actions = provider.actions();
        let mut model: Vec<String> = Vec::new();

        for op in ops {
            match op {
                Op::Push(n) => {
                    actions.push(n.to_string()).unwrap();
                    model.push(n.to_string());
                }
                Op::Pop => {
                    actions.pop().unwrap();
                    model.pop();
                }
                Op::Reset => {
                    actions.reset().unwrap();
                    model.clear();
                }
                Op::Resize(tier) => {
                    let before = provider.mode();
                    provider.set_breakpoint(BreakpointState {
                        breakpoint: Breakpoint::ALL[tier],
                        ready: true,
                    });
                    if before == InteractionMode::DrillDown
                        && provider.mode() == InteractionMode::Cascade
                    {
                        let state = provider.state();
                        prop_assert!(state.is_root());
                        prop_assert_eq!(state.animation_direction, None);
                        model.clear();
                    }
                }
            }
            let state = provider.state();
            prop_assert_eq!(state.stack.as_slice(), model.as_slice());
        }
    }
}
