// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::depth::{Depth, MAX_DEPTH};
use crate::engine::{zeroize, zeroize_at};
use crate::traits::{DeepZeroizable, ZeroizationProbe};

// === === === === === === === === === ===
// Test helpers
// === === === === === === === === === ===

/// Counts how many times the engine entered it.
#[derive(Default)]
struct Counting {
    value: u32,
    entered: Cell<usize>,
}

impl ZeroizationProbe for Counting {
    fn is_zeroized(&self) -> bool {
        self.value == 0
    }
}

impl DeepZeroizable for Counting {
    fn deep_zeroize(&mut self, depth: Depth) {
        self.entered.set(self.entered.get() + 1);
        zeroize_at(&mut self.value, depth.descend());
    }
}

// === === === === === === === === === ===
// Tests
// === === === === === === === === === ===

#[test]
fn test_zeroize_enters_dirty_value() {
    let mut counting = Counting {
        value: 42,
        ..Default::default()
    };

    zeroize(&mut counting);

    assert_eq!(counting.value, 0);
    assert_eq!(counting.entered.get(), 1);
}

#[test]
fn test_zeroize_skips_zeroed_value() {
    let mut counting = Counting::default();

    zeroize(&mut counting);

    assert_eq!(counting.entered.get(), 0, "probe short-circuits the subtree");
}

#[test]
fn test_zeroize_is_idempotent() {
    let mut counting = Counting {
        value: 7,
        ..Default::default()
    };

    zeroize(&mut counting);
    zeroize(&mut counting);
    zeroize(&mut counting);

    assert_eq!(counting.entered.get(), 1);
}

#[test]
fn test_zeroize_at_max_depth_still_runs() {
    let mut counting = Counting {
        value: 1,
        ..Default::default()
    };

    let mut depth = Depth::root();
    for _ in 0..MAX_DEPTH - 1 {
        depth = depth.descend();
    }
    zeroize_at(&mut counting, depth);

    assert_eq!(counting.value, 0, "child at MAX_DEPTH is cleared");
}

#[test]
fn test_zeroize_at_exhausted_depth_is_noop() {
    let mut counting = Counting {
        value: 1,
        ..Default::default()
    };

    let mut depth = Depth::root();
    for _ in 0..=MAX_DEPTH {
        depth = depth.descend();
    }
    zeroize_at(&mut counting, depth);

    assert_eq!(counting.value, 1);
    assert_eq!(counting.entered.get(), 0);
}

#[test]
fn test_zeroize_at_max_depth_leaves_children() {
    let mut counting = Counting {
        value: 1,
        ..Default::default()
    };

    let mut depth = Depth::root();
    for _ in 0..MAX_DEPTH {
        depth = depth.descend();
    }
    zeroize_at(&mut counting, depth);

    assert_eq!(counting.entered.get(), 1, "the location itself is entered");
    assert_eq!(counting.value, 1, "its children are past the bound");
}
