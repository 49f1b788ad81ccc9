// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicBool, AtomicI32, AtomicU64, AtomicUsize, Ordering};

use crate::traits::{DeepZeroizable, ZeroizationProbe, ZeroizeMetadata};

#[test]
fn test_atomic_u64_zeroize() {
    let mut counter = AtomicU64::new(u64::MAX);
    assert!(!counter.is_zeroized());

    counter.zeroize();

    assert_eq!(counter.load(Ordering::Relaxed), 0);
    assert!(counter.is_zeroized());
}

#[test]
fn test_atomic_bool_and_signed_zeroize() {
    let mut flag = AtomicBool::new(true);
    let mut signed = AtomicI32::new(-7);

    flag.zeroize();
    signed.zeroize();

    assert!(!flag.load(Ordering::Relaxed));
    assert_eq!(signed.load(Ordering::Relaxed), 0);
}

#[test]
fn test_atomics_are_never_bulk_zeroized() {
    assert!(!<AtomicUsize as ZeroizeMetadata>::CAN_BE_BULK_ZEROIZED);
    assert!(!<AtomicBool as ZeroizeMetadata>::CAN_BE_BULK_ZEROIZED);
}

#[test]
fn test_vec_of_atomics() {
    let mut counters: Vec<AtomicUsize> = (1..=4).map(AtomicUsize::new).collect();

    counters.zeroize();

    assert!(counters.is_empty());
    assert!(counters.is_zeroized());
}
