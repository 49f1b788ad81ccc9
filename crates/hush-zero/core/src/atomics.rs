// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for atomic types.

use core::sync::atomic::Ordering;
use core::sync::atomic::{AtomicBool, AtomicI8, AtomicI16, AtomicI32, AtomicI64, AtomicIsize};
use core::sync::atomic::{AtomicU8, AtomicU16, AtomicU32, AtomicU64, AtomicUsize};

use crate::depth::Depth;
use crate::traits::{DeepZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Implements ZeroizationProbe, ZeroizeMetadata, and DeepZeroizable for atomic types.
macro_rules! impl_deep_zeroize_atomic {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl ZeroizationProbe for $ty {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    self.load(Ordering::Relaxed) == $zero
                }
            }

            unsafe impl ZeroizeMetadata for $ty {
                const CAN_BE_BULK_ZEROIZED: bool = false;
            }

            impl DeepZeroizable for $ty {
                #[inline(always)]
                fn deep_zeroize(&mut self, _depth: Depth) {
                    self.store($zero, Ordering::SeqCst);
                }
            }
        )*
    };
}

impl_deep_zeroize_atomic!(
    AtomicBool => false,
    AtomicU8 => 0,
    AtomicU16 => 0,
    AtomicU32 => 0,
    AtomicU64 => 0,
    AtomicUsize => 0,
    AtomicI8 => 0,
    AtomicI16 => 0,
    AtomicI32 => 0,
    AtomicI64 => 0,
    AtomicIsize => 0,
);
