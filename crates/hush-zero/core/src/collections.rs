// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations and helpers for sequences (slices, arrays, `Vec<T>`, `String`).
use alloc::string::String;
use alloc::vec::Vec;

use core::sync::atomic::{Ordering, compiler_fence};

use crate::depth::Depth;
use crate::engine::zeroize_at;
use crate::traits::{DeepZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Converts a mutable reference to a trait object (`&mut dyn DeepZeroizable`).
///
/// Helper for heterogeneous field lists, such as the ones generated by
/// `#[derive(Zeroable)]`.
#[inline(always)]
pub fn to_deep_zeroizable_dyn_mut<'a, T: DeepZeroizable>(
    x: &'a mut T,
) -> &'a mut (dyn DeepZeroizable + 'a) {
    x
}

/// Converts a reference to a trait object (`&dyn ZeroizationProbe`).
#[inline(always)]
pub fn to_zeroization_probe_dyn_ref<'a, T: ZeroizationProbe>(
    x: &'a T,
) -> &'a (dyn ZeroizationProbe + 'a) {
    x
}

/// Zeroizes every element yielded by the iterator, each one at `depth`.
///
/// Elements go through [`zeroize_at`], so each one is bound-checked and
/// probed before it is entered.
pub fn zeroize_collection(
    collection_iter: &mut dyn Iterator<Item = &mut dyn DeepZeroizable>,
    depth: Depth,
) {
    for z in collection_iter {
        zeroize_at(z, depth);
        compiler_fence(Ordering::SeqCst);
    }
}

/// Checks if all elements in a collection are zeroized.
///
/// Returns `true` if all elements return `true` for `.is_zeroized()`, `false` otherwise.
pub fn collection_zeroed(collection_iter: &mut dyn Iterator<Item = &dyn ZeroizationProbe>) -> bool {
    for z in collection_iter {
        if !z.is_zeroized() {
            return false;
        }
    }

    true
}

// === === === === === === === === === ===
// [T] - slices
// === === === === === === === === === ===

/// Zeroizes a slice using either bulk memset or recursive element zeroization.
///
/// `fast` is `T::CAN_BE_BULK_ZEROIZED` in production; it is a parameter so
/// tests can drive both paths independently.
#[inline(always)]
pub(crate) fn slice_deep_zeroize<T: DeepZeroizable + ZeroizeMetadata>(
    slice: &mut [T],
    depth: Depth,
    fast: bool,
) {
    if fast {
        // SAFETY: `fast` is only true when `T::CAN_BE_BULK_ZEROIZED`, whose
        // unsafe contract guarantees all-zero bytes are a valid `T`.
        unsafe { hush_util::fast_zeroize_slice(slice) };
        compiler_fence(Ordering::SeqCst);
    } else {
        for elem in slice.iter_mut() {
            zeroize_at(elem, depth.descend());
            compiler_fence(Ordering::SeqCst);
        }
    }
}

unsafe impl<T> ZeroizeMetadata for [T]
where
    T: ZeroizeMetadata,
{
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T> ZeroizationProbe for [T]
where
    T: ZeroizationProbe,
{
    fn is_zeroized(&self) -> bool {
        collection_zeroed(&mut self.iter().map(to_zeroization_probe_dyn_ref))
    }
}

impl<T> DeepZeroizable for [T]
where
    T: DeepZeroizable + ZeroizeMetadata,
{
    fn deep_zeroize(&mut self, depth: Depth) {
        slice_deep_zeroize(self, depth, T::CAN_BE_BULK_ZEROIZED);
    }
}

// === === === === === === === === === ===
// [T; N] - arrays
// === === === === === === === === === ===

// Arrays cannot be emptied: their zero value is every element at zero.
unsafe impl<T: ZeroizeMetadata, const N: usize> ZeroizeMetadata for [T; N] {
    const CAN_BE_BULK_ZEROIZED: bool = T::CAN_BE_BULK_ZEROIZED;
}

impl<T, const N: usize> ZeroizationProbe for [T; N]
where
    T: ZeroizationProbe,
{
    fn is_zeroized(&self) -> bool {
        collection_zeroed(&mut self.iter().map(to_zeroization_probe_dyn_ref))
    }
}

impl<T, const N: usize> DeepZeroizable for [T; N]
where
    T: DeepZeroizable + ZeroizeMetadata,
{
    #[inline(always)]
    fn deep_zeroize(&mut self, depth: Depth) {
        slice_deep_zeroize(self, depth, T::CAN_BE_BULK_ZEROIZED);
    }
}

// === === === === === === === === === ===
// Vec<T>
// === === === === === === === === === ===

/// Zeroizes a `Vec`, then leaves it empty with a fully zeroed allocation.
///
/// The allocation is kept; [`DeepZeroizable::deep_zeroize`] releases it afterwards.
///
/// When `fast=true`, one memset covers contents and spare capacity.
/// When `fast=false`, each element is zeroized recursively, the vector is
/// truncated (dropping the now-empty elements), and the whole allocation is
/// wiped so no element headers linger.
#[inline(always)]
pub(crate) fn vec_deep_zeroize<T: DeepZeroizable + ZeroizeMetadata>(
    vec: &mut Vec<T>,
    depth: Depth,
    fast: bool,
) {
    if fast {
        // SAFETY: see `slice_deep_zeroize`.
        unsafe { hush_util::fast_zeroize_vec(vec) };
        compiler_fence(Ordering::SeqCst);
        vec.clear();
    } else {
        for elem in vec.iter_mut() {
            zeroize_at(elem, depth.descend());
            compiler_fence(Ordering::SeqCst);
        }
        vec.clear();
        hush_util::zeroize_spare_capacity(vec);
        compiler_fence(Ordering::SeqCst);
    }
}

unsafe impl<T> ZeroizeMetadata for Vec<T> {
    // Vec can NEVER be bulk-zeroized from outside (has ptr/len/capacity)
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T> ZeroizationProbe for Vec<T> {
    /// Zero means no allocation at all.
    ///
    /// Spare capacity may be uninitialized, so it is never read here. An empty
    /// vector that still owns an allocation is wiped and released by the next
    /// `zeroize`.
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        self.capacity() == 0
    }
}

impl<T> DeepZeroizable for Vec<T>
where
    T: DeepZeroizable + ZeroizeMetadata,
{
    #[inline(always)]
    fn deep_zeroize(&mut self, depth: Depth) {
        vec_deep_zeroize(self, depth, T::CAN_BE_BULK_ZEROIZED);
        // The allocation is all zeros now; hand it back.
        *self = Vec::new();
    }
}

// === === === === === === === === === ===
// String
// === === === === === === === === === ===
unsafe impl ZeroizeMetadata for String {
    // String can NEVER be bulk-zeroized from outside (has ptr/len/capacity)
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl ZeroizationProbe for String {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        self.capacity() == 0
    }
}

/// Wipes the whole allocation behind a `String` and leaves it empty.
#[inline(always)]
pub(crate) fn string_deep_zeroize(s: &mut String) {
    // SAFETY: only zero bytes are written (valid UTF-8), and the length
    // is reset right after.
    unsafe {
        hush_util::fast_zeroize_vec(s.as_mut_vec());
    }
    compiler_fence(Ordering::SeqCst);
    s.clear();
}

impl DeepZeroizable for String {
    #[inline(always)]
    fn deep_zeroize(&mut self, _depth: Depth) {
        string_deep_zeroize(self);
        *self = String::new();
    }
}
