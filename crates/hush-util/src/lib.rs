// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Low-level memory helpers used by the zeroization engine.
//!
//! Every write helper in this crate ends with a volatile read or a volatile
//! write, so the optimizer cannot drop the zeroing as a dead store even when
//! the memory is released right afterwards.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Zeroizes a single value in place using a volatile write.
///
/// # Safety
///
/// The all-zeros bit pattern must be a valid value of `T`. This holds for
/// integers, floats, `bool` and `char`, and for arrays of them. It does NOT
/// hold for references, `NonNull`, `Box`, or most enums.
///
/// # Example
///
/// ```
/// use hush_util::zeroize_primitive;
///
/// let mut x = 42u32;
/// unsafe { zeroize_primitive(&mut x) };
/// assert_eq!(x, 0);
///
/// let mut flag = true;
/// unsafe { zeroize_primitive(&mut flag) };
/// assert!(!flag);
/// ```
#[inline(always)]
pub unsafe fn zeroize_primitive<T>(val: &mut T) {
    // SAFETY: the caller guarantees all-zeros is a valid `T`; `val` is a valid,
    // aligned, exclusive pointer.
    unsafe {
        core::ptr::write_volatile(val, core::mem::zeroed());
    }
}

/// Bulk zeroization of a slice with `write_bytes` (memset).
///
/// A volatile read of the first byte after the memset keeps the optimizer
/// from removing it. Runs in O(n) with no per-element dispatch, which is what
/// makes byte buffers cheap to clear.
///
/// # Safety
///
/// The all-zeros bit pattern must be a valid value of `T`.
///
/// # Example
///
/// ```
/// use hush_util::fast_zeroize_slice;
///
/// let mut data = [1u8, 2, 3, 4, 5];
/// unsafe { fast_zeroize_slice(&mut data) };
/// assert!(data.iter().all(|&b| b == 0));
///
/// let mut ints = [0xDEADBEEFu32; 10];
/// unsafe { fast_zeroize_slice(&mut ints) };
/// assert!(ints.iter().all(|&v| v == 0));
/// ```
#[inline(always)]
pub unsafe fn fast_zeroize_slice<T>(slice: &mut [T]) {
    if slice.is_empty() {
        return;
    }

    let byte_len = core::mem::size_of_val(slice);
    // SAFETY: the slice is valid for `byte_len` bytes of writes, and the
    // caller guarantees zero bytes form valid `T` values.
    unsafe {
        core::ptr::write_bytes(slice.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(slice.as_ptr() as *const u8);
    }
}

/// Bulk zeroization of a `Vec<T>`, spare capacity included.
///
/// Zeroizes the **entire allocation** (index 0 to capacity), not just the
/// live elements, so bytes left behind by `truncate()` or `pop()` are wiped
/// as well.
///
/// # Safety
///
/// The all-zeros bit pattern must be a valid value of `T`.
///
/// # Example
///
/// ```
/// use hush_util::{fast_zeroize_vec, is_vec_fully_zeroized};
///
/// let mut vec = vec![0xFFu8; 100];
/// vec.truncate(10);
///
/// unsafe { fast_zeroize_vec(&mut vec) };
/// assert!(unsafe { is_vec_fully_zeroized(&vec) });
/// ```
#[inline(always)]
pub unsafe fn fast_zeroize_vec<T>(vec: &mut Vec<T>) {
    if vec.capacity() == 0 {
        return;
    }

    let byte_len = vec.capacity() * core::mem::size_of::<T>();
    if byte_len == 0 {
        return;
    }

    // SAFETY: the allocation is valid for `capacity * size_of::<T>()` bytes;
    // zero bytes are valid `T` values by the caller's contract.
    unsafe {
        core::ptr::write_bytes(vec.as_mut_ptr() as *mut u8, 0, byte_len);
        core::ptr::read_volatile(vec.as_ptr() as *const u8);
    }
}

/// Zeroizes only the spare capacity of a `Vec<T>` (between `len` and `capacity`).
///
/// Used after elements have been cleared and the vector truncated, so the
/// bytes that held them (headers of inner strings, pointers, lengths) are
/// wiped too.
///
/// # Example
///
/// ```
/// use hush_util::zeroize_spare_capacity;
///
/// let mut vec = vec![0xFFu8; 100];
/// vec.truncate(10);
///
/// zeroize_spare_capacity(&mut vec);
///
/// assert!(vec.iter().all(|&b| b == 0xFF));
/// ```
#[inline(always)]
pub fn zeroize_spare_capacity<T>(vec: &mut Vec<T>) {
    let spare = vec.capacity() - vec.len();
    let byte_len = spare * core::mem::size_of::<T>();
    if byte_len == 0 {
        return;
    }

    // SAFETY: spare capacity holds no live `T`, so any byte pattern may be
    // written there; the region `[len, capacity)` belongs to the allocation.
    unsafe {
        let spare_ptr = vec.as_mut_ptr().add(vec.len()) as *mut u8;
        core::ptr::write_bytes(spare_ptr, 0, byte_len);
        core::ptr::read_volatile(spare_ptr);
    }
}

/// Returns `true` if every byte of the slice is zero.
///
/// # Example
///
/// ```
/// use hush_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if the spare capacity of a `Vec<T>` is all zero bytes,
/// or if there is no spare capacity.
///
/// Reads bytes only; no `T` is ever constructed from spare memory.
///
/// # Safety
///
/// Every byte in `[len, capacity)` must be initialized, for example because
/// the vector held data there or one of the wipe helpers in this crate ran
/// on it. The spare capacity of a fresh `Vec::with_capacity` is not.
#[inline(never)]
pub unsafe fn is_spare_capacity_zeroized<T>(vec: &Vec<T>) -> bool {
    let len_bytes = vec.len() * core::mem::size_of::<T>();
    let cap_bytes = vec.capacity() * core::mem::size_of::<T>();

    if cap_bytes == len_bytes {
        return true;
    }

    // SAFETY: `[len_bytes, cap_bytes)` lies inside the allocation owned by
    // `vec` and is initialized by the caller's contract.
    unsafe {
        let spare_ptr = vec.as_ptr().cast::<u8>().add(len_bytes);
        is_slice_zeroized(core::slice::from_raw_parts(spare_ptr, cap_bytes - len_bytes))
    }
}

/// Returns `true` if the whole allocation of a `Vec<u8>` (0 to capacity) is zero.
///
/// # Safety
///
/// Same contract as [`is_spare_capacity_zeroized`].
///
/// # Example
///
/// ```
/// use hush_util::{fast_zeroize_vec, is_vec_fully_zeroized};
///
/// let mut vec = vec![1u8, 2, 3, 4, 5];
/// vec.truncate(2);
///
/// for byte in vec.iter_mut() {
///     *byte = 0;
/// }
///
/// // Spare capacity [2..5] still holds old data
/// assert!(!unsafe { is_vec_fully_zeroized(&vec) });
///
/// unsafe { fast_zeroize_vec(&mut vec) };
/// assert!(unsafe { is_vec_fully_zeroized(&vec) });
/// ```
#[inline(never)]
pub unsafe fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    // SAFETY: forwarded from the caller.
    is_slice_zeroized(vec) && unsafe { is_spare_capacity_zeroized(vec) }
}

/// Returns `true` if the whole allocation behind a `String` (0 to capacity) is zero.
///
/// # Safety
///
/// Every byte in `[len, capacity)` must be initialized.
#[inline(never)]
pub unsafe fn is_string_fully_zeroized(s: &String) -> bool {
    if !is_slice_zeroized(s.as_bytes()) {
        return false;
    }

    let len = s.len();
    let cap = s.capacity();
    if cap == len {
        return true;
    }

    // SAFETY: `[len, cap)` lies inside the allocation owned by `s` and is
    // initialized by the caller's contract.
    unsafe {
        let spare_ptr = s.as_ptr().add(len);
        is_slice_zeroized(core::slice::from_raw_parts(spare_ptr, cap - len))
    }
}
