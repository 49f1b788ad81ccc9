// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for indirections.
//!
//! - `Box<T>` and `Option<T>` own their referent: the engine unwraps one
//!   level and recurses. `Option` is then reset to `None`.
//! - `&mut T` borrows its referent exclusively: the engine clears it in place
//!   through the handle, so the caller's storage ends up zeroed.
//! - `Rc<C>` / `Arc<C>` share their referent: the engine reaches it through
//!   the cell's [`SharedZeroizable`] impl and never reports the handle as zero.
//! - Raw pointers are nulled and never dereferenced.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use core::ptr;

use crate::depth::Depth;
use crate::engine::zeroize_at;
use crate::traits::{DeepZeroizable, SharedZeroizable, ZeroizationProbe, ZeroizeMetadata};

// Box<T>

impl<T: ZeroizationProbe + ?Sized> ZeroizationProbe for Box<T> {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        (**self).is_zeroized()
    }
}

unsafe impl<T: ?Sized> ZeroizeMetadata for Box<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: DeepZeroizable + ?Sized> DeepZeroizable for Box<T> {
    #[inline(always)]
    fn deep_zeroize(&mut self, depth: Depth) {
        zeroize_at(&mut **self, depth.descend());
    }
}

// &mut T

impl<T: ZeroizationProbe + ?Sized> ZeroizationProbe for &mut T {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        (**self).is_zeroized()
    }
}

unsafe impl<T: ?Sized> ZeroizeMetadata for &mut T {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: DeepZeroizable + ?Sized> DeepZeroizable for &mut T {
    #[inline(always)]
    fn deep_zeroize(&mut self, depth: Depth) {
        zeroize_at(&mut **self, depth.descend());
    }
}

// Option<T>

impl<T> ZeroizationProbe for Option<T> {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        self.is_none()
    }
}

unsafe impl<T> ZeroizeMetadata for Option<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: DeepZeroizable> DeepZeroizable for Option<T> {
    fn deep_zeroize(&mut self, depth: Depth) {
        if let Some(inner) = self.as_mut() {
            zeroize_at(inner, depth.descend());
        }

        // Referent is already cleared; dropping it releases the handle.
        *self = None;
    }
}

// Rc<C>

impl<C: SharedZeroizable + ?Sized> ZeroizationProbe for Rc<C> {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        false
    }
}

unsafe impl<C: ?Sized> ZeroizeMetadata for Rc<C> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<C: SharedZeroizable + ?Sized> DeepZeroizable for Rc<C> {
    #[inline(always)]
    fn deep_zeroize(&mut self, depth: Depth) {
        (**self).zeroize_shared(depth.descend());
    }
}

// Arc<C>

impl<C: SharedZeroizable + ?Sized> ZeroizationProbe for Arc<C> {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        false
    }
}

unsafe impl<C: ?Sized> ZeroizeMetadata for Arc<C> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<C: SharedZeroizable + ?Sized> DeepZeroizable for Arc<C> {
    #[inline(always)]
    fn deep_zeroize(&mut self, depth: Depth) {
        (**self).zeroize_shared(depth.descend());
    }
}

// *mut T

impl<T> ZeroizationProbe for *mut T {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        self.is_null()
    }
}

unsafe impl<T> ZeroizeMetadata for *mut T {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T> DeepZeroizable for *mut T {
    #[inline(always)]
    fn deep_zeroize(&mut self, _depth: Depth) {
        // SAFETY: `self` is a valid, exclusive location holding a pointer.
        unsafe {
            ptr::write_volatile(self, ptr::null_mut());
        }
    }
}

// *const T

impl<T> ZeroizationProbe for *const T {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        self.is_null()
    }
}

unsafe impl<T> ZeroizeMetadata for *const T {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T> DeepZeroizable for *const T {
    #[inline(always)]
    fn deep_zeroize(&mut self, _depth: Depth) {
        // SAFETY: `self` is a valid, exclusive location holding a pointer.
        unsafe {
            ptr::write_volatile(self, ptr::null());
        }
    }
}
