// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for scalar types.
//!
//! Scalars have no children: clearing one is the final overwrite only, done
//! with a volatile write of the all-zeros pattern.

use core::marker::PhantomData;

use crate::depth::Depth;
use crate::traits::{DeepZeroizable, ZeroizationProbe, ZeroizeMetadata};

macro_rules! impl_deep_zeroize_primitive {
    ($($ty:ty => |$v:ident| $is_zero:expr),* $(,)?) => {
        $(
            impl ZeroizationProbe for $ty {
                #[inline(always)]
                fn is_zeroized(&self) -> bool {
                    let $v = *self;
                    $is_zero
                }
            }

            unsafe impl ZeroizeMetadata for $ty {
                const CAN_BE_BULK_ZEROIZED: bool = true;
            }

            impl DeepZeroizable for $ty {
                #[inline(always)]
                fn deep_zeroize(&mut self, _depth: Depth) {
                    // SAFETY: all-zeros is a valid value of every scalar type.
                    unsafe { hush_util::zeroize_primitive(self) };
                }
            }
        )*
    };
}

impl_deep_zeroize_primitive!(
    u8 => |v| v == 0,
    u16 => |v| v == 0,
    u32 => |v| v == 0,
    u64 => |v| v == 0,
    u128 => |v| v == 0,
    usize => |v| v == 0,
    i8 => |v| v == 0,
    i16 => |v| v == 0,
    i32 => |v| v == 0,
    i64 => |v| v == 0,
    i128 => |v| v == 0,
    isize => |v| v == 0,
    // -0.0 == 0.0 but its sign bit is still set
    f32 => |v| v.to_bits() == 0,
    f64 => |v| v.to_bits() == 0,
    bool => |v| !v,
    char => |v| v == '\0',
);

// () and PhantomData carry no bytes; they exist so generic records compile.

impl ZeroizationProbe for () {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        true
    }
}

unsafe impl ZeroizeMetadata for () {
    const CAN_BE_BULK_ZEROIZED: bool = true;
}

impl DeepZeroizable for () {
    #[inline(always)]
    fn deep_zeroize(&mut self, _depth: Depth) {}
}

impl<T: ?Sized> ZeroizationProbe for PhantomData<T> {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        true
    }
}

unsafe impl<T: ?Sized> ZeroizeMetadata for PhantomData<T> {
    const CAN_BE_BULK_ZEROIZED: bool = true;
}

impl<T: ?Sized> DeepZeroizable for PhantomData<T> {
    #[inline(always)]
    fn deep_zeroize(&mut self, _depth: Depth) {}
}
