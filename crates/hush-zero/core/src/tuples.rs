// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for tuples, treated as anonymous records.

use crate::collections::{
    collection_zeroed, to_deep_zeroizable_dyn_mut, to_zeroization_probe_dyn_ref,
    zeroize_collection,
};
use crate::depth::Depth;
use crate::traits::{DeepZeroizable, ZeroizationProbe, ZeroizeMetadata};

macro_rules! impl_deep_zeroize_tuple {
    ($len:literal => $(($name:ident, $idx:tt)),+) => {
        impl<$($name: ZeroizationProbe),+> ZeroizationProbe for ($($name,)+) {
            fn is_zeroized(&self) -> bool {
                let fields: [&dyn ZeroizationProbe; $len] = [
                    $(to_zeroization_probe_dyn_ref(&self.$idx)),+
                ];
                collection_zeroed(&mut fields.into_iter())
            }
        }

        // Tuples may contain padding, so never memset them.
        unsafe impl<$($name),+> ZeroizeMetadata for ($($name,)+) {
            const CAN_BE_BULK_ZEROIZED: bool = false;
        }

        impl<$($name: DeepZeroizable),+> DeepZeroizable for ($($name,)+) {
            fn deep_zeroize(&mut self, depth: Depth) {
                let fields: [&mut dyn DeepZeroizable; $len] = [
                    $(to_deep_zeroizable_dyn_mut(&mut self.$idx)),+
                ];
                zeroize_collection(&mut fields.into_iter(), depth.descend());
            }
        }
    };
}

impl_deep_zeroize_tuple!(1 => (A, 0));
impl_deep_zeroize_tuple!(2 => (A, 0), (B, 1));
impl_deep_zeroize_tuple!(3 => (A, 0), (B, 1), (C, 2));
impl_deep_zeroize_tuple!(4 => (A, 0), (B, 1), (C, 2), (D, 3));
impl_deep_zeroize_tuple!(5 => (A, 0), (B, 1), (C, 2), (D, 3), (E, 4));
impl_deep_zeroize_tuple!(6 => (A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5));
impl_deep_zeroize_tuple!(7 => (A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6));
impl_deep_zeroize_tuple!(8 => (A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6), (H, 7));
