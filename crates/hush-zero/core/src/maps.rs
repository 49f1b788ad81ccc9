// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for key/value containers and sets.
//!
//! Maps are cleared recurse-before-clear:
//!
//! 1. every value is deep-zeroized in place,
//! 2. every entry is drained, and its detached key is deep-zeroized (keys
//!    cannot be mutated while they sit inside the map),
//! 3. the container is left empty.
//!
//! The drained value passes through the engine once more; it already
//! probes as zero, so that costs one check.
//!
//! The table memory itself is not wiped: after step 2 it holds only the
//! headers of cleared values and the bytes of moved-out keys. Use key types
//! that own their bytes (`String`, `Vec<u8>`) when keys are sensitive.

use alloc::collections::{BTreeMap, BTreeSet};
use core::mem;
use core::sync::atomic::{Ordering, compiler_fence};

use crate::depth::Depth;
use crate::engine::zeroize_at;
use crate::traits::{DeepZeroizable, ZeroizationProbe, ZeroizeMetadata};

/// Clears the values of a map in place.
#[inline(always)]
fn zeroize_values<'a, V: DeepZeroizable + 'a>(values: impl Iterator<Item = &'a mut V>, depth: Depth) {
    for value in values {
        zeroize_at(value, depth);
        compiler_fence(Ordering::SeqCst);
    }
}

/// Clears entries that have already been detached from their container.
#[inline(always)]
fn zeroize_detached_entries<K, V>(entries: impl Iterator<Item = (K, V)>, depth: Depth)
where
    K: DeepZeroizable,
    V: DeepZeroizable,
{
    for (mut key, mut value) in entries {
        zeroize_at(&mut key, depth);
        zeroize_at(&mut value, depth);
        compiler_fence(Ordering::SeqCst);
    }
}

/// Clears keys that have already been detached from their set.
#[inline(always)]
fn zeroize_detached_keys<K: DeepZeroizable>(keys: impl Iterator<Item = K>, depth: Depth) {
    for mut key in keys {
        zeroize_at(&mut key, depth);
        compiler_fence(Ordering::SeqCst);
    }
}

// === === === === === === === === === ===
// BTreeMap<K, V> / BTreeSet<K>
// === === === === === === === === === ===

impl<K, V> ZeroizationProbe for BTreeMap<K, V> {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        self.is_empty()
    }
}

unsafe impl<K, V> ZeroizeMetadata for BTreeMap<K, V> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<K, V> DeepZeroizable for BTreeMap<K, V>
where
    K: DeepZeroizable,
    V: DeepZeroizable,
{
    fn deep_zeroize(&mut self, depth: Depth) {
        zeroize_values(self.values_mut(), depth.descend());
        zeroize_detached_entries(mem::take(self).into_iter(), depth.descend());
    }
}

impl<K> ZeroizationProbe for BTreeSet<K> {
    #[inline(always)]
    fn is_zeroized(&self) -> bool {
        self.is_empty()
    }
}

unsafe impl<K> ZeroizeMetadata for BTreeSet<K> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<K: DeepZeroizable> DeepZeroizable for BTreeSet<K> {
    fn deep_zeroize(&mut self, depth: Depth) {
        zeroize_detached_keys(mem::take(self).into_iter(), depth.descend());
    }
}

// === === === === === === === === === ===
// HashMap<K, V, S> / HashSet<K, S>
// === === === === === === === === === ===

#[cfg(feature = "std")]
mod hashed {
    use std::collections::{HashMap, HashSet};

    use super::{zeroize_detached_entries, zeroize_detached_keys, zeroize_values};
    use crate::depth::Depth;
    use crate::traits::{DeepZeroizable, ZeroizationProbe, ZeroizeMetadata};

    impl<K, V, S> ZeroizationProbe for HashMap<K, V, S> {
        #[inline(always)]
        fn is_zeroized(&self) -> bool {
            self.is_empty()
        }
    }

    unsafe impl<K, V, S> ZeroizeMetadata for HashMap<K, V, S> {
        const CAN_BE_BULK_ZEROIZED: bool = false;
    }

    impl<K, V, S> DeepZeroizable for HashMap<K, V, S>
    where
        K: DeepZeroizable,
        V: DeepZeroizable,
    {
        fn deep_zeroize(&mut self, depth: Depth) {
            zeroize_values(self.values_mut(), depth.descend());
            zeroize_detached_entries(self.drain(), depth.descend());
        }
    }

    impl<K, S> ZeroizationProbe for HashSet<K, S> {
        #[inline(always)]
        fn is_zeroized(&self) -> bool {
            self.is_empty()
        }
    }

    unsafe impl<K, S> ZeroizeMetadata for HashSet<K, S> {
        const CAN_BE_BULK_ZEROIZED: bool = false;
    }

    impl<K: DeepZeroizable, S> DeepZeroizable for HashSet<K, S> {
        fn deep_zeroize(&mut self, depth: Depth) {
            zeroize_detached_keys(self.drain(), depth.descend());
        }
    }
}
