// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Entry points of the traversal.

use core::sync::atomic::{Ordering, compiler_fence};

use crate::depth::Depth;
use crate::traits::DeepZeroizable;

/// Deep-zeroizes `value` in place.
///
/// Never fails: locations that cannot be cleared (depth bound exceeded,
/// shared cells that are already borrowed) are skipped.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use hush_zero_core::zeroize;
///
/// let mut tokens: HashMap<String, Vec<u8>> = HashMap::new();
/// tokens.insert("github".into(), b"ghp_xxx".to_vec());
///
/// zeroize(&mut tokens);
/// assert!(tokens.is_empty());
/// ```
#[inline]
pub fn zeroize<T: DeepZeroizable + ?Sized>(value: &mut T) {
    zeroize_at(value, Depth::root());
}

/// Guarded recursion step: clears `value`, which sits at `depth`.
///
/// Checks the depth bound first, then the zero probe, and only then hands
/// the location to [`DeepZeroizable::deep_zeroize`]. Implementations call
/// this for each child with `depth.descend()`.
pub fn zeroize_at<T: DeepZeroizable + ?Sized>(value: &mut T, depth: Depth) {
    if depth.is_exhausted() {
        tracing::trace!(depth = depth.get(), "depth bound reached, subtree left in place");
        return;
    }

    if value.is_zeroized() {
        return;
    }

    value.deep_zeroize(depth);
    compiler_fence(Ordering::SeqCst);
}
