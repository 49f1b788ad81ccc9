// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Recursion depth carried through one zeroization pass.

/// Deepest level the engine will enter. A location at a greater depth is left
/// untouched.
pub const MAX_DEPTH: usize = 100;

/// Position of a location in the traversal, counted from the top-level value.
///
/// `Depth` is the only traversal state. It is passed by value down the
/// recursion and discarded when the top-level call returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Depth(usize);

impl Depth {
    /// Depth of the value handed to [`zeroize`](crate::zeroize).
    #[inline(always)]
    pub const fn root() -> Self {
        Self(0)
    }

    /// Depth of a child of the location at `self`.
    #[inline(always)]
    #[must_use]
    pub const fn descend(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Numeric depth, `0` for the root.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns `true` once the bound is exceeded and the traversal must stop.
    #[inline(always)]
    pub const fn is_exhausted(self) -> bool {
        self.0 > MAX_DEPTH
    }
}
