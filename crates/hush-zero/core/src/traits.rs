// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core traits for deep zeroization.

use crate::depth::Depth;

/// Trait for checking whether a value already holds its zero representation.
///
/// The engine calls this before entering a location. A `true` answer skips
/// the whole subtree, so probes must be cheap for live data. `Vec` and
/// `String` answer `false` as soon as they are non-empty. Shared handles
/// (`Rc`, `Arc`) always answer `false` and never look through the handle,
/// which keeps probing cycle-safe.
///
/// # Example
///
/// ```rust
/// use hush_zero_core::{DeepZeroizable, ZeroizationProbe};
///
/// let mut value: u32 = 42;
///
/// assert!(!value.is_zeroized());
///
/// value.zeroize();
/// assert!(value.is_zeroized());
/// assert_eq!(value, 0);
/// ```
pub trait ZeroizationProbe {
    /// Returns `true` if every reachable field equals its zero representation.
    fn is_zeroized(&self) -> bool;
}

/// Metadata about the zeroization strategy for a type.
///
/// **Note:** This trait is NOT dyn-compatible (has associated constants).
/// Use [`DeepZeroizable`] for trait objects.
///
/// # Safety
///
/// `CAN_BE_BULK_ZEROIZED = true` lets the engine clear whole buffers of the
/// type with `write_bytes`. Only set it when the all-zeros bit pattern is a
/// valid value and the type owns no heap memory: integers, floats, `bool`,
/// `char`, and arrays of them.
pub unsafe trait ZeroizeMetadata {
    /// Whether this type can be bulk-zeroized with memset.
    ///
    /// - `true`: all-zeros is a valid bit pattern (primitives)
    /// - `false`: needs element-by-element recursion (everything else)
    const CAN_BE_BULK_ZEROIZED: bool;
}

/// Trait for types whose reachable memory can be zeroized in place.
///
/// This trait is dyn-compatible, allowing `&mut dyn DeepZeroizable` in
/// heterogeneous field lists.
///
/// Implementations clear one location. They pass each child to
/// [`zeroize_at`](crate::zeroize_at) with `depth.descend()`, and finally
/// overwrite the location itself with its zero value. They never check the
/// depth bound or the probe themselves; `zeroize_at` does that before calling
/// [`deep_zeroize`](DeepZeroizable::deep_zeroize).
///
/// # Example
///
/// ```rust
/// use hush_zero_core::{zeroize_at, DeepZeroizable, Depth, ZeroizationProbe};
///
/// struct ApiKey {
///     label: String,
///     secret: Vec<u8>,
/// }
///
/// impl ZeroizationProbe for ApiKey {
///     fn is_zeroized(&self) -> bool {
///         self.label.is_zeroized() && self.secret.is_zeroized()
///     }
/// }
///
/// impl DeepZeroizable for ApiKey {
///     fn deep_zeroize(&mut self, depth: Depth) {
///         zeroize_at(&mut self.label, depth.descend());
///         zeroize_at(&mut self.secret, depth.descend());
///     }
/// }
///
/// let mut key = ApiKey { label: "prod".into(), secret: vec![7; 16] };
/// key.zeroize();
/// assert!(key.is_zeroized());
/// ```
pub trait DeepZeroizable: ZeroizationProbe {
    /// Clears this location and everything reachable from it.
    ///
    /// `depth` is the depth of `self`; children live at `depth.descend()`.
    fn deep_zeroize(&mut self, depth: Depth);

    /// Zeroizes `self` as a top-level value, starting at [`Depth::root`].
    #[inline]
    fn zeroize(&mut self) {
        crate::engine::zeroize(self);
    }
}

/// Combined trait for types with both zeroization metadata and runtime
/// zeroization.
///
/// This is the bound collections place on their elements: the metadata
/// picks between the memset fast path and per-element recursion.
pub trait Zeroable: ZeroizeMetadata + DeepZeroizable {}

// Blanket impl: any type implementing both sub-traits automatically gets Zeroable
impl<T: ZeroizeMetadata + DeepZeroizable + ?Sized> Zeroable for T {}

/// Trait for interior-mutable cells reachable through shared handles.
///
/// `Rc<C>` and `Arc<C>` only hand out `&C`, so clearing goes through the
/// cell's own non-blocking exclusive access (`try_borrow_mut`, `try_lock`,
/// `try_write`). When that access is unavailable, either because the cell
/// is being cleared further up the same traversal (a cycle) or because a
/// borrow is held elsewhere, the cell is skipped.
pub trait SharedZeroizable {
    /// Clears the cell's contents through a shared reference.
    ///
    /// `depth` is the depth of the contents, already descended by the caller.
    fn zeroize_shared(&self, depth: Depth);
}
