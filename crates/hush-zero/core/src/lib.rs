// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hush-zero-core
//!
//! A depth-bounded engine that walks a value and overwrites every mutable
//! location reachable from it with that location's zero representation.
//!
//! The shape of a value is described by a small set of traits:
//!
//! - [`ZeroizationProbe`]: "is this already zero?", checked before recursing
//! - [`ZeroizeMetadata`]: whether all-zero bytes is a valid value (enables memset)
//! - [`DeepZeroizable`]: clears one location, recursing into its children
//! - [`SharedZeroizable`]: interior-mutable cells reached through `Rc`/`Arc`
//!
//! Implementations are provided for primitives, arrays, slices, `Vec`,
//! `String`, maps and sets, `Option`, `Box`, raw pointers, `Rc`/`Arc` over
//! `RefCell`/`Mutex`/`RwLock`, atomics and tuples. Records get theirs from
//! `#[derive(Zeroable)]` in `hush-zero-derive`.
//!
//! ```rust
//! use hush_zero_core::{zeroize, ZeroizationProbe};
//!
//! let mut token = String::from("sk_live_51H...");
//! let mut key = vec![0xA5u8; 32];
//!
//! zeroize(&mut token);
//! zeroize(&mut key);
//!
//! assert!(token.is_empty());
//! assert!(key.is_zeroized());
//! ```
//!
//! ## Termination
//!
//! Recursion stops at [`MAX_DEPTH`]. Values that already probe as zero are
//! not entered. A shared cell that is already borrowed, which is how a cycle
//! shows up, is skipped. Every skip is silent for the caller and emits a
//! `tracing` event at `TRACE` level.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod atomics;
mod depth;
mod engine;
mod maps;
mod pointers;
mod primitives;
mod shared;
mod traits;
mod tuples;

pub mod collections;

pub use depth::{Depth, MAX_DEPTH};
pub use engine::{zeroize, zeroize_at};
pub use traits::{DeepZeroizable, SharedZeroizable, Zeroable, ZeroizationProbe, ZeroizeMetadata};
