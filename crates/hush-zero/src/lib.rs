// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hush-zero
//!
//! Deep, depth-bounded zeroization of arbitrary values.
//!
//! This is a re-export crate that combines [`hush-zero-core`] and [`hush-zero-derive`] for convenience.
//!
//! ## Quick Start
//!
//! ```rust
//! use hush_zero::{DeepZeroizable, ZeroizationProbe, Zeroable};
//!
//! #[derive(Zeroable)]
//! #[zeroable(drop)]
//! struct ApiKey {
//!     key: Vec<u8>,
//!     scopes: Vec<String>,
//! }
//!
//! let mut api_key = ApiKey {
//!     key: b"sk_live_...".to_vec(),
//!     scopes: vec!["read".into(), "write".into()],
//! };
//!
//! api_key.zeroize();
//! assert!(api_key.is_zeroized());
//! ```
//!
//! ## What's Included
//!
//! - **Engine**: [`zeroize`], [`zeroize_at`], [`Depth`], [`MAX_DEPTH`]
//! - **Traits**: [`DeepZeroizable`], [`ZeroizationProbe`], [`ZeroizeMetadata`], [`SharedZeroizable`]
//! - **Derive macro**: `#[derive(Zeroable)]` for structs
//!
//! For a wrapper that keeps a value out of logs and serialized output, see
//! the `hush-secret` crate.
//!
//! [`hush-zero-core`]: https://docs.rs/hush-zero-core
//! [`hush-zero-derive`]: https://docs.rs/hush-zero-derive

#![cfg_attr(not(feature = "std"), no_std)]

pub use hush_zero_core::*;
pub use hush_zero_derive::*;
