// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keep secrets out of logs and serialized output, and wipe them from memory
//! when you are done with them.
//!
//! # Crates
//!
//! - [`secret`]: `Secret<T>`, which renders a redaction marker in every
//!   `Display`, `Debug`, hex and serde output path
//! - [`zero`]: the deep zeroization engine and `#[derive(Zeroable)]`
//! - [`util`]: volatile and bulk byte helpers the engine is built on
//!
//! # Quick Start
//!
//! ```rust
//! use hush::secret::Secret;
//! use hush::zero::ZeroizationProbe;
//!
//! let mut token = Secret::new(String::from("ghp_xxxxxxxxxxxxxxxx"));
//!
//! assert_eq!(format!("{token}"), "[REDACTED]");
//! assert_eq!(token.expose(), "ghp_xxxxxxxxxxxxxxxx");
//!
//! token.zero();
//! assert!(token.is_zeroized());
//! ```
//!
//! Records derive their zeroization:
//!
//! ```rust,ignore
//! use hush::zero::{DeepZeroizable, Zeroable};
//!
//! #[derive(Zeroable)]
//! #[zeroable(drop)]
//! struct Session {
//!     user: String,
//!     cookie: Vec<u8>,
//! }
//! ```
//!
//! The derive resolves the engine through `hush::zero` when `hush` is the
//! only dependency.

pub use hush_secret as secret;
pub use hush_util as util;
pub use hush_zero as zero;
