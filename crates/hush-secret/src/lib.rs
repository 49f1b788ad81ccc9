// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Wrapper type that keeps sensitive data out of logs, formatted strings and
//! serialized output.
//!
//! Every output path of [`Secret<T>`] (`Display`, `Debug`, `{:x}`, serde)
//! renders the process-wide redaction marker instead of the value. The
//! marker is configured through the [`redaction`] module.
//!
//! ```rust
//! use hush_secret::Secret;
//!
//! let password = Secret::new(String::from("hunter2"));
//!
//! assert_eq!(format!("{password}"), "[REDACTED]");
//! assert_eq!(format!("{password:?}"), "Secret{[REDACTED]}");
//! assert_eq!(serde_json::to_string(&password).unwrap(), "\"[REDACTED]\"");
//!
//! assert_eq!(password.expose(), "hunter2");
//! ```
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod encoding;
mod fmt;
pub mod redaction;

pub use redaction::{DEFAULT_REDACTED, Redaction, redaction, set_redacted_string};

/// The zeroization engine behind [`Secret`], so the bound on `T` can be named
/// and `#[derive(Zeroable)]` used without a separate dependency.
pub use hush_zero;
pub use hush_zero::{DeepZeroizable, Zeroable, ZeroizationProbe, ZeroizeMetadata};

/// Wrapper that prevents accidental exposure of sensitive data.
///
/// `Secret<T>` owns a value `T` and hands it out only through
/// [`expose()`](Secret::expose) and [`expose_mut()`](Secret::expose_mut).
///
/// # Design Principles
///
/// - **No `Deref`/`DerefMut`**: the value is never reached implicitly
/// - **No `Clone`**: prevents unintended copies of sensitive data
/// - **Redacted output**: `Display`, `Debug`, hex and `Serialize` print the marker
/// - **Zeroize on drop**: the held value is deep-zeroized when the wrapper is dropped
///
/// # Usage
///
/// ```rust
/// use hush_secret::Secret;
///
/// // Move a value in, wiping the source
/// let mut pin_code = 1234u64;
/// let secret = Secret::from_mut(&mut pin_code);
///
/// assert_eq!(pin_code, 0);
/// assert_eq!(secret.expose(), &1234);
///
/// // Replace when you already have an instance
/// let mut secret2 = Secret::<u32>::default();
/// let mut session_id = 0xDEADBEEF;
/// secret2.replace(&mut session_id);
///
/// assert_eq!(session_id, 0);
/// assert_eq!(secret2.expose(), &0xDEADBEEF);
/// ```
///
/// # Warning: Dereferencing with Copy types
///
/// **NEVER** dereference `expose()` when `T` implements `Copy`. The copy
/// lives outside the wrapper and is not zeroized with it:
///
/// ```rust,no_run
/// use hush_secret::Secret;
///
/// let secret = Secret::new(0xDEADBEEFu64);
///
/// // DANGEROUS: creates a copy of the secret value
/// let leaked_copy = *secret.expose();
///
/// // SAFE: only uses a reference
/// assert_eq!(secret.expose(), &0xDEADBEEF);
/// ```
#[derive(Default, Zeroable)]
#[zeroable(drop)]
pub struct Secret<T>
where
    T: DeepZeroizable,
{
    inner: T,
}

impl<T> Secret<T>
where
    T: DeepZeroizable,
{
    /// Wraps `value`, taking ownership of it.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Creates a `Secret` by moving data out of `sensitive_data`, zeroizing the source.
    ///
    /// The value is transferred with [`core::mem::swap`], so no unzeroized
    /// copy is left behind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hush_secret::Secret;
    ///
    /// let mut api_key = String::from("sk_live_51H...");
    /// let secret = Secret::from_mut(&mut api_key);
    ///
    /// assert!(api_key.is_empty());
    /// assert_eq!(secret.expose(), "sk_live_51H...");
    /// ```
    pub fn from_mut(sensitive_data: &mut T) -> Self
    where
        T: Default,
    {
        let mut secret = Self::new(T::default());
        secret.replace(sensitive_data);
        secret
    }

    /// Replaces the inner value with a new one, zeroizing both the old value and the source.
    ///
    /// 1. Zeroizes the current inner value
    /// 2. Swaps the new value from `value` into `self`
    /// 3. Zeroizes the source (which now holds the old, already zeroized value)
    pub fn replace(&mut self, value: &mut T) {
        hush_zero::zeroize(&mut self.inner);
        core::mem::swap(&mut self.inner, value);
        hush_zero::zeroize(value);
    }

    /// Returns an immutable reference to the inner value.
    ///
    /// This is the only read path to the real value.
    #[inline]
    pub fn expose(&self) -> &T {
        &self.inner
    }

    /// Returns a mutable reference to the inner value.
    #[inline]
    pub fn expose_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Deep-zeroizes the held value in place.
    ///
    /// Afterwards [`expose()`](Secret::expose) yields the zero value of `T`.
    /// Calling it again is a no-op.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use hush_secret::Secret;
    ///
    /// let mut tokens = Secret::new(HashMap::from([("github".to_string(), vec![1u8, 2, 3])]));
    /// tokens.zero();
    ///
    /// assert!(tokens.expose().is_empty());
    /// ```
    pub fn zero(&mut self) {
        hush_zero::zeroize(&mut self.inner);
    }

    /// Returns the redaction marker as raw bytes.
    ///
    /// Entry point for text and binary encoders that do not go through serde.
    pub fn redacted_bytes(&self) -> Vec<u8> {
        redaction().as_bytes().to_vec()
    }

    /// Returns the redaction marker as a JSON string literal (quoted and escaped).
    pub fn redacted_json(&self) -> Vec<u8> {
        redaction().json().to_vec()
    }
}
