// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide redaction marker.
//!
//! Every [`Secret`](crate::Secret) renders this marker in place of its value.
//! The marker is cached in the four forms the output adapters need, so
//! formatting never allocates to build it.
//!
//! Set the marker once at startup with [`set_redacted_string`]. Changing it
//! later is memory-safe but only affects output formatted afterwards;
//! concurrent formatting may observe either the old or the new marker.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// Marker used until [`set_redacted_string`] is called.
pub const DEFAULT_REDACTED: &str = "[REDACTED]";

static CURRENT: LazyLock<RwLock<Arc<Redaction>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Redaction::default())));

/// Cached representations of a redaction marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redaction {
    plain: String,
    debug: String,
    json: Vec<u8>,
}

impl Redaction {
    /// Builds every cached representation of `marker`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hush_secret::Redaction;
    ///
    /// let redaction = Redaction::new("<hidden \"value\">");
    ///
    /// assert_eq!(redaction.as_str(), "<hidden \"value\">");
    /// assert_eq!(redaction.debug(), "Secret{<hidden \"value\">}");
    /// assert_eq!(redaction.json(), br#""<hidden \"value\">""#);
    /// ```
    pub fn new(marker: impl Into<String>) -> Self {
        let plain = marker.into();
        let debug = format!("Secret{{{plain}}}");
        let json = serde_json::Value::from(plain.as_str()).to_string().into_bytes();

        Self { plain, debug, json }
    }

    /// The marker itself, used by `Display` and `Serialize`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.plain
    }

    /// `Secret{<marker>}`, used by `Debug`.
    #[inline]
    pub fn debug(&self) -> &str {
        &self.debug
    }

    /// The marker's UTF-8 bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.plain.as_bytes()
    }

    /// The marker as a JSON string literal.
    #[inline]
    pub fn json(&self) -> &[u8] {
        &self.json
    }
}

impl Default for Redaction {
    fn default() -> Self {
        Self::new(DEFAULT_REDACTED)
    }
}

/// Replaces the process-wide redaction marker.
///
/// Never fails: a poisoned lock is recovered, since the cache is replaced
/// wholesale and cannot be left half-written.
///
/// # Example
///
/// ```rust
/// use hush_secret::{DEFAULT_REDACTED, Secret, set_redacted_string};
///
/// set_redacted_string("***");
/// assert_eq!(Secret::new(42u32).to_string(), "***");
///
/// set_redacted_string(DEFAULT_REDACTED);
/// ```
pub fn set_redacted_string(marker: impl Into<String>) {
    let next = Arc::new(Redaction::new(marker));
    tracing::debug!(marker = next.as_str(), "redaction marker changed");

    let mut current = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
    *current = next;
}

/// Returns a snapshot of the current redaction marker.
pub fn redaction() -> Arc<Redaction> {
    let current = CURRENT.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&current)
}
