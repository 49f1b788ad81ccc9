// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! serde adapters.
//!
//! Serialization always writes the redaction marker as a string, whatever
//! the format. Deserialization is the one path that fills a `Secret` from
//! external data: the value is decoded as `T` and stored directly.

use hush_zero::DeepZeroizable;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Secret;
use crate::redaction::redaction;

impl<T> Serialize for Secret<T>
where
    T: DeepZeroizable,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(redaction().as_str())
    }
}

impl<'de, T> Deserialize<'de> for Secret<T>
where
    T: DeepZeroizable + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Secret::new)
    }
}
