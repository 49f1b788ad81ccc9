// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Formatting adapters. None of them reads the held value.

use core::fmt;

use hush_zero::DeepZeroizable;

use crate::Secret;
use crate::redaction::redaction;

impl<T> fmt::Display for Secret<T>
where
    T: DeepZeroizable,
{
    /// Honors width, fill and alignment (`{:>20}`) through [`fmt::Formatter::pad`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(redaction().as_str())
    }
}

impl<T> fmt::Debug for Secret<T>
where
    T: DeepZeroizable,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(redaction().debug())
    }
}

impl<T> fmt::LowerHex for Secret<T>
where
    T: DeepZeroizable,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in redaction().as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<T> fmt::UpperHex for Secret<T>
where
    T: DeepZeroizable,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in redaction().as_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
