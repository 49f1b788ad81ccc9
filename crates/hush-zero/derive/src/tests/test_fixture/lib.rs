// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Empty crate. Only its name matters: it gives root lookup a dependency
//! that exists but is neither this crate nor the engine.
