// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashMap;

use hush::secret::{DEFAULT_REDACTED, Secret};
use hush::zero::{DeepZeroizable, ZeroizationProbe, zeroize};

#[test]
fn test_secret_through_umbrella() {
    let mut secret = Secret::new(vec![0xAAu8; 32]);

    assert_eq!(secret.to_string(), DEFAULT_REDACTED);
    assert_eq!(
        serde_json::to_string(&secret).expect("serialize failed"),
        "\"[REDACTED]\""
    );

    secret.zero();
    assert!(secret.is_zeroized());
}

#[test]
fn test_engine_through_umbrella() {
    let mut tokens: HashMap<String, Vec<String>> = HashMap::new();
    tokens.insert("github".into(), vec!["ghp_1".into(), "ghp_2".into()]);

    zeroize(&mut tokens);
    assert!(tokens.is_empty());

    let mut pin = [1u8, 2, 3, 4];
    pin.zeroize();
    assert!(hush::util::is_slice_zeroized(&pin));
}
