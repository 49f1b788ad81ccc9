// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use syn::{Attribute, parse_quote};

use crate::{ZeroableOptions, parse_zeroable_options};

#[test]
fn test_no_attributes() {
    let attrs: Vec<Attribute> = vec![parse_quote!(#[derive(Debug)])];
    let options = parse_zeroable_options(&attrs).expect("parse failed");
    assert_eq!(options, ZeroableOptions::default());
}

#[test]
fn test_skip() {
    let attrs: Vec<Attribute> = vec![parse_quote!(#[zeroable(skip)])];
    let options = parse_zeroable_options(&attrs).expect("parse failed");
    assert!(options.skip);
    assert!(!options.drop);
}

#[test]
fn test_drop() {
    let attrs: Vec<Attribute> = vec![parse_quote!(#[zeroable(drop)])];
    let options = parse_zeroable_options(&attrs).expect("parse failed");
    assert!(options.drop);
    assert!(!options.skip);
}

#[test]
fn test_options_combine_across_attributes() {
    let attrs: Vec<Attribute> = vec![
        parse_quote!(#[zeroable(skip)]),
        parse_quote!(#[doc = "ignored"]),
        parse_quote!(#[zeroable(drop)]),
    ];
    let options = parse_zeroable_options(&attrs).expect("parse failed");
    assert_eq!(
        options,
        ZeroableOptions {
            skip: true,
            drop: true
        }
    );
}

#[test]
fn test_unknown_option_is_rejected() {
    let attrs: Vec<Attribute> = vec![parse_quote!(#[zeroable(shred)])];
    let err = parse_zeroable_options(&attrs).expect_err("unknown option must fail");
    assert!(err.to_string().contains("unsupported zeroable option"));
}
