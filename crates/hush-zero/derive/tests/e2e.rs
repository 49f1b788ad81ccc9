// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use hush_zero_core::{DeepZeroizable, ZeroizationProbe, ZeroizeMetadata, zeroize};
use hush_zero_derive::Zeroable;

#[derive(Zeroable, Debug, Default)]
struct Person {
    pub name: String,
    pub age: u32,
    private_id: u64,
}

#[test]
fn test_named_struct_clears_every_field() {
    let mut person = Person {
        name: "x".into(),
        age: 5,
        private_id: 9,
    };

    assert!(!person.is_zeroized());

    zeroize(&mut person);

    assert!(person.name.is_empty());
    assert_eq!(person.age, 0);
    assert_eq!(person.private_id, 0, "private fields are cleared too");
    assert!(person.is_zeroized());
}

#[test]
fn test_derived_metadata_is_never_bulk() {
    assert!(!<Person as ZeroizeMetadata>::CAN_BE_BULK_ZEROIZED);
}

#[test]
fn test_default_record_probes_zero() {
    assert!(Person::default().is_zeroized());
}

#[derive(Zeroable)]
struct Session {
    token: Vec<u8>,
    #[zeroable(skip)]
    created_at: u64,
    #[zeroable(skip)]
    label: &'static str,
}

#[test]
fn test_skipped_fields_are_untouched() {
    let mut session = Session {
        token: vec![0xAB; 32],
        created_at: 1_700_000_000,
        label: "primary",
    };

    session.zeroize();

    assert!(session.token.is_empty());
    assert_eq!(session.created_at, 1_700_000_000);
    assert_eq!(session.label, "primary");
    assert!(session.is_zeroized(), "skipped fields do not count in the probe");
}

#[derive(Zeroable, Default)]
struct Inner {
    pin: [u8; 4],
    notes: Option<Box<String>>,
}

#[derive(Zeroable, Default)]
struct Outer {
    inner: Inner,
    history: Vec<Inner>,
    index: HashMap<String, Inner>,
}

#[test]
fn test_nested_records() {
    let mut outer = Outer::default();
    outer.inner.pin = [1, 2, 3, 4];
    outer.inner.notes = Some(Box::new("remember me".into()));
    outer.history.push(Inner {
        pin: [9; 4],
        notes: None,
    });
    outer.index.insert(
        "k".into(),
        Inner {
            pin: [5; 4],
            notes: Some(Box::new("indexed".into())),
        },
    );

    zeroize(&mut outer);

    assert_eq!(outer.inner.pin, [0; 4]);
    assert!(outer.inner.notes.is_none());
    assert!(outer.history.is_empty());
    assert!(outer.index.is_empty());
    assert!(outer.is_zeroized());
}

#[derive(Zeroable)]
struct Wrapper<T>
where
    T: DeepZeroizable,
{
    value: T,
    tag: u16,
}

#[test]
fn test_generic_record() {
    let mut wrapper = Wrapper {
        value: String::from("generic"),
        tag: 7,
    };

    wrapper.zeroize();

    assert!(wrapper.value.is_empty());
    assert_eq!(wrapper.tag, 0);
}

#[derive(Zeroable)]
struct Borrowing<'a> {
    target: &'a mut Vec<u8>,
}

#[test]
fn test_mut_reference_field_clears_referent() {
    let mut buffer = vec![1u8, 2, 3];

    {
        let mut borrowing = Borrowing {
            target: &mut buffer,
        };
        borrowing.zeroize();
        assert!(borrowing.is_zeroized());
    }

    assert!(buffer.is_empty());
}

#[derive(Zeroable)]
#[zeroable(drop)]
struct Observed {
    payload: Rc<RefCell<Vec<u8>>>,
}

#[test]
fn test_drop_zeroizes() {
    let observer = Rc::new(RefCell::new(vec![0x42u8; 16]));

    drop(Observed {
        payload: Rc::clone(&observer),
    });

    assert!(observer.borrow().is_empty());
    assert!(observer.borrow().is_zeroized());
}

#[derive(Zeroable, Default)]
struct Node {
    value: Vec<u8>,
    next: Option<Rc<RefCell<Node>>>,
}

#[test]
fn test_derived_cycle_terminates() {
    let a = Rc::new(RefCell::new(Node {
        value: b"a".to_vec(),
        next: None,
    }));
    let b = Rc::new(RefCell::new(Node {
        value: b"b".to_vec(),
        next: Some(Rc::clone(&a)),
    }));
    a.borrow_mut().next = Some(Rc::clone(&b));

    let mut root = Rc::clone(&a);
    zeroize(&mut root);

    assert!(a.borrow().is_zeroized());
    assert!(b.borrow().is_zeroized());
}
