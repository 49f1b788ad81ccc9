// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::rc::Rc;
use core::cell::RefCell;

use crate::depth::Depth;
use crate::engine::zeroize_at;
use crate::traits::{DeepZeroizable, ZeroizationProbe, ZeroizeMetadata};

// === === === === === === === === === ===
// ComplexType: CAN_BE_BULK_ZEROIZED = false
// === === === === === === === === === ===

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ComplexType {
    pub(crate) data: u64,
}

impl ComplexType {
    pub(crate) fn new(data: u64) -> Self {
        Self { data }
    }
}

unsafe impl ZeroizeMetadata for ComplexType {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl ZeroizationProbe for ComplexType {
    fn is_zeroized(&self) -> bool {
        self.data == 0
    }
}

impl DeepZeroizable for ComplexType {
    fn deep_zeroize(&mut self, depth: Depth) {
        zeroize_at(&mut self.data, depth.descend());
    }
}

// === === === === === === === === === ===
// Node: graph vertex behind Rc<RefCell<_>>
// === === === === === === === === === ===

pub(crate) type Link = Rc<RefCell<Node>>;

#[derive(Debug, Default)]
pub(crate) struct Node {
    pub(crate) payload: Vec<u8>,
    pub(crate) next: Option<Link>,
}

impl Node {
    pub(crate) fn link(payload: &[u8]) -> Link {
        Rc::new(RefCell::new(Node {
            payload: payload.to_vec(),
            next: None,
        }))
    }
}

unsafe impl ZeroizeMetadata for Node {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl ZeroizationProbe for Node {
    fn is_zeroized(&self) -> bool {
        self.payload.is_zeroized() && self.next.is_zeroized()
    }
}

impl DeepZeroizable for Node {
    fn deep_zeroize(&mut self, depth: Depth) {
        zeroize_at(&mut self.payload, depth.descend());
        zeroize_at(&mut self.next, depth.descend());
    }
}

/// Builds a singly linked chain and returns a handle to every node, head first.
pub(crate) fn chain(len: usize) -> Vec<Link> {
    let handles: Vec<Link> = (0..len).map(|i| Node::link(&[(i % 255) as u8 + 1; 8])).collect();

    for pair in handles.windows(2) {
        pair[0].borrow_mut().next = Some(Rc::clone(&pair[1]));
    }

    handles
}
