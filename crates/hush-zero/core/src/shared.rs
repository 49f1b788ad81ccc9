// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait implementations for interior-mutable cells.
//!
//! Owned cells (`&mut RefCell<T>`) are cleared through `get_mut`, which
//! needs no runtime check. Cells behind `Rc`/`Arc` go through
//! [`SharedZeroizable`] and use non-blocking exclusive access only: a busy
//! cell is skipped, never waited on.

use core::cell::RefCell;

use crate::depth::Depth;
use crate::engine::zeroize_at;
use crate::traits::{DeepZeroizable, SharedZeroizable, ZeroizationProbe, ZeroizeMetadata};

// RefCell<T>

impl<T: ZeroizationProbe + ?Sized> ZeroizationProbe for RefCell<T> {
    fn is_zeroized(&self) -> bool {
        match self.try_borrow() {
            Ok(inner) => inner.is_zeroized(),
            Err(_) => false,
        }
    }
}

unsafe impl<T: ?Sized> ZeroizeMetadata for RefCell<T> {
    const CAN_BE_BULK_ZEROIZED: bool = false;
}

impl<T: DeepZeroizable + ?Sized> DeepZeroizable for RefCell<T> {
    #[inline(always)]
    fn deep_zeroize(&mut self, depth: Depth) {
        zeroize_at(self.get_mut(), depth.descend());
    }
}

impl<T: DeepZeroizable + ?Sized> SharedZeroizable for RefCell<T> {
    fn zeroize_shared(&self, depth: Depth) {
        match self.try_borrow_mut() {
            Ok(mut inner) => zeroize_at(&mut *inner, depth),
            Err(_) => {
                tracing::trace!(depth = depth.get(), "RefCell already borrowed, skipped");
            }
        }
    }
}

#[cfg(feature = "std")]
mod sync {
    use std::sync::{Mutex, PoisonError, RwLock, TryLockError};

    use crate::depth::Depth;
    use crate::engine::zeroize_at;
    use crate::traits::{DeepZeroizable, SharedZeroizable, ZeroizationProbe, ZeroizeMetadata};

    // Mutex<T>
    //
    // A poisoned lock still holds the data that must be cleared, so poison
    // is stripped rather than treated as "cannot access".

    impl<T: ZeroizationProbe + ?Sized> ZeroizationProbe for Mutex<T> {
        fn is_zeroized(&self) -> bool {
            match self.try_lock() {
                Ok(guard) => guard.is_zeroized(),
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().is_zeroized(),
                Err(TryLockError::WouldBlock) => false,
            }
        }
    }

    unsafe impl<T: ?Sized> ZeroizeMetadata for Mutex<T> {
        const CAN_BE_BULK_ZEROIZED: bool = false;
    }

    impl<T: DeepZeroizable + ?Sized> DeepZeroizable for Mutex<T> {
        fn deep_zeroize(&mut self, depth: Depth) {
            let inner = self.get_mut().unwrap_or_else(PoisonError::into_inner);
            zeroize_at(inner, depth.descend());
        }
    }

    impl<T: DeepZeroizable + ?Sized> SharedZeroizable for Mutex<T> {
        fn zeroize_shared(&self, depth: Depth) {
            match self.try_lock() {
                Ok(mut guard) => zeroize_at(&mut *guard, depth),
                Err(TryLockError::Poisoned(poisoned)) => {
                    zeroize_at(&mut *poisoned.into_inner(), depth)
                }
                Err(TryLockError::WouldBlock) => {
                    tracing::trace!(depth = depth.get(), "Mutex already locked, skipped");
                }
            }
        }
    }

    // RwLock<T>

    impl<T: ZeroizationProbe + ?Sized> ZeroizationProbe for RwLock<T> {
        fn is_zeroized(&self) -> bool {
            match self.try_read() {
                Ok(guard) => guard.is_zeroized(),
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().is_zeroized(),
                Err(TryLockError::WouldBlock) => false,
            }
        }
    }

    unsafe impl<T: ?Sized> ZeroizeMetadata for RwLock<T> {
        const CAN_BE_BULK_ZEROIZED: bool = false;
    }

    impl<T: DeepZeroizable + ?Sized> DeepZeroizable for RwLock<T> {
        fn deep_zeroize(&mut self, depth: Depth) {
            let inner = self.get_mut().unwrap_or_else(PoisonError::into_inner);
            zeroize_at(inner, depth.descend());
        }
    }

    impl<T: DeepZeroizable + ?Sized> SharedZeroizable for RwLock<T> {
        fn zeroize_shared(&self, depth: Depth) {
            match self.try_write() {
                Ok(mut guard) => zeroize_at(&mut *guard, depth),
                Err(TryLockError::Poisoned(poisoned)) => {
                    zeroize_at(&mut *poisoned.into_inner(), depth)
                }
                Err(TryLockError::WouldBlock) => {
                    tracing::trace!(depth = depth.get(), "RwLock already held, skipped");
                }
            }
        }
    }
}
