// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod fast_zeroize_vec_tests {
    use hush_util::{fast_zeroize_slice, fast_zeroize_vec, is_vec_fully_zeroized};

    #[test]
    fn test_fast_zeroize_vec_zeros_all_bytes() {
        let mut data = vec![0xABu8; 1024];
        unsafe { fast_zeroize_vec(&mut data) };
        assert_eq!(data.len(), 1024);
        assert!(unsafe { is_vec_fully_zeroized(&data) });
    }

    #[test]
    fn test_fast_zeroize_vec_empty_vec() {
        let mut data: Vec<u8> = vec![];
        unsafe { fast_zeroize_vec(&mut data) };
        assert!(data.is_empty());
    }

    #[test]
    fn test_fast_zeroize_vec_includes_spare_capacity() {
        let mut data = vec![0xFFu8; 100];
        data.truncate(10);

        assert!(!unsafe { is_vec_fully_zeroized(&data) });

        unsafe { fast_zeroize_vec(&mut data) };

        assert!(unsafe { is_vec_fully_zeroized(&data) });
    }

    #[test]
    fn test_fast_zeroize_vec_wide_elements() {
        let mut data = vec![u64::MAX; 64];
        data.truncate(3);

        unsafe { fast_zeroize_vec(&mut data) };

        assert!(data.iter().all(|&v| v == 0));
        assert!(unsafe { hush_util::is_spare_capacity_zeroized(&data) });
    }

    #[test]
    fn test_fast_zeroize_slice_zero_sized() {
        let mut units = [(); 8];
        unsafe { fast_zeroize_slice(&mut units) };

        let mut empty: [u8; 0] = [];
        unsafe { fast_zeroize_slice(&mut empty) };
    }
}
