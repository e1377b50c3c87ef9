//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point comparisons.

#![allow(dead_code)]

use regrid::WeightTable;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two arrays of floating-point values are approximately element-wise equal.
///
/// # Panics
///
/// Panics if the arrays have different lengths or if any element-wise comparison fails.
pub fn assert_array_approx_eq(actual: &[f64], expected: &[f64], epsilon: Option<f64>) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Arrays have different lengths: actual = {}, expected = {}",
        actual.len(),
        expected.len()
    );

    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= eps,
            "Arrays differ at index {}: actual = {}, expected = {}, diff = {}, epsilon = {}",
            i,
            a,
            e,
            diff,
            eps
        );
    }
}

/// Assert the structural invariants of a weight table.
///
/// `ordered` additionally requires `left <= right`, which holds for every
/// policy except at the wrap of a periodic table.
pub fn assert_table_invariants(table: &WeightTable, ordered: bool) {
    let n = table.input_size();
    for k in 0..table.len() {
        let (l, r, a) = (table.left_at(k), table.right_at(k), table.alpha_at(k));
        assert!(l < n, "left[{}] = {} out of range {}", k, l, n);
        assert!(r < n, "right[{}] = {} out of range {}", k, r, n);
        assert!((0.0..=1.0).contains(&a), "alpha[{}] = {} not in [0, 1]", k, a);
        if ordered {
            assert!(l <= r, "left[{}] = {} > right[{}] = {}", k, l, k, r);
        }
    }
}
