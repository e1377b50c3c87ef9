//! Common utilities for interpolation algorithms.
//!
//! This module provides the bracket search, grid validation and blending
//! shared by every policy.

use crate::error::{RegridError, Result};

/// Index/weight triples under construction, one entry per output point.
#[derive(Debug, Default)]
pub(crate) struct Weights {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
    pub alpha: Vec<f64>,
}

impl Weights {
    pub fn with_capacity(size: usize) -> Self {
        Self {
            left: Vec::with_capacity(size),
            right: Vec::with_capacity(size),
            alpha: Vec::with_capacity(size),
        }
    }

    /// Every output point maps to input index 0 with zero weight.
    ///
    /// Used when the input grid has fewer than two points.
    pub fn trivial(size: usize) -> Self {
        Self {
            left: vec![0; size],
            right: vec![0; size],
            alpha: vec![0.0; size],
        }
    }

    pub fn push(&mut self, left: usize, right: usize, alpha: f64) {
        self.left.push(left);
        self.right.push(right);
        self.alpha.push(alpha);
    }

    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    /// Check the table invariants against an input grid of `input_size` points.
    pub fn debug_check(&self, input_size: usize) {
        for k in 0..self.len() {
            debug_assert!(self.left[k] < input_size);
            debug_assert!(self.right[k] < input_size);
            debug_assert!((0.0..=1.0).contains(&self.alpha[k]));
        }
    }
}

/// Find the bracket of `x` in `xs[lo..=hi]`.
///
/// Returns the largest index `L` in `lo..hi` with `xs[L] <= x`, or `lo` if `x`
/// precedes the searched range. `L + 1` is always a valid index when
/// `hi < xs.len()`. Requires `lo < hi <= xs.len()` and `xs` sorted ascending.
pub fn bracket(xs: &[f64], x: f64, lo: usize, hi: usize) -> usize {
    debug_assert!(lo < hi && hi <= xs.len());
    lo + xs[lo + 1..hi].partition_point(|&v| v <= x)
}

/// Check that `xs` is non-empty and strictly increasing.
pub fn check_strictly_increasing(grid: &str, xs: &[f64]) -> Result<()> {
    if xs.is_empty() {
        return Err(RegridError::EmptyGrid {
            grid: grid.to_string(),
        });
    }

    // written as !(a < b) so that NaN entries are rejected too
    match xs.windows(2).position(|pair| !(pair[0] < pair[1])) {
        Some(index) => Err(RegridError::NonMonotonic {
            grid: grid.to_string(),
            index,
            left: xs[index],
            right: xs[index + 1],
        }),
        None => Ok(()),
    }
}

/// Check that every coordinate of `xs` can be placed on a grid.
///
/// NaN is always rejected; infinite coordinates only when `allow_infinite`
/// is false.
pub fn check_coordinates(grid: &str, xs: &[f64], allow_infinite: bool) -> Result<()> {
    let usable = |x: f64| if allow_infinite { !x.is_nan() } else { x.is_finite() };
    match xs.iter().position(|&x| !usable(x)) {
        Some(index) => Err(RegridError::InvalidCoordinate {
            grid: grid.to_string(),
            index,
            value: xs[index],
        }),
        None => Ok(()),
    }
}

/// Check that a value sequence has the length of the grid it lives on.
pub fn check_length(what: &str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(RegridError::LengthMismatch {
            what: what.to_string(),
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Blend two values with weight `alpha` on the right one.
///
/// Exact at `alpha == 0` and `alpha == 1`.
#[inline]
pub fn blend(left: f64, right: f64, alpha: f64) -> f64 {
    (1.0 - alpha) * left + alpha * right
}
