//! Piecewise-constant (zero-order hold) weights.

use super::common::{bracket, Weights};

/// Compute zero-order-hold weights of `output_x` against a validated `input_x`.
///
/// Each output point takes the input sample at or before it; points left of
/// the grid take the first sample.
pub(crate) fn weights(input_x: &[f64], output_x: &[f64]) -> Weights {
    let n = input_x.len();
    if n < 2 {
        return Weights::trivial(output_x.len());
    }

    let mut weights = Weights::with_capacity(output_x.len());
    for &x in output_x {
        // search the whole grid: the last sample holds to the right
        let index = bracket(input_x, x, 0, n);
        weights.push(index, index, 0.0);
    }

    weights
}
