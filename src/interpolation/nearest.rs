//! Nearest neighbor weights.
//!
//! Linear weights with `alpha` snapped to 0 or 1, so interpolation always
//! returns one of the two bracketing input values. Ties go to the left.

use super::common::Weights;
use super::linear;

/// Compute nearest-neighbor weights of `output_x` against a validated `input_x`.
pub(crate) fn weights(input_x: &[f64], output_x: &[f64]) -> Weights {
    let mut weights = linear::weights(input_x, output_x);

    for alpha in weights.alpha.iter_mut() {
        *alpha = if *alpha > 0.5 { 1.0 } else { 0.0 };
    }

    weights
}
