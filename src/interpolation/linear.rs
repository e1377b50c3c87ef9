//! Linear interpolation weights.
//!
//! Outside the input grid the end values are held flat: points left of the
//! grid get `alpha = 0` on the first interval, points right of it get
//! `alpha = 1` on the last one.

use super::common::{bracket, Weights};

/// Compute linear weights of `output_x` against a validated `input_x`.
pub(crate) fn weights(input_x: &[f64], output_x: &[f64]) -> Weights {
    let n = input_x.len();
    if n < 2 {
        return Weights::trivial(output_x.len());
    }

    let mut weights = Weights::with_capacity(output_x.len());
    for &x in output_x {
        let left = bracket(input_x, x, 0, n - 1);
        let right = if x > input_x[left] { left + 1 } else { left };

        let alpha = if left != right {
            if x <= input_x[right] {
                (x - input_x[left]) / (input_x[right] - input_x[left])
            } else {
                // extrapolation on the right
                1.0
            }
        } else {
            // extrapolation on the left, or x sits on input_x[left]
            0.0
        };

        weights.push(left, right, alpha);
    }

    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_weights() {
        let w = weights(&[0.0, 1.0, 2.0, 3.0], &[0.5, 1.5, 2.25]);
        assert_eq!(w.left, vec![0, 1, 2]);
        assert_eq!(w.right, vec![1, 2, 3]);
        assert_eq!(w.alpha, vec![0.5, 0.5, 0.25]);
    }

    #[test]
    fn test_nodes_have_zero_or_unit_alpha() {
        let w = weights(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]);
        assert_eq!(w.left, vec![0, 1, 1]);
        assert_eq!(w.right, vec![0, 1, 2]);
        assert_eq!(w.alpha, vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_extrapolation_holds_end_values() {
        let w = weights(&[0.0, 1.0, 2.0], &[-3.0, 10.0]);
        assert_eq!((w.left[0], w.right[0], w.alpha[0]), (0, 0, 0.0));
        assert_eq!((w.left[1], w.right[1], w.alpha[1]), (1, 2, 1.0));
    }

    #[test]
    fn test_single_point_input_is_trivial() {
        let w = weights(&[4.0], &[-1.0, 4.0, 9.0]);
        assert_eq!(w.left, vec![0, 0, 0]);
        assert_eq!(w.right, vec![0, 0, 0]);
        assert_eq!(w.alpha, vec![0.0, 0.0, 0.0]);
    }
}
