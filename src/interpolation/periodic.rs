//! Periodic linear interpolation weights.
//!
//! The input grid is extended periodically: after the last sample comes the
//! first sample of the next period at `input_x[0] + period`. Points in that
//! gap get `left = n - 1`, `right = 0`, with `alpha` measured across the
//! wrapped span `(period - input_x[n - 1]) + input_x[0]`.

use super::common::{bracket, Weights};
use crate::error::{RegridError, Result};

/// Check that `period` can describe wraparound of `input_x`.
pub(crate) fn check_period(input_x: &[f64], period: f64) -> Result<()> {
    let span = match (input_x.first(), input_x.last()) {
        (Some(first), Some(last)) => last - first,
        _ => 0.0,
    };

    // written as !(a > b) so that a NaN period is rejected too
    if !(period > 0.0) || !(period > span) {
        return Err(RegridError::InvalidPeriod { period, span });
    }
    Ok(())
}

/// Compute periodic weights of `output_x` against a validated `input_x`.
///
/// `period` must have passed [`check_period`].
pub(crate) fn weights(input_x: &[f64], output_x: &[f64], period: f64) -> Weights {
    let n = input_x.len();
    if n < 2 {
        return Weights::trivial(output_x.len());
    }

    let x0 = input_x[0];
    let x_last = input_x[n - 1];

    let mut weights = Weights::with_capacity(output_x.len());
    for &x in output_x {
        // points more than one period away are moved into [x0, x0 + period)
        let x = if x < x_last - period || x >= x0 + period {
            x0 + (x - x0).rem_euclid(period)
        } else {
            x
        };

        let (left, right) = if x < x0 {
            (n - 1, 0)
        } else {
            let left = bracket(input_x, x, 0, n);
            (left, if left + 1 < n { left + 1 } else { 0 })
        };

        let x_l = input_x[left];
        let x_r = input_x[right];

        let alpha = if left < right {
            (x - x_l) / (x_r - x_l)
        } else {
            let dx = (period - x_l) + x0;
            if x > x0 {
                // past the last sample of this period
                (x - x_l) / dx
            } else {
                // before the first sample of this period
                1.0 - (x_r - x) / dx
            }
        };

        weights.push(left, right, alpha.clamp(0.0, 1.0));
    }

    weights
}
