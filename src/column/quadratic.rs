//! Local quadratic column reads.
//!
//! Each query level is evaluated on the parabola through three consecutive
//! fixed levels `z0 < z1 < z2` starting at its bracket, written in Newton
//! divided-difference form around `z0`. The last interval has no third point
//! and falls back to linear interpolation; above the top the top value is
//! held.

use tracing::trace;

use super::ColumnResampler;
use crate::error::Result;
use crate::interpolation::common::blend;

impl ColumnResampler<'_> {
    /// Get values of `column` at `levels` by local quadratic interpolation.
    ///
    /// Level checks are the same as for
    /// [`get_column_pl`](ColumnResampler::get_column_pl).
    pub fn get_column_quad(
        &self,
        column: &[f64],
        levels: &[f64],
        values: &mut [f64],
    ) -> Result<()> {
        if !self.check_query(column, levels, values)? {
            return Ok(());
        }

        trace!(
            field = self.field,
            query_levels = levels.len(),
            "Getting column by local quadratic interpolation"
        );

        let fixed = self.domain.levels();
        let top = fixed.len() - 1;

        let mut m = 0;
        for (k, &z) in levels.iter().enumerate() {
            if z > fixed[top] {
                values[k] = column[top];
                continue;
            }
            while fixed[m + 1] < z {
                m += 1;
            }

            let z0 = fixed[m];
            let f0 = column[m];
            values[k] = if m + 1 == top {
                let alpha = (z - z0) / (fixed[m + 1] - z0);
                blend(f0, column[m + 1], alpha)
            } else {
                let dz1 = fixed[m + 1] - z0;
                let dz2 = fixed[m + 2] - z0;
                let d1 = (column[m + 1] - f0) / dz1;
                let d2 = (column[m + 2] - f0) / dz2;
                let c = (d2 - d1) / (dz2 - dz1);
                let b = d1 - c * dz1;
                let s = z - z0;
                f0 + s * (b + c * s)
            };
        }

        Ok(())
    }
}
