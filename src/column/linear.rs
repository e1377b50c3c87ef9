//! Piecewise-linear column operations.

use tracing::trace;

use super::ColumnResampler;
use crate::error::Result;
use crate::interpolation::common::{blend, bracket, check_length, check_strictly_increasing};

impl ColumnResampler<'_> {
    /// Set every internal level of `column` by linear interpolation of
    /// `(levels, values)`.
    ///
    /// `levels` must be strictly increasing and span the whole domain (up to
    /// the coverage tolerance); extrapolation is never performed.
    pub fn set_column_pl(&self, levels: &[f64], values: &[f64], column: &mut [f64]) -> Result<()> {
        check_length("column", column, self.domain.len())?;
        check_length("input values", values, levels.len())?;

        if levels.len() < 2 {
            return Err(self.coverage_error(format!(
                "{} input level(s) cannot determine a column by interpolation",
                levels.len()
            )));
        }

        let last = levels.len() - 1;
        let (min, max) = (self.domain.min(), self.domain.max());
        let slack = self.tolerances.coverage;
        if levels[0] > min + slack {
            return Err(self.coverage_error(format!(
                "lowest input level {} is above the bottom of the {} domain at z = {}",
                levels[0],
                self.domain.kind(),
                min
            )));
        }
        if levels[last] < max - slack {
            return Err(self.coverage_error(format!(
                "highest input level {} is below the top of the {} domain at z = {}",
                levels[last],
                self.domain.kind(),
                max
            )));
        }
        check_strictly_increasing(&format!("input levels of '{}'", self.field), levels)?;

        trace!(
            field = self.field,
            input_levels = levels.len(),
            "Setting column by linear interpolation"
        );

        // invariant: levels[m] <= z for every fixed level z visited so far
        // (up to the coverage slack), and m never decreases
        let mut m = 0;
        for (k, &z) in self.domain.levels().iter().enumerate() {
            while m + 1 < last && levels[m + 1] < z {
                m += 1;
            }
            let alpha = (z - levels[m]) / (levels[m + 1] - levels[m]);
            column[k] = blend(values[m], values[m + 1], alpha);
        }

        Ok(())
    }

    /// Get values of `column` at `levels` by linear interpolation.
    ///
    /// The first level must be legal. Ice columns hold the top value above
    /// the top level; bedrock columns require the last level to be legal too.
    pub fn get_column_pl(&self, column: &[f64], levels: &[f64], values: &mut [f64]) -> Result<()> {
        if !self.check_query(column, levels, values)? {
            return Ok(());
        }

        trace!(
            field = self.field,
            query_levels = levels.len(),
            "Getting column by linear interpolation"
        );

        let fixed = self.domain.levels();
        let top = fixed.len() - 1;

        let mut m = 0;
        for (k, &z) in levels.iter().enumerate() {
            if z > fixed[top] {
                values[k] = column[top];
                continue;
            }
            // z <= fixed[top] keeps m + 1 <= top
            while fixed[m + 1] < z {
                m += 1;
            }
            let alpha = (z - fixed[m]) / (fixed[m + 1] - fixed[m]);
            values[k] = blend(column[m], column[m + 1], alpha);
        }

        Ok(())
    }

    /// Get the value of `column` at a single legal level `z`.
    ///
    /// Levels at or beyond either end of the fixed grid get the end value.
    pub fn get_value_at(&self, column: &[f64], z: f64) -> Result<f64> {
        check_length("column", column, self.domain.len())?;
        self.check_level(z)?;

        let fixed = self.domain.levels();
        let top = fixed.len() - 1;
        if z >= fixed[top] {
            return Ok(column[top]);
        }
        if z <= fixed[0] {
            return Ok(column[0]);
        }

        let m = bracket(fixed, z, 0, top);
        let alpha = (z - fixed[m]) / (fixed[m + 1] - fixed[m]);
        Ok(blend(column[m], column[m + 1], alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::super::ColumnDomain;
    use super::*;
    use crate::error::RegridError;

    fn ice() -> ColumnDomain {
        ColumnDomain::ice(vec![0.0, 10.0, 20.0, 40.0]).unwrap()
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let domain = ice();
        let resampler = ColumnResampler::new(&domain, "temp");
        let original = [263.1, 265.7, 268.9, 271.3];

        let mut column = [0.0; 4];
        resampler
            .set_column_pl(domain.levels(), &original, &mut column)
            .unwrap();
        assert_eq!(column, original);

        let mut values = [0.0; 4];
        resampler
            .get_column_pl(&column, domain.levels(), &mut values)
            .unwrap();
        assert_eq!(values, original);
    }

    #[test]
    fn test_set_from_coarser_and_finer_input() {
        let domain = ice();
        let resampler = ColumnResampler::new(&domain, "age");
        let mut column = [0.0; 4];

        // f(z) = 2z + 1 is reproduced exactly by linear interpolation
        let levels = [-5.0, 15.0, 50.0];
        let values: Vec<f64> = levels.iter().map(|z| 2.0 * z + 1.0).collect();
        resampler
            .set_column_pl(&levels, &values, &mut column)
            .unwrap();
        for (z, v) in domain.levels().iter().zip(column.iter()) {
            assert!((v - (2.0 * z + 1.0)).abs() < 1e-12);
        }

        let levels: Vec<f64> = (0..=80).map(|k| k as f64 * 0.5).collect();
        let values: Vec<f64> = levels.iter().map(|z| 2.0 * z + 1.0).collect();
        resampler
            .set_column_pl(&levels, &values, &mut column)
            .unwrap();
        for (z, v) in domain.levels().iter().zip(column.iter()) {
            assert!((v - (2.0 * z + 1.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_set_requires_full_coverage() {
        let domain = ice();
        let resampler = ColumnResampler::new(&domain, "temp");
        let mut column = [0.0; 4];

        let short_top = resampler.set_column_pl(&[0.0, 30.0], &[1.0, 2.0], &mut column);
        assert!(matches!(
            short_top,
            Err(RegridError::InsufficientCoverage { .. })
        ));

        let short_bottom = resampler.set_column_pl(&[1.0, 40.0], &[1.0, 2.0], &mut column);
        assert!(matches!(
            short_bottom,
            Err(RegridError::InsufficientCoverage { .. })
        ));

        let single = resampler.set_column_pl(&[0.0], &[1.0], &mut column);
        assert!(single.is_err());

        // within the coverage slack
        assert!(resampler
            .set_column_pl(&[0.0005, 39.9995], &[1.0, 2.0], &mut column)
            .is_ok());
    }

    #[test]
    fn test_set_rejects_unsorted_levels() {
        let domain = ice();
        let resampler = ColumnResampler::new(&domain, "temp");
        let mut column = [0.0; 4];
        let result = resampler.set_column_pl(&[0.0, 30.0, 20.0, 40.0], &[0.0; 4], &mut column);
        assert!(matches!(result, Err(RegridError::NonMonotonic { .. })));
    }

    #[test]
    fn test_get_holds_top_value_for_ice() {
        let domain = ice();
        let resampler = ColumnResampler::new(&domain, "temp");
        let column = [1.0, 2.0, 3.0, 5.0];

        let mut values = [0.0; 3];
        resampler
            .get_column_pl(&column, &[30.0, 40.0, 1000.0], &mut values)
            .unwrap();
        assert_eq!(values, [4.0, 5.0, 5.0]);
    }

    #[test]
    fn test_get_rejects_illegal_first_level() {
        let domain = ice();
        let resampler = ColumnResampler::new(&domain, "temp");
        let mut values = [0.0; 2];
        let result = resampler.get_column_pl(&[0.0; 4], &[-1.0, 5.0], &mut values);
        assert!(matches!(result, Err(RegridError::LevelOutOfDomain { .. })));
    }

    #[test]
    fn test_bedrock_get_checks_both_ends() {
        let domain = ColumnDomain::bedrock(vec![-30.0, -20.0, -10.0, 0.0]).unwrap();
        let resampler = ColumnResampler::new(&domain, "litho_temp");
        let column = [280.0, 278.0, 276.0, 274.0];

        let mut values = [0.0; 2];
        resampler
            .get_column_pl(&column, &[-25.0, 0.0], &mut values)
            .unwrap();
        assert_eq!(values, [279.0, 274.0]);

        assert!(matches!(
            resampler.get_column_pl(&column, &[-25.0, 5.0], &mut values),
            Err(RegridError::LevelOutOfDomain { .. })
        ));
        assert!(matches!(
            resampler.get_column_pl(&column, &[-31.0, -5.0], &mut values),
            Err(RegridError::LevelOutOfDomain { .. })
        ));
    }

    #[test]
    fn test_bedrock_set_requires_full_coverage() {
        let domain = ColumnDomain::bedrock(vec![-30.0, -20.0, -10.0, 0.0]).unwrap();
        let resampler = ColumnResampler::new(&domain, "litho_temp");
        let mut column = [0.0; 4];

        resampler
            .set_column_pl(&[-30.0, 0.0], &[280.0, 274.0], &mut column)
            .unwrap();
        for (v, expected) in column.iter().zip([280.0, 278.0, 276.0, 274.0]) {
            assert!((v - expected).abs() < 1e-12);
        }

        assert!(resampler
            .set_column_pl(&[-20.0, 0.0], &[280.0, 274.0], &mut column)
            .is_err());
    }

    #[test]
    fn test_single_value() {
        let domain = ice();
        let resampler = ColumnResampler::new(&domain, "temp");
        let column = [1.0, 2.0, 3.0, 5.0];

        assert_eq!(resampler.get_value_at(&column, 0.0).unwrap(), 1.0);
        assert_eq!(resampler.get_value_at(&column, 5.0).unwrap(), 1.5);
        assert_eq!(resampler.get_value_at(&column, 20.0).unwrap(), 3.0);
        assert_eq!(resampler.get_value_at(&column, 30.0).unwrap(), 4.0);
        assert_eq!(resampler.get_value_at(&column, 40.0).unwrap(), 5.0);
        assert!(resampler.get_value_at(&column, 41.0).is_err());
    }
}
