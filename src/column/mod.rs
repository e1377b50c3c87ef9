//! Column resampling against fixed vertical levels.
//!
//! A [`ColumnResampler`] reads and writes one column of a field: a value
//! sequence co-indexed with the fixed internal levels of a [`ColumnDomain`].
//! The domain is fixed for the run while the values change on every call, so
//! the bracket search is done inline instead of through a
//! [`WeightTable`](crate::interpolation::WeightTable).
//!
//! All operations walk their level sequences with a cursor that only moves
//! up, so every caller-supplied level sequence must be strictly increasing.

pub mod domain;
mod linear;
mod quadratic;

use tracing::warn;

use crate::error::{RegridError, Result};
use crate::interpolation::common::{check_length, check_strictly_increasing};
pub use domain::{ColumnDomain, ColumnKind, Tolerances};

/// Reads and writes columns of one field on one domain.
///
/// Holds only borrowed views; nothing is retained across calls.
#[derive(Debug, Clone, Copy)]
pub struct ColumnResampler<'a> {
    domain: &'a ColumnDomain,
    field: &'a str,
    tolerances: Tolerances,
}

impl<'a> ColumnResampler<'a> {
    /// Create a resampler for the column of `field` on `domain`.
    ///
    /// `field` is used in error messages only.
    pub fn new(domain: &'a ColumnDomain, field: &'a str) -> Self {
        Self {
            domain,
            field,
            tolerances: Tolerances::default(),
        }
    }

    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    pub fn domain(&self) -> &ColumnDomain {
        self.domain
    }

    pub fn field(&self) -> &str {
        self.field
    }

    /// Get values at `levels`, piecewise-linear if the caller declares the
    /// query levels equally spaced, local quadratic otherwise.
    pub fn get_column_smart(
        &self,
        equally_spaced: bool,
        column: &[f64],
        levels: &[f64],
        values: &mut [f64],
    ) -> Result<()> {
        if equally_spaced {
            self.get_column_pl(column, levels, values)
        } else {
            self.get_column_quad(column, levels, values)
        }
    }

    /// Common checks for the get operations.
    ///
    /// Returns `false` when there is nothing to compute.
    fn check_query(&self, column: &[f64], levels: &[f64], values: &[f64]) -> Result<bool> {
        check_length("column", column, self.domain.len())?;
        check_length("output values", values, levels.len())?;

        let (first, last) = match (levels.first(), levels.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Ok(false),
        };

        self.check_level(first)?;
        if !self.domain.holds_above_top() {
            self.check_level(last)?;
        }
        check_strictly_increasing(&format!("query levels of '{}'", self.field), levels)?;

        Ok(true)
    }

    fn check_level(&self, z: f64) -> Result<()> {
        self.domain
            .check_level(self.field, z, self.tolerances.level)
            .map_err(|e| {
                warn!(field = self.field, level = z, kind = %self.domain.kind(), "Illegal level");
                e
            })
    }

    fn coverage_error(&self, message: String) -> RegridError {
        warn!(field = self.field, kind = %self.domain.kind(), "{}", message);
        RegridError::InsufficientCoverage {
            field: self.field.to_string(),
            message,
        }
    }
}
