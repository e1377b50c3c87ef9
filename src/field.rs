//! Three-dimensional fields stored as vertical columns.
//!
//! A [`Field3d`] owns one value per fixed level of its [`ColumnDomain`] for
//! every point of an `mx × my` horizontal grid. Columns are contiguous, so
//! the column engine works on plain slices borrowed from the field.

use ndarray::{Array2, ArrayView3};
use tracing::{debug, info};

use crate::column::{ColumnDomain, ColumnResampler, Tolerances};
use crate::error::{RegridError, Result};
use crate::interpolation::common::check_length;

/// A named scalar field on a horizontal grid of vertical columns
#[derive(Debug, Clone)]
pub struct Field3d {
    name: String,
    mx: usize,
    my: usize,
    domain: ColumnDomain,
    tolerances: Tolerances,
    data: Vec<f64>,
}

impl Field3d {
    /// Create a field filled with zeros.
    pub fn new(name: &str, mx: usize, my: usize, domain: ColumnDomain) -> Self {
        let data = vec![0.0; mx * my * domain.len()];
        Self {
            name: name.to_string(),
            mx,
            my,
            domain,
            tolerances: Tolerances::default(),
            data,
        }
    }

    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &ColumnDomain {
        &self.domain
    }

    /// Horizontal grid size `(mx, my)`
    pub fn shape(&self) -> (usize, usize) {
        (self.mx, self.my)
    }

    /// All values as an `(mx, my, levels)` array view
    pub fn as_array(&self) -> Result<ArrayView3<'_, f64>> {
        Ok(ArrayView3::from_shape(
            (self.mx, self.my, self.domain.len()),
            &self.data,
        )?)
    }

    /// Values of column `(i, j)` at the fixed levels
    pub fn column(&self, i: usize, j: usize) -> Result<&[f64]> {
        let range = self.column_range(i, j)?;
        Ok(&self.data[range])
    }

    /// Mutable values of column `(i, j)` at the fixed levels
    pub fn column_mut(&mut self, i: usize, j: usize) -> Result<&mut [f64]> {
        let range = self.column_range(i, j)?;
        Ok(&mut self.data[range])
    }

    /// Set every level of column `(i, j)` to `value`.
    pub fn set_column(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        self.column_mut(i, j)?.fill(value);
        Ok(())
    }

    /// Copy `values` (one per fixed level) into column `(i, j)`.
    pub fn set_internal_column(&mut self, i: usize, j: usize, values: &[f64]) -> Result<()> {
        check_length("internal column", values, self.domain.len())?;
        self.column_mut(i, j)?.copy_from_slice(values);
        Ok(())
    }

    /// Set column `(i, j)` by linear interpolation of `(levels, values)`.
    pub fn set_column_pl(&mut self, i: usize, j: usize, levels: &[f64], values: &[f64]) -> Result<()> {
        let range = self.column_range(i, j)?;
        let label = self.label(i, j);
        ColumnResampler::new(&self.domain, &label)
            .with_tolerances(self.tolerances)
            .set_column_pl(levels, values, &mut self.data[range])
    }

    /// Values of column `(i, j)` at `levels`, piecewise-linear.
    pub fn get_column_pl(&self, i: usize, j: usize, levels: &[f64]) -> Result<Vec<f64>> {
        let label = self.label(i, j);
        let mut values = vec![0.0; levels.len()];
        self.resampler(&label)
            .get_column_pl(self.column(i, j)?, levels, &mut values)?;
        Ok(values)
    }

    /// Values of column `(i, j)` at `levels`, local quadratic.
    pub fn get_column_quad(&self, i: usize, j: usize, levels: &[f64]) -> Result<Vec<f64>> {
        let label = self.label(i, j);
        let mut values = vec![0.0; levels.len()];
        self.resampler(&label)
            .get_column_quad(self.column(i, j)?, levels, &mut values)?;
        Ok(values)
    }

    /// Values of column `(i, j)` at `levels`; linear if `equally_spaced`.
    pub fn get_column_smart(
        &self,
        equally_spaced: bool,
        i: usize,
        j: usize,
        levels: &[f64],
    ) -> Result<Vec<f64>> {
        let label = self.label(i, j);
        let mut values = vec![0.0; levels.len()];
        self.resampler(&label).get_column_smart(
            equally_spaced,
            self.column(i, j)?,
            levels,
            &mut values,
        )?;
        Ok(values)
    }

    /// Value of column `(i, j)` at level `z`.
    pub fn value_at(&self, i: usize, j: usize, z: f64) -> Result<f64> {
        let label = self.label(i, j);
        self.resampler(&label).get_value_at(self.column(i, j)?, z)
    }

    /// The horizontal slice at level `z`
    pub fn horizontal_slice(&self, z: f64) -> Result<Array2<f64>> {
        let mut slice = Array2::zeros((self.mx, self.my));
        for ((i, j), out) in slice.indexed_iter_mut() {
            *out = self.value_at(i, j, z)?;
        }
        Ok(slice)
    }

    /// Values at the level given per column by `surface`, e.g. the ice
    /// thickness for values at the ice surface.
    pub fn surface_values(&self, surface: &Array2<f64>) -> Result<Array2<f64>> {
        if surface.dim() != (self.mx, self.my) {
            return Err(RegridError::LengthMismatch {
                what: format!("surface levels for '{}'", self.name),
                expected: self.mx * self.my,
                actual: surface.len(),
            });
        }

        let mut result = Array2::zeros((self.mx, self.my));
        for ((i, j), out) in result.indexed_iter_mut() {
            *out = self.value_at(i, j, surface[[i, j]])?;
        }
        Ok(result)
    }

    /// Grow the field to `domain`, keeping existing values and filling the
    /// new top levels with `fill`.
    ///
    /// `domain` must extend the current domain (see [`ColumnDomain::extended`]).
    pub fn extend_vertically(&mut self, domain: ColumnDomain, fill: f64) -> Result<()> {
        let domain = self.domain.extended(domain.levels().to_vec())?;
        let old = self.domain.len();
        let new = domain.len();

        let mut data = Vec::with_capacity(self.mx * self.my * new);
        for column in self.data.chunks_exact(old) {
            data.extend_from_slice(column);
            data.resize(data.len() + (new - old), fill);
        }

        info!(
            field = %self.name,
            old_levels = old,
            new_levels = new,
            "Extended field vertically"
        );

        self.data = data;
        self.domain = domain;
        Ok(())
    }

    /// Location `(i, j, k)` of the first NaN, if any.
    pub fn find_nan(&self) -> Option<(usize, usize, usize)> {
        let mz = self.domain.len();
        let index = self.data.iter().position(|v| v.is_nan())?;
        let (column, k) = (index / mz, index % mz);
        let location = (column / self.my, column % self.my, k);
        debug!(field = %self.name, ?location, "Found NaN");
        Some(location)
    }

    fn column_range(&self, i: usize, j: usize) -> Result<std::ops::Range<usize>> {
        if i >= self.mx {
            return Err(RegridError::IndexOutOfBounds {
                what: format!("'{}' column i", self.name),
                index: i,
                size: self.mx,
            });
        }
        if j >= self.my {
            return Err(RegridError::IndexOutOfBounds {
                what: format!("'{}' column j", self.name),
                index: j,
                size: self.my,
            });
        }
        let mz = self.domain.len();
        let start = (i * self.my + j) * mz;
        Ok(start..start + mz)
    }

    fn label(&self, i: usize, j: usize) -> String {
        format!("{}[{}, {}]", self.name, i, j)
    }

    fn resampler<'a>(&'a self, label: &'a str) -> ColumnResampler<'a> {
        ColumnResampler::new(&self.domain, label).with_tolerances(self.tolerances)
    }
}
