//! Interpolation weights for 1-D coordinate remapping.
//!
//! A [`WeightTable`] is computed once per pair of grids and then applied to
//! any number of value sequences defined on the input grid. Construction
//! costs one binary search per output point; application is a single pass
//! over the precomputed `(left, right, alpha)` triples.

pub mod common;
mod linear;
mod nearest;
mod periodic;
mod piecewise_constant;

use tracing::debug;

use crate::error::{RegridError, Result};
use common::{blend, check_coordinates, check_length, check_strictly_increasing, Weights};

/// Interpolation policy used to build a [`WeightTable`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Policy {
    /// Linear interpolation, end values held flat outside the grid
    Linear,
    /// The nearer of the two bracketing samples (ties go left)
    NearestNeighbor,
    /// Zero-order hold: the sample at or before each point
    PiecewiseConstant,
    /// Linear interpolation on a grid that repeats every `period`
    LinearPeriodic { period: f64 },
}

impl Policy {
    /// Names accepted by [`Policy::from_name`]
    pub const NAMES: [&'static str; 4] =
        ["linear", "nearest", "piecewise_constant", "linear_periodic"];

    /// Get a policy by name.
    ///
    /// `period` is required by `"linear_periodic"` and ignored otherwise.
    pub fn from_name(name: &str, period: Option<f64>) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "linear" => Ok(Policy::Linear),
            "nearest" | "nearest_neighbor" => Ok(Policy::NearestNeighbor),
            "piecewise_constant" | "constant" => Ok(Policy::PiecewiseConstant),
            "linear_periodic" | "periodic" => match period {
                Some(period) => Ok(Policy::LinearPeriodic { period }),
                None => Err(RegridError::Config {
                    message: format!("policy '{}' requires a period", name),
                }),
            },
            _ => Err(RegridError::UnknownPolicy {
                name: name.to_string(),
            }),
        }
    }

    /// Get the name of this policy
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Linear => "linear",
            Policy::NearestNeighbor => "nearest",
            Policy::PiecewiseConstant => "piecewise_constant",
            Policy::LinearPeriodic { .. } => "linear_periodic",
        }
    }
}

/// Precomputed indices and weights mapping one grid onto another.
///
/// For every output point `k`, the interpolated value is the blend of
/// `values[left[k]]` and `values[right[k]]` with weight `alpha[k]` on the
/// right one. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    policy: Policy,
    input_size: usize,
    left: Vec<usize>,
    right: Vec<usize>,
    alpha: Vec<f64>,
}

impl WeightTable {
    /// Compute the weights of `output_x` against `input_x` under `policy`.
    ///
    /// `input_x` must be non-empty and strictly increasing; `output_x` may
    /// be empty and in any order. Fails before computing any weight if the
    /// input grid (or the period) is invalid. NaN output coordinates are
    /// rejected; infinite ones hold the end values, except under
    /// `LinearPeriodic` where they cannot be wrapped and are rejected too.
    pub fn new(policy: Policy, input_x: &[f64], output_x: &[f64]) -> Result<Self> {
        check_strictly_increasing("input_x", input_x)?;
        let periodic = matches!(policy, Policy::LinearPeriodic { .. });
        check_coordinates("output_x", output_x, !periodic)?;

        let weights = match policy {
            Policy::Linear => linear::weights(input_x, output_x),
            Policy::NearestNeighbor => nearest::weights(input_x, output_x),
            Policy::PiecewiseConstant => piecewise_constant::weights(input_x, output_x),
            Policy::LinearPeriodic { period } => {
                periodic::check_period(input_x, period)?;
                periodic::weights(input_x, output_x, period)
            }
        };
        weights.debug_check(input_x.len());

        debug!(
            policy = policy.name(),
            input_size = input_x.len(),
            output_size = output_x.len(),
            "Computed interpolation weights"
        );

        let Weights { left, right, alpha } = weights;
        Ok(Self {
            policy,
            input_size: input_x.len(),
            left,
            right,
            alpha,
        })
    }

    /// Linear weights
    pub fn linear(input_x: &[f64], output_x: &[f64]) -> Result<Self> {
        Self::new(Policy::Linear, input_x, output_x)
    }

    /// Nearest neighbor weights
    pub fn nearest_neighbor(input_x: &[f64], output_x: &[f64]) -> Result<Self> {
        Self::new(Policy::NearestNeighbor, input_x, output_x)
    }

    /// Piecewise-constant weights
    pub fn piecewise_constant(input_x: &[f64], output_x: &[f64]) -> Result<Self> {
        Self::new(Policy::PiecewiseConstant, input_x, output_x)
    }

    /// Periodic linear weights
    pub fn linear_periodic(input_x: &[f64], output_x: &[f64], period: f64) -> Result<Self> {
        Self::new(Policy::LinearPeriodic { period }, input_x, output_x)
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of points in the input grid
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Number of points in the output grid
    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }

    pub fn left(&self) -> &[usize] {
        &self.left
    }

    pub fn right(&self) -> &[usize] {
        &self.right
    }

    pub fn alpha(&self) -> &[f64] {
        &self.alpha
    }

    /// Left input index of output point `j`. Panics if `j >= self.len()`.
    pub fn left_at(&self, j: usize) -> usize {
        self.left[j]
    }

    /// Right input index of output point `j`. Panics if `j >= self.len()`.
    pub fn right_at(&self, j: usize) -> usize {
        self.right[j]
    }

    /// Weight of the right input value at output point `j`. Panics if `j >= self.len()`.
    pub fn alpha_at(&self, j: usize) -> f64 {
        self.alpha[j]
    }

    /// Interpolate values defined on the input grid onto the output grid.
    pub fn interpolate(&self, values: &[f64]) -> Result<Vec<f64>> {
        let mut result = vec![0.0; self.len()];
        self.interpolate_into(values, &mut result)?;
        Ok(result)
    }

    /// Interpolate into a caller-provided buffer of output-grid length.
    pub fn interpolate_into(&self, values: &[f64], result: &mut [f64]) -> Result<()> {
        check_length("input values", values, self.input_size)?;
        if result.len() != self.len() {
            return Err(RegridError::LengthMismatch {
                what: "output buffer".to_string(),
                expected: self.len(),
                actual: result.len(),
            });
        }

        for (k, out) in result.iter_mut().enumerate() {
            *out = blend(values[self.left[k]], values[self.right[k]], self.alpha[k]);
        }
        Ok(())
    }
}
