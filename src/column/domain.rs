//! Vertical column domains.
//!
//! A domain is the fixed set of internal levels shared by every column of a
//! field, together with the closed interval of legal levels: `[0, Lz]` above
//! the base of the ice, `[-Lbz, 0]` below the top of the bedrock.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RegridError, Result};
use crate::interpolation::common::check_strictly_increasing;

/// Kind of vertical column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Levels measured upward from the base of the ice, `[0, Lz]`
    Ice,
    /// Levels measured upward to the top of the bedrock, `[-Lbz, 0]`
    Bedrock,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Ice => write!(f, "ice"),
            ColumnKind::Bedrock => write!(f, "bedrock"),
        }
    }
}

/// Numeric slack used when checking levels against a domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Absolute slack on the legal level range
    #[serde(default = "default_level_tolerance")]
    pub level: f64,

    /// Absolute slack on the coverage required to set a column by interpolation
    #[serde(default = "default_coverage_tolerance")]
    pub coverage: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            level: default_level_tolerance(),
            coverage: default_coverage_tolerance(),
        }
    }
}

fn default_level_tolerance() -> f64 {
    1.0e-6
}

fn default_coverage_tolerance() -> f64 {
    1.0e-3
}

/// Fixed internal levels of one column kind
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDomain {
    kind: ColumnKind,
    levels: Vec<f64>,
}

impl ColumnDomain {
    /// Ice domain; `levels` must start at 0 and end at `Lz > 0`.
    pub fn ice(levels: Vec<f64>) -> Result<Self> {
        Self::new(ColumnKind::Ice, levels)
    }

    /// Bedrock domain; `levels` must start at `-Lbz < 0` and end at 0.
    pub fn bedrock(levels: Vec<f64>) -> Result<Self> {
        Self::new(ColumnKind::Bedrock, levels)
    }

    /// `count` equally spaced ice levels from 0 to `lz`.
    pub fn equally_spaced_ice(lz: f64, count: usize) -> Result<Self> {
        Self::ice(equally_spaced(0.0, lz, count)?)
    }

    /// `count` equally spaced bedrock levels from `-lbz` to 0.
    pub fn equally_spaced_bedrock(lbz: f64, count: usize) -> Result<Self> {
        Self::bedrock(equally_spaced(-lbz, 0.0, count)?)
    }

    /// Create a domain of the given kind.
    pub fn new(kind: ColumnKind, levels: Vec<f64>) -> Result<Self> {
        if levels.len() < 2 {
            return Err(RegridError::InvalidDomain {
                message: format!(
                    "{} domain needs at least two levels, got {}",
                    kind,
                    levels.len()
                ),
            });
        }
        check_strictly_increasing("levels", &levels)?;

        let anchor = match kind {
            ColumnKind::Ice => levels[0],
            ColumnKind::Bedrock => levels[levels.len() - 1],
        };
        if anchor != 0.0 {
            let end = match kind {
                ColumnKind::Ice => "start",
                ColumnKind::Bedrock => "end",
            };
            return Err(RegridError::InvalidDomain {
                message: format!("{} levels must {} at z = 0, got {}", kind, end, anchor),
            });
        }

        Ok(Self { kind, levels })
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// The fixed internal levels, strictly increasing
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Number of internal levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: a domain has at least two levels
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Lower end of the legal range (0 for ice, `-Lbz` for bedrock)
    pub fn min(&self) -> f64 {
        self.levels[0]
    }

    /// Upper end of the legal range (`Lz` for ice, 0 for bedrock)
    pub fn max(&self) -> f64 {
        self.levels[self.levels.len() - 1]
    }

    /// Whether `z` lies in the legal range, up to `tolerance`.
    pub fn is_legal(&self, z: f64, tolerance: f64) -> bool {
        z >= self.min() - tolerance && z <= self.max() + tolerance
    }

    /// Fail with a domain error naming `field` if `z` is not a legal level.
    pub fn check_level(&self, field: &str, z: f64, tolerance: f64) -> Result<()> {
        if self.is_legal(z, tolerance) {
            return Ok(());
        }
        Err(RegridError::LevelOutOfDomain {
            field: field.to_string(),
            level: z,
            min: self.min(),
            max: self.max(),
        })
    }

    /// Whether queries above the top level are answered by holding the top
    /// value. Only the ice domain allows it; bedrock queries must stay legal.
    pub fn holds_above_top(&self) -> bool {
        self.kind == ColumnKind::Ice
    }

    /// A copy of this domain with more levels added at the top.
    ///
    /// `new_levels` must extend the current levels, keeping all of them.
    pub fn extended(&self, new_levels: Vec<f64>) -> Result<Self> {
        if new_levels.len() < self.len() || new_levels[..self.len()] != self.levels[..] {
            return Err(RegridError::InvalidDomain {
                message: format!(
                    "new {} levels must keep the existing {} levels",
                    self.kind,
                    self.len()
                ),
            });
        }
        Self::new(self.kind, new_levels)
    }
}

fn equally_spaced(start: f64, end: f64, count: usize) -> Result<Vec<f64>> {
    if count < 2 || !(end > start) {
        return Err(RegridError::InvalidDomain {
            message: format!(
                "cannot place {} equally spaced levels on [{}, {}]",
                count, start, end
            ),
        });
    }
    let dz = (end - start) / (count - 1) as f64;
    let mut levels: Vec<f64> = (0..count).map(|k| start + k as f64 * dz).collect();
    // pin the ends so that the anchor at z = 0 is exact
    levels[0] = start;
    levels[count - 1] = end;
    Ok(levels)
}
