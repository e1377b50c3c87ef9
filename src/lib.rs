//! # regrid
//!
//! Fast 1-D coordinate remapping for gridded model data.
//!
//! This library computes index pairs and blend weights that map values from
//! a strictly increasing input grid onto an arbitrary output grid, and
//! resamples vertical columns of 3-D fields against their fixed internal
//! levels.
//!
//! ## Key Features
//!
//! - **Precomputed weights**: one binary search per output point at
//!   construction, a single pass per value sequence afterwards
//! - **Several policies**: linear, nearest neighbor, piecewise constant and
//!   periodic linear with continuous wraparound
//! - **Column resampling**: piecewise-linear and local quadratic reads and
//!   writes of ice and bedrock columns with strict domain checks
//!
//! ## Architecture
//!
//! - **Weights**: [`WeightTable`] built under a [`Policy`]
//! - **Columns**: [`ColumnResampler`] over a [`ColumnDomain`], used by [`Field3d`]
//! - **Forcing**: [`ForcingSeries`] resamples time series onto model time

pub mod column;
pub mod config;
pub mod error;
pub mod field;
pub mod forcing;
pub mod interpolation;
pub mod logging;

pub use column::{ColumnDomain, ColumnKind, ColumnResampler, Tolerances};
pub use config::Config;
pub use error::{RegridError, Result};
pub use field::Field3d;
pub use forcing::ForcingSeries;
pub use interpolation::{Policy, WeightTable};
pub use logging::{
    init_tracing, log_error, log_operation_end, log_operation_start, log_table_stats,
    log_timed_operation,
};
