//! Error types for regrid.
//!
//! Every failure in the remapping engine is reported through one enum so
//! that callers can match on the condition instead of parsing messages.

use thiserror::Error;

/// The main error type for regrid operations.
#[derive(Error, Debug)]
pub enum RegridError {
    /// A coordinate grid with no points
    #[error("Empty grid: {grid} must contain at least one point")]
    EmptyGrid { grid: String },

    /// A coordinate grid that is not strictly increasing
    #[error(
        "Non-monotonic grid: {grid} has to be strictly increasing, \
         but {grid}[{index}] = {left} >= {grid}[{next}] = {right}",
        next = .index + 1
    )]
    NonMonotonic {
        grid: String,
        index: usize,
        left: f64,
        right: f64,
    },

    /// A coordinate that cannot be placed on a grid
    #[error("Invalid coordinate: {grid}[{index}] = {value} is not a usable coordinate")]
    InvalidCoordinate {
        grid: String,
        index: usize,
        value: f64,
    },

    /// A time step that cannot be averaged over
    #[error("Invalid time step for '{series}': {message}")]
    InvalidTimeStep { series: String, message: String },

    /// A period that cannot describe wraparound of the given grid
    #[error("Invalid period: {period} (must be positive and larger than the grid span {span})")]
    InvalidPeriod { period: f64, span: f64 },

    /// A level outside the legal range of a column domain
    #[error("Level out of domain: z = {level} is outside [{min}, {max}] for field '{field}'")]
    LevelOutOfDomain {
        field: String,
        level: f64,
        min: f64,
        max: f64,
    },

    /// Fixed internal levels that cannot describe a column domain
    #[error("Invalid column domain: {message}")]
    InvalidDomain { message: String },

    /// Input levels that do not span the column domain
    #[error("Insufficient coverage for field '{field}': {message}")]
    InsufficientCoverage { field: String, message: String },

    /// A value sequence that does not match the grid it belongs to
    #[error("Length mismatch: {what} has {actual} entries, expected {expected}")]
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// A column index outside the horizontal grid of a field
    #[error("Index out of bounds: {what} index {index} is not below {size}")]
    IndexOutOfBounds {
        what: String,
        index: usize,
        size: usize,
    },

    /// Unrecognised interpolation policy name
    #[error("Unknown interpolation policy: {name}")]
    UnknownPolicy { name: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Array shape errors
    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Convenience type alias for Results with RegridError
pub type Result<T> = std::result::Result<T, RegridError>;
