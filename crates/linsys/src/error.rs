use linsys_linalg::LinalgError;
use thiserror::Error;

/// Errors produced while building, reducing, or parsing linear systems.
///
/// Dimension mismatches between rows of a system are reported as
/// [`LinalgError::DimensionMismatch`], the same kind that vector arithmetic produces.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Linalg(#[from] LinalgError),
    #[error("a linear system needs at least one equation")]
    EmptySystem,
    /// A row without any coefficient above the tolerance was asked for its pivot.
    #[error("no nonzero elements found")]
    NoNonzeroElements,
    /// The determinant of a 2D intersection was too close to zero to divide by.
    #[error("intersection is numerically unstable (determinant {determinant})")]
    NumericalInstability { determinant: f64 },
    /// A row contains a NaN or infinite coefficient or constant term.
    #[error("row {row} has a non-finite coefficient")]
    NonFiniteCoefficient { row: usize },
    #[error("invalid equation `{input}`: {reason}")]
    InvalidEquation { input: String, reason: String },
}
