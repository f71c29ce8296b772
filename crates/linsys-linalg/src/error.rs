use thiserror::Error;

/// Errors produced by [`Vector`][crate::Vector] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// A vector was constructed from an empty coordinate list.
    #[error("the coordinates must be nonempty")]
    InvalidVector,
    /// Two operands (or an operand and a fixed-dimension operation) disagree on dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("cannot normalize the zero vector")]
    ZeroVector,
    #[error("cannot compute an angle with a zero vector")]
    ZeroVectorAngle,
    #[error("zero vector has no unique parallel component")]
    NoUniqueParallelComponent,
}

impl LinalgError {
    /// Returns `Ok(())` if `found` equals `expected`, and a [`LinalgError::DimensionMismatch`]
    /// otherwise.
    pub fn check_dimension(expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::DimensionMismatch { expected, found })
        }
    }
}
