//! # Errors of linear algebra operations
//!
//! Raised at the point of the offending operation and never recovered from inside this crate.
//! Equality comparisons are not fallible: values of different shapes are simply unequal.
use thiserror::Error;

/// Problems encountered while combining or indexing vectors and matrices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinearAlgebraError {
    /// The operands of an operation have incompatible sizes or shapes.
    #[error("dimension mismatch in {operation}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// Size required by the left-hand side.
        expected: usize,
        /// Size provided by the right-hand side.
        found: usize,
    },
    /// An argument could not be interpreted as the kind of value the operation needs.
    ///
    /// The contained `String` is a message for the end user.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
    /// An index is outside of `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Length of the indexed dimension.
        len: usize,
    },
}

/// Result of a fallible linear algebra operation.
pub type Result<T> = std::result::Result<T, LinearAlgebraError>;

impl LinearAlgebraError {
    pub(crate) fn dimension_mismatch(operation: &'static str, expected: usize, found: usize) -> Self {
        log::debug!("{}: size {} does not match size {}", operation, expected, found);

        LinearAlgebraError::DimensionMismatch { operation, expected, found }
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        log::debug!("index {} is out of range for length {}", index, len);

        LinearAlgebraError::IndexOutOfRange { index, len }
    }
}
