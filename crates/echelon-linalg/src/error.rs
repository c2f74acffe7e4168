//! Error taxonomy for matrix operations.

use thiserror::Error;

/// Errors reported by matrix construction, access, and algorithms.
///
/// None of these are retried internally: they represent logic errors or
/// mathematical facts about the input, not transient conditions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// Operands of an operation have incompatible shapes.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// An element access or elementary operation referenced an index
    /// outside the current bounds.
    #[error("index {index} out of bounds for axis of length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the indexed axis.
        len: usize,
    },

    /// Inverse requested on a matrix whose rank is less than its dimension.
    #[error("matrix is singular")]
    SingularMatrix,

    /// A multiplicative inverse of the field's zero element was requested.
    #[error("multiplicative inverse of zero is undefined")]
    InvalidFieldOperation,
}
