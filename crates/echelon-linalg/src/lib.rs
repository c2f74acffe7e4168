//! # echelon-linalg
//!
//! Dense matrix linear algebra, generic over an abstract field of scalars.
//!
//! This crate provides:
//! - Row-major dense matrix storage with elementary row/column operations
//! - Gaussian elimination to row echelon and reduced row echelon form,
//!   with optional operation mirroring onto a recipient matrix
//! - Rank, determinant, inverse, kernel basis, and LU decomposition
//!   with partial pivoting
//! - A flat row-major byte layout for persistence
//!
//! ## Pivoting policy
//!
//! All algorithms run a single elimination engine. Pivot selection is
//! first-nonzero over exact fields (rationals, finite fields) and
//! maximum-magnitude over floating-point scalars, where first-nonzero
//! pivoting would be numerically unstable.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod elimination;
pub mod encode;
pub mod error;
pub mod matrix;
pub mod ops;

mod decomposition;
mod kernel;

pub use decomposition::LuDecomposition;
pub use elimination::{pivot_count, reduced_row_echelon, row_echelon, PivotMap};
pub use encode::ScalarBytes;
pub use error::LinalgError;
pub use matrix::Matrix;
pub use ops::ElementaryOperation;

#[cfg(test)]
mod tests;
