//! Elementary row and column operations.
//!
//! The elimination engine drives matrices exclusively through these
//! three operation kinds; applying one to a "recipient" matrix in the
//! same order is what turns elimination into inversion or LU tracking.

use echelon_fields::Ring;

use crate::error::LinalgError;
use crate::matrix::Matrix;

/// A single elementary operation, applicable to rows or columns.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementaryOperation<F> {
    /// Multiplies every entry of row/column `index` by `scalar`.
    Scale {
        /// The row or column to scale.
        index: usize,
        /// The scaling factor.
        scalar: F,
    },
    /// Exchanges rows/columns `i` and `j`.
    Swap(usize, usize),
    /// Adds `scalar * row/col[src]` into `row/col[dst]`.
    AddScaled {
        /// The scaling factor applied to the source.
        scalar: F,
        /// The source row or column.
        src: usize,
        /// The destination row or column.
        dst: usize,
    },
}

impl<F: Ring> Matrix<F> {
    /// Applies an elementary operation to the rows of this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if the operation
    /// references a row outside the matrix.
    pub fn apply_row_op(&mut self, op: &ElementaryOperation<F>) -> Result<(), LinalgError> {
        match op {
            ElementaryOperation::Scale { index, scalar } => {
                check_index(*index, self.rows())?;
                self.scale_row(*index, scalar);
            }
            ElementaryOperation::Swap(i, j) => {
                check_index(*i, self.rows())?;
                check_index(*j, self.rows())?;
                self.swap_rows(*i, *j);
            }
            ElementaryOperation::AddScaled { scalar, src, dst } => {
                check_index(*src, self.rows())?;
                check_index(*dst, self.rows())?;
                self.add_scaled_row(*dst, *src, scalar);
            }
        }
        Ok(())
    }

    /// Applies an elementary operation to the columns of this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if the operation
    /// references a column outside the matrix.
    pub fn apply_col_op(&mut self, op: &ElementaryOperation<F>) -> Result<(), LinalgError> {
        match op {
            ElementaryOperation::Scale { index, scalar } => {
                check_index(*index, self.cols())?;
                for row in 0..self.rows() {
                    self[(row, *index)] = self[(row, *index)].clone() * scalar.clone();
                }
            }
            ElementaryOperation::Swap(i, j) => {
                check_index(*i, self.cols())?;
                check_index(*j, self.cols())?;
                if i != j {
                    for row in 0..self.rows() {
                        let tmp = self[(row, *i)].clone();
                        self[(row, *i)] = self[(row, *j)].clone();
                        self[(row, *j)] = tmp;
                    }
                }
            }
            ElementaryOperation::AddScaled { scalar, src, dst } => {
                check_index(*src, self.cols())?;
                check_index(*dst, self.cols())?;
                for row in 0..self.rows() {
                    let val = self[(row, *src)].clone() * scalar.clone();
                    self[(row, *dst)] = self[(row, *dst)].clone() + val;
                }
            }
        }
        Ok(())
    }
}

fn check_index(index: usize, len: usize) -> Result<(), LinalgError> {
    if index < len {
        Ok(())
    } else {
        Err(LinalgError::IndexOutOfBounds { index, len })
    }
}
