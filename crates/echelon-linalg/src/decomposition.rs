//! LU decomposition with partial pivoting, and the determinant built on it.
//!
//! A single pivoted elimination pass records everything the two
//! operations need: the permutation as applied swaps, the elimination
//! multipliers as a unit-lower-triangular factor, and the remaining
//! upper-triangular matrix. Swapping two rows negates the determinant
//! while row additions leave it unchanged, so the determinant falls out
//! of the swap parity and the diagonals.

use echelon_fields::Field;

use crate::elimination::find_pivot;
use crate::error::LinalgError;
use crate::matrix::Matrix;

/// Result of LU decomposition: `permutation * A == lower * upper`.
#[derive(Clone, Debug, PartialEq)]
pub struct LuDecomposition<F> {
    /// Number of row swaps applied; reused for the determinant sign.
    pub swap_count: usize,
    /// Permutation matrix P.
    pub permutation: Matrix<F>,
    /// Lower-triangular factor L with unit diagonal (zero on degenerate
    /// rows of rank-deficient input).
    pub lower: Matrix<F>,
    /// Upper-triangular factor U, in row echelon form.
    pub upper: Matrix<F>,
}

impl<F: Field> Matrix<F> {
    /// Computes the LU decomposition `P * A == L * U`.
    ///
    /// Elimination proceeds with row swaps allowed; each swap is
    /// mirrored onto the permutation and onto the multipliers already
    /// recorded in L, and each pivot column contributes one column of
    /// multipliers (`U[r][col] / pivot`) to L, unit diagonal included.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] for non-square input.
    pub fn lu_decomposition(&self) -> Result<LuDecomposition<F>, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::DimensionMismatch(format!(
                "LU decomposition requires a square matrix, got {}x{}",
                self.rows(),
                self.cols()
            )));
        }

        let n = self.rows();
        let mut upper = self.clone();
        let mut lower = Self::zeros(n, n);
        let mut permutation = Self::identity(n);
        let mut swap_count = 0;
        let mut pivot_row = 0;

        for col in 0..n {
            if pivot_row == n {
                break;
            }

            let Some(found) = find_pivot(&upper, col, pivot_row) else {
                continue;
            };

            if found != pivot_row {
                upper.swap_rows(pivot_row, found);
                permutation.swap_rows(pivot_row, found);
                lower.swap_rows(pivot_row, found);
                swap_count += 1;
            }

            let pivot_entry = upper[(pivot_row, col)].clone();
            let pivot_inv = pivot_entry.inv().ok_or(LinalgError::InvalidFieldOperation)?;

            // Record the multiplier column before eliminating; the pivot
            // ordinal equals pivot_row, which is where the unit diagonal
            // entry lands.
            for row in pivot_row..n {
                lower[(row, pivot_row)] = upper[(row, col)].clone() * pivot_inv.clone();
            }

            for row in pivot_row + 1..n {
                let entry = upper[(row, col)].clone();
                if entry.is_zero() {
                    continue;
                }
                let scalar = -entry * pivot_inv.clone();
                upper.add_scaled_row(row, pivot_row, &scalar);
            }

            pivot_row += 1;
        }

        Ok(LuDecomposition {
            swap_count,
            permutation,
            lower,
            upper,
        })
    }

    /// Computes the determinant via pivoted elimination.
    ///
    /// `det(A) = (-1)^swaps * product(diag(U)) * product(diag(L))`; the
    /// L factor is one per pivot and zero where elimination found no
    /// pivot, so rank deficiency yields zero without a special case.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] for non-square input.
    pub fn determinant(&self) -> Result<F, LinalgError> {
        let lu = self.lu_decomposition()?;
        let mut det = if lu.swap_count % 2 == 0 {
            F::one()
        } else {
            -F::one()
        };
        for i in 0..self.rows() {
            det = det * lu.upper[(i, i)].clone();
            det = det * lu.lower[(i, i)].clone();
        }
        Ok(det)
    }

    /// Computes the determinant by cofactor expansion along row 0.
    ///
    /// An alternative for small matrices; O(n!) and only sensible for
    /// tiny dimensions. Agrees with [`Matrix::determinant`], which is
    /// the canonical definition.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] for non-square input.
    pub fn determinant_by_cofactor(&self) -> Result<F, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::DimensionMismatch(format!(
                "determinant requires a square matrix, got {}x{}",
                self.rows(),
                self.cols()
            )));
        }
        Ok(cofactor_expand(self))
    }
}

fn cofactor_expand<F: Field>(matrix: &Matrix<F>) -> F {
    let n = matrix.rows();
    if n == 0 {
        return F::one();
    }
    if n == 1 {
        return matrix[(0, 0)].clone();
    }

    let mut sum = F::zero();
    for col in 0..n {
        let entry = matrix[(0, col)].clone();
        if entry.is_zero() {
            continue;
        }
        let term = entry * cofactor_expand(&matrix.minor(0, col));
        // Negate when (row + col) is odd; the row is 0 here.
        sum = if col % 2 == 1 { sum - term } else { sum + term };
    }
    sum
}
