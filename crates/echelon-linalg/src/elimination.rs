//! Gaussian elimination: row echelon and reduced row echelon forms.
//!
//! The engine is a single iterative loop over columns; the pivot row
//! advances only when a pivot is found, so stack usage is O(1) for any
//! matrix size. Every operation applied to the primary matrix is
//! mirrored, in the same order, onto an optional recipient matrix of
//! matching row count — that mirroring is what turns elimination into
//! inversion (recipient starts as the identity).
//!
//! Pivot selection is first-nonzero for exact fields and
//! maximum-magnitude (partial pivoting) for fields that report a
//! [`Field::magnitude`], e.g. `R64`.

use echelon_fields::Field;

use crate::error::LinalgError;
use crate::matrix::Matrix;

/// Pivot locations per column: `pivots[col]` is the row holding the
/// pivot for that column in the echelon form, or `None` if the column
/// has no pivot.
pub type PivotMap = Vec<Option<usize>>;

/// Selects the pivot row for `col` among rows `pivot_row..`.
///
/// Exact fields take the first nonzero entry; fields with a magnitude
/// take the entry of maximum absolute value.
pub(crate) fn find_pivot<F: Field>(
    matrix: &Matrix<F>,
    col: usize,
    pivot_row: usize,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for row in pivot_row..matrix.rows() {
        let entry = &matrix[(row, col)];
        if entry.is_zero() {
            continue;
        }
        match entry.magnitude() {
            None => return Some(row),
            Some(mag) => {
                if best.map_or(true, |(_, b)| mag > b) {
                    best = Some((row, mag));
                }
            }
        }
    }
    best.map(|(row, _)| row)
}

/// Reduces `matrix` to row echelon form in place.
///
/// If `recipient` is present, every row operation applied to `matrix`
/// is also applied to it, in the same order. Returns the pivot map.
pub fn row_echelon<F: Field>(
    matrix: &mut Matrix<F>,
    mut recipient: Option<&mut Matrix<F>>,
) -> PivotMap {
    let rows = matrix.rows();
    let cols = matrix.cols();
    let mut pivots: PivotMap = vec![None; cols];
    let mut pivot_row = 0;

    for col in 0..cols {
        if pivot_row == rows {
            break;
        }

        let Some(found) = find_pivot(matrix, col, pivot_row) else {
            // Only zeros from the pivot row down; not a pivot column.
            continue;
        };

        if found != pivot_row {
            matrix.swap_rows(pivot_row, found);
            if let Some(rec) = recipient.as_deref_mut() {
                rec.swap_rows(pivot_row, found);
            }
        }

        pivots[col] = Some(pivot_row);
        let pivot_entry = matrix[(pivot_row, col)].clone();

        if let Some(pivot_inv) = pivot_entry.inv() {
            for row in pivot_row + 1..rows {
                let entry = matrix[(row, col)].clone();
                if entry.is_zero() {
                    continue;
                }
                let scalar = -entry * pivot_inv.clone();
                matrix.add_scaled_row(row, pivot_row, &scalar);
                if let Some(rec) = recipient.as_deref_mut() {
                    rec.add_scaled_row(row, pivot_row, &scalar);
                }
            }
        }

        pivot_row += 1;
    }

    pivots
}

/// Reduces `matrix` to reduced row echelon form in place.
///
/// Runs [`row_echelon`] first, then normalizes each pivot to one and
/// clears the rest of its column. All operations are mirrored onto the
/// recipient exactly as in [`row_echelon`]. Returns the pivot map.
pub fn reduced_row_echelon<F: Field>(
    matrix: &mut Matrix<F>,
    mut recipient: Option<&mut Matrix<F>>,
) -> PivotMap {
    let pivots = row_echelon(matrix, recipient.as_deref_mut());
    let rows = matrix.rows();

    for (col, pivot) in pivots.iter().enumerate() {
        let Some(pivot_row) = *pivot else {
            continue;
        };

        let pivot_entry = matrix[(pivot_row, col)].clone();
        if let Some(pivot_inv) = pivot_entry.inv() {
            if !pivot_entry.is_one() {
                matrix.scale_row(pivot_row, &pivot_inv);
                if let Some(rec) = recipient.as_deref_mut() {
                    rec.scale_row(pivot_row, &pivot_inv);
                }
            }
        }

        for row in 0..rows {
            if row == pivot_row {
                continue;
            }
            let entry = matrix[(row, col)].clone();
            if entry.is_zero() {
                continue;
            }
            // The pivot is one now, so the eliminating scalar is just -entry.
            let scalar = -entry;
            matrix.add_scaled_row(row, pivot_row, &scalar);
            if let Some(rec) = recipient.as_deref_mut() {
                rec.add_scaled_row(row, pivot_row, &scalar);
            }
        }
    }

    pivots
}

/// Counts the pivot columns in a pivot map.
#[must_use]
pub fn pivot_count(pivots: &PivotMap) -> usize {
    pivots.iter().filter(|p| p.is_some()).count()
}

impl<F: Field> Matrix<F> {
    /// This matrix in row echelon form, out of place.
    #[must_use]
    pub fn row_echelon_form(&self) -> Self {
        let mut m = self.clone();
        let _ = row_echelon(&mut m, None);
        m
    }

    /// This matrix in reduced row echelon form, out of place.
    #[must_use]
    pub fn reduced_row_echelon_form(&self) -> Self {
        let mut m = self.clone();
        let _ = reduced_row_echelon(&mut m, None);
        m
    }

    /// `true` if this matrix is in row echelon form.
    ///
    /// Uses the definitions from
    /// <https://en.wikipedia.org/wiki/Row_echelon_form>.
    #[must_use]
    pub fn is_row_echelon_form(&self) -> bool {
        let mut pivot_row = 0;
        for col in 0..self.cols() {
            if pivot_row >= self.rows() {
                break;
            }
            for row in pivot_row + 1..self.rows() {
                if !self[(row, col)].is_zero() {
                    return false;
                }
            }
            if !self[(pivot_row, col)].is_zero() {
                pivot_row += 1;
            }
        }
        true
    }

    /// `true` if this matrix is in *reduced* row echelon form.
    ///
    /// Uses the definitions from
    /// <https://en.wikipedia.org/wiki/Row_echelon_form#Reduced_row_echelon_form>.
    #[must_use]
    pub fn is_reduced_row_echelon_form(&self) -> bool {
        if !self.is_row_echelon_form() {
            return false;
        }
        let mut pivot_row = 0;
        for col in 0..self.cols() {
            if pivot_row >= self.rows() {
                break;
            }
            if self[(pivot_row, col)].is_zero() {
                continue;
            }
            if !self[(pivot_row, col)].is_one() {
                return false;
            }
            for row in 0..self.rows() {
                if row != pivot_row && !self[(row, col)].is_zero() {
                    return false;
                }
            }
            pivot_row += 1;
        }
        true
    }

    /// The rank of this matrix: the number of pivot columns in its
    /// row echelon form.
    #[must_use]
    pub fn rank(&self) -> usize {
        let mut m = self.clone();
        pivot_count(&row_echelon(&mut m, None))
    }

    /// `true` if `other` can be obtained from `self` by row operations.
    #[must_use]
    pub fn is_row_equivalent_to(&self, other: &Self) -> bool {
        self.rows() == other.rows() && self.cols() == other.cols() && self.rank() == other.rank()
    }

    /// The matrix `B` such that `B * self == self * B == identity`.
    ///
    /// Runs reduced row echelon on a working copy while mirroring every
    /// operation onto an identity recipient; the recipient is the
    /// inverse once the copy reaches the identity.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] for non-square input
    /// and [`LinalgError::SingularMatrix`] if the rank is deficient.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::DimensionMismatch(format!(
                "inverse requires a square matrix, got {}x{}",
                self.rows(),
                self.cols()
            )));
        }
        let mut work = self.clone();
        let mut inv = Self::identity(self.rows());
        let pivots = reduced_row_echelon(&mut work, Some(&mut inv));
        if pivot_count(&pivots) < self.rows() {
            return Err(LinalgError::SingularMatrix);
        }
        Ok(inv)
    }
}
