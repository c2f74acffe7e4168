//! Dense matrix storage in row-major order.
//!
//! A [`Matrix`] owns a flat buffer of `rows * cols` field elements; the
//! entry at `(r, c)` lives at offset `r * cols + c`. Matrices have value
//! semantics: cloning copies the buffer, and no two matrices alias.

use std::ops::{Index, IndexMut};

use echelon_fields::Ring;

use crate::error::LinalgError;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<F> {
    /// Matrix entries in row-major order.
    data: Vec<F>,
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
}

impl<F: Ring> Matrix<F> {
    /// Creates a new matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero; a matrix has at least one
    /// row and one column.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "matrix dimensions must be >= 1");
        Self {
            data: vec![F::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = F::one();
        }
        m
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the rows are ragged
    /// or the input is empty.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self, LinalgError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(LinalgError::DimensionMismatch(
                "matrix must have at least one row and one column".to_string(),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != col_count {
                return Err(LinalgError::DimensionMismatch(format!(
                    "row {i} has {} entries, expected {col_count}",
                    row.len()
                )));
            }
        }
        let data: Vec<F> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: row_count,
            cols: col_count,
        })
    }

    /// Creates a matrix from a flat row-major buffer and a column count.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `cols` is zero or
    /// the buffer length is not a multiple of `cols`.
    pub fn from_flat(buffer: Vec<F>, cols: usize) -> Result<Self, LinalgError> {
        if cols == 0 || buffer.is_empty() || buffer.len() % cols != 0 {
            return Err(LinalgError::DimensionMismatch(format!(
                "flat buffer of length {} does not divide into rows of {cols}",
                buffer.len()
            )));
        }
        let rows = buffer.len() / cols;
        Ok(Self {
            data: buffer,
            rows,
            cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&F> {
        if row < self.rows && col < self.cols {
            Some(&self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the entry at (row, col).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut F> {
        if row < self.rows && col < self.cols {
            Some(&mut self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Sets the entry at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::IndexOutOfBounds`] if the position is
    /// outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: F) -> Result<(), LinalgError> {
        if row >= self.rows {
            return Err(LinalgError::IndexOutOfBounds {
                index: row,
                len: self.rows,
            });
        }
        if col >= self.cols {
            return Err(LinalgError::IndexOutOfBounds {
                index: col,
                len: self.cols,
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[F] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a mutable slice of the specified row.
    pub fn row_mut(&mut self, row: usize) -> &mut [F] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<F> {
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Returns the matrix obtained by deleting one row and one column.
    ///
    /// Used by cofactor expansion; requires at least two rows and columns.
    #[must_use]
    pub fn minor(&self, omit_row: usize, omit_col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for r in 0..self.rows {
            if r == omit_row {
                continue;
            }
            for c in 0..self.cols {
                if c == omit_col {
                    continue;
                }
                data.push(self[(r, c)].clone());
            }
        }
        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.cols;
        let j_start = j * self.cols;
        for k in 0..self.cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &F) {
        for k in 0..self.cols {
            self[(row, k)] = self[(row, k)].clone() * scale.clone();
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &F) {
        for k in 0..self.cols {
            let val = self[(source, k)].clone() * scale.clone();
            self[(target, k)] = self[(target, k)].clone() + val;
        }
    }

    /// Entry-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the shapes differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_shape(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Entry-wise difference.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the shapes differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, LinalgError> {
        self.check_same_shape(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Scales all entries by a scalar, out of place.
    #[must_use]
    pub fn scale(&self, scalar: &F) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|v| v.clone() * scalar.clone())
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `x.len() != cols`.
    pub fn mv(&self, x: &[F]) -> Result<Vec<F>, LinalgError> {
        if x.len() != self.cols {
            return Err(LinalgError::DimensionMismatch(format!(
                "vector of length {} against {} columns",
                x.len(),
                self.cols
            )));
        }
        Ok((0..self.rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x.iter())
                    .fold(F::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect())
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// A plain triple loop; accelerated backends are the surrounding
    /// layer's business, not this kernel's.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the inner
    /// dimensions disagree.
    pub fn mm(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.cols != other.rows {
            return Err(LinalgError::DimensionMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut result = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = F::zero();
                for k in 0..self.cols {
                    sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                }
                result[(i, j)] = sum;
            }
        }
        Ok(result)
    }

    /// True if every entry is the additive identity.
    #[must_use]
    pub fn is_zero_matrix(&self) -> bool {
        self.data.iter().all(Ring::is_zero)
    }

    fn check_same_shape(&self, other: &Self) -> Result<(), LinalgError> {
        if self.rows == other.rows && self.cols == other.cols {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch(format!(
                "{}x{} against {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )))
        }
    }
}

impl<F> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl<F> IndexMut<(usize, usize)> for Matrix<F> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echelon_fields::Q;

    fn qi(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_zeros_and_identity() {
        let z: Matrix<Q> = Matrix::zeros(2, 3);
        assert_eq!(z.rows(), 2);
        assert_eq!(z.cols(), 3);
        assert!(z.is_zero_matrix());

        let id: Matrix<Q> = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id[(i, j)], if i == j { qi(1) } else { qi(0) });
            }
        }
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![qi(1), qi(2)], vec![qi(3)]]).unwrap_err();
        assert!(matches!(err, LinalgError::DimensionMismatch(_)));
    }

    #[test]
    fn test_from_flat() {
        let m = Matrix::from_flat(vec![qi(1), qi(2), qi(3), qi(4), qi(5), qi(6)], 3).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m[(1, 0)], qi(4));

        let err = Matrix::from_flat(vec![qi(1), qi(2), qi(3)], 2).unwrap_err();
        assert!(matches!(err, LinalgError::DimensionMismatch(_)));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut m: Matrix<Q> = Matrix::zeros(2, 2);
        assert!(m.set(0, 1, qi(7)).is_ok());
        assert_eq!(m.get(0, 1), Some(&qi(7)));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(
            m.set(0, 5, qi(1)),
            Err(LinalgError::IndexOutOfBounds { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_mv() {
        let m = Matrix::from_rows(vec![
            vec![qi(1), qi(2), qi(3)],
            vec![qi(4), qi(5), qi(6)],
        ])
        .unwrap();
        let y = m.mv(&[qi(1), qi(2), qi(3)]).unwrap();
        assert_eq!(y, vec![qi(14), qi(32)]);
        assert!(m.mv(&[qi(1)]).is_err());
    }

    #[test]
    fn test_mm() {
        let a = Matrix::from_rows(vec![vec![qi(1), qi(2)], vec![qi(3), qi(4)]]).unwrap();
        let b = Matrix::from_rows(vec![vec![qi(5), qi(6)], vec![qi(7), qi(8)]]).unwrap();
        let c = a.mm(&b).unwrap();
        assert_eq!(c[(0, 0)], qi(19));
        assert_eq!(c[(0, 1)], qi(22));
        assert_eq!(c[(1, 0)], qi(43));
        assert_eq!(c[(1, 1)], qi(50));
    }

    #[test]
    fn test_mm_shape_error() {
        let a: Matrix<Q> = Matrix::zeros(2, 3);
        let b: Matrix<Q> = Matrix::zeros(2, 3);
        assert!(matches!(
            a.mm(&b),
            Err(LinalgError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_row_primitives() {
        let mut m = Matrix::from_rows(vec![vec![qi(1), qi(2)], vec![qi(3), qi(4)]]).unwrap();
        m.swap_rows(0, 1);
        assert_eq!(m.row(0), &[qi(3), qi(4)]);
        m.scale_row(0, &qi(2));
        assert_eq!(m.row(0), &[qi(6), qi(8)]);
        m.add_scaled_row(1, 0, &qi(-1));
        assert_eq!(m.row(1), &[qi(-5), qi(-6)]);
    }

    #[test]
    fn test_col() {
        let m = Matrix::from_rows(vec![
            vec![qi(1), qi(2), qi(3)],
            vec![qi(4), qi(5), qi(6)],
        ])
        .unwrap();
        assert_eq!(m.col(0), vec![qi(1), qi(4)]);
        assert_eq!(m.col(2), vec![qi(3), qi(6)]);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_rows(vec![
            vec![qi(1), qi(2), qi(3)],
            vec![qi(4), qi(5), qi(6)],
        ])
        .unwrap();
        let t = m.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t[(0, 0)], qi(1));
        assert_eq!(t[(1, 0)], qi(2));
        assert_eq!(t[(2, 1)], qi(6));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    #[should_panic(expected = "matrix dimensions must be >= 1")]
    fn test_zeros_rejects_zero_dimension() {
        let _: Matrix<Q> = Matrix::zeros(0, 3);
    }

    #[test]
    #[should_panic(expected = "matrix dimensions must be >= 1")]
    fn test_identity_rejects_zero_dimension() {
        let _: Matrix<Q> = Matrix::identity(0);
    }

    #[test]
    fn test_minor() {
        let m = Matrix::from_rows(vec![
            vec![qi(1), qi(2), qi(3)],
            vec![qi(4), qi(5), qi(6)],
            vec![qi(7), qi(8), qi(9)],
        ])
        .unwrap();
        let sub = m.minor(0, 1);
        assert_eq!(sub.rows(), 2);
        assert_eq!(sub.cols(), 2);
        assert_eq!(sub[(0, 0)], qi(4));
        assert_eq!(sub[(1, 1)], qi(9));
    }
}
