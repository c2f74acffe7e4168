//! Binary persistence for matrices.
//!
//! The layout is a boundary contract with the surrounding storage
//! layer: two little-endian `u64` words (row count, column count)
//! followed by `rows * cols` scalars packed contiguously in row-major
//! order, with no padding or alignment markers. Round-tripping through
//! this layout reproduces the matrix exactly.

use echelon_fields::{FiniteField, Ring, Q, R64};

use crate::error::LinalgError;
use crate::matrix::Matrix;

/// Fixed-width little-endian byte encoding for a scalar.
pub trait ScalarBytes: Sized {
    /// Encoded width in bytes.
    const BYTE_WIDTH: usize;

    /// Appends the encoding of `self` to `buf`.
    fn write_bytes(&self, buf: &mut Vec<u8>);

    /// Decodes a scalar from a slice of exactly [`Self::BYTE_WIDTH`]
    /// bytes; `None` if the slice has the wrong length.
    fn read_bytes(bytes: &[u8]) -> Option<Self>;
}

impl ScalarBytes for R64 {
    const BYTE_WIDTH: usize = 8;

    fn write_bytes(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.value().to_le_bytes());
    }

    fn read_bytes(bytes: &[u8]) -> Option<Self> {
        let raw: [u8; 8] = bytes.try_into().ok()?;
        Some(Self::new(f64::from_le_bytes(raw)))
    }
}

impl<const P: u64> ScalarBytes for FiniteField<P> {
    const BYTE_WIDTH: usize = 8;

    fn write_bytes(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.value().to_le_bytes());
    }

    fn read_bytes(bytes: &[u8]) -> Option<Self> {
        let raw: [u8; 8] = bytes.try_into().ok()?;
        Some(Self::new(u64::from_le_bytes(raw)))
    }
}

impl ScalarBytes for Q {
    const BYTE_WIDTH: usize = 32;

    fn write_bytes(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.numer().to_le_bytes());
        buf.extend_from_slice(&self.denom().to_le_bytes());
    }

    fn read_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::BYTE_WIDTH {
            return None;
        }
        let num = i128::from_le_bytes(bytes[..16].try_into().ok()?);
        let den = i128::from_le_bytes(bytes[16..].try_into().ok()?);
        if den == 0 {
            return None;
        }
        Some(Self::from_ratio(num, den))
    }
}

impl<F: Ring + ScalarBytes> Matrix<F> {
    /// Serializes the matrix to the row-major byte layout.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(16 + self.rows() * self.cols() * F::BYTE_WIDTH);
        buf.extend_from_slice(&(self.rows() as u64).to_le_bytes());
        buf.extend_from_slice(&(self.cols() as u64).to_le_bytes());
        for row in 0..self.rows() {
            for entry in self.row(row) {
                entry.write_bytes(&mut buf);
            }
        }
        buf
    }

    /// Deserializes a matrix from the row-major byte layout.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if the buffer is
    /// truncated, oversized, or its header is inconsistent with its
    /// payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LinalgError> {
        if bytes.len() < 16 {
            return Err(LinalgError::DimensionMismatch(
                "byte buffer too short for matrix header".to_string(),
            ));
        }
        let rows = u64::from_le_bytes(bytes[..8].try_into().map_err(|_| {
            LinalgError::DimensionMismatch("unreadable matrix header".to_string())
        })?) as usize;
        let cols = u64::from_le_bytes(bytes[8..16].try_into().map_err(|_| {
            LinalgError::DimensionMismatch("unreadable matrix header".to_string())
        })?) as usize;

        let expected = 16 + rows
            .checked_mul(cols)
            .and_then(|n| n.checked_mul(F::BYTE_WIDTH))
            .ok_or_else(|| {
                LinalgError::DimensionMismatch("matrix header overflows".to_string())
            })?;
        if bytes.len() != expected {
            return Err(LinalgError::DimensionMismatch(format!(
                "expected {expected} bytes for a {rows}x{cols} matrix, got {}",
                bytes.len()
            )));
        }

        let mut data = Vec::with_capacity(rows * cols);
        for chunk in bytes[16..].chunks_exact(F::BYTE_WIDTH) {
            let scalar = F::read_bytes(chunk).ok_or_else(|| {
                LinalgError::DimensionMismatch("unreadable scalar encoding".to_string())
            })?;
            data.push(scalar);
        }
        Self::from_flat(data, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type F5 = FiniteField<5>;

    #[test]
    fn test_round_trip_rationals() {
        let m = Matrix::from_rows(vec![
            vec![Q::new(1, 2), Q::new(-3, 4)],
            vec![Q::from_integer(0), Q::from_integer(7)],
        ])
        .unwrap();
        let bytes = m.to_bytes();
        assert_eq!(bytes.len(), 16 + 4 * Q::BYTE_WIDTH);
        assert_eq!(Matrix::<Q>::from_bytes(&bytes).unwrap(), m);
    }

    #[test]
    fn test_round_trip_finite_field() {
        let m = Matrix::from_rows(vec![
            vec![F5::new(0), F5::new(4), F5::new(3)],
            vec![F5::new(2), F5::new(1), F5::new(0)],
        ])
        .unwrap();
        assert_eq!(Matrix::<F5>::from_bytes(&m.to_bytes()).unwrap(), m);
    }

    #[test]
    fn test_round_trip_reals() {
        let m = Matrix::from_rows(vec![vec![R64::new(0.5), R64::new(-2.25)]]).unwrap();
        assert_eq!(Matrix::<R64>::from_bytes(&m.to_bytes()).unwrap(), m);
    }

    #[test]
    fn test_truncated_buffer_rejected() {
        let m: Matrix<F5> = Matrix::identity(2);
        let mut bytes = m.to_bytes();
        bytes.pop();
        assert!(matches!(
            Matrix::<F5>::from_bytes(&bytes),
            Err(LinalgError::DimensionMismatch(_))
        ));
        assert!(matches!(
            Matrix::<F5>::from_bytes(&bytes[..7]),
            Err(LinalgError::DimensionMismatch(_))
        ));
    }
}
