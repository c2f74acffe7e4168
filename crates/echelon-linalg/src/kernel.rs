//! Null space (kernel) basis extraction.

use echelon_fields::Field;

use crate::elimination::{pivot_count, reduced_row_echelon};
use crate::matrix::Matrix;

impl<F: Field> Matrix<F> {
    /// Computes a basis of the kernel `{ v : A * v == 0 }`.
    ///
    /// Each column of the result is one basis vector, built from the
    /// reduced echelon form: the free variable of its column is set to
    /// one, all other free variables to zero, and each pivot variable
    /// to the negated echelon entry in the free column. If the matrix
    /// has full column rank the kernel is trivial and a single all-zero
    /// column is returned as the degenerate basis.
    #[must_use]
    pub fn kernel(&self) -> Self {
        let mut rref = self.clone();
        let pivots = reduced_row_echelon(&mut rref, None);
        let rank = pivot_count(&pivots);
        let kernel_dim = self.cols() - rank;

        if kernel_dim == 0 {
            return Self::zeros(self.cols(), 1);
        }

        let mut basis = Self::zeros(self.cols(), kernel_dim);
        let mut k = 0;
        for free_col in 0..self.cols() {
            if pivots[free_col].is_some() {
                continue;
            }
            basis[(free_col, k)] = F::one();
            for (col, pivot) in pivots.iter().enumerate() {
                if let Some(pivot_row) = pivot {
                    basis[(col, k)] = -rref[(*pivot_row, free_col)].clone();
                }
            }
            k += 1;
        }
        basis
    }
}
