//! Integration tests for echelon-linalg.

#[cfg(test)]
mod integration_tests {
    use echelon_fields::{Q, R64};

    use crate::matrix::Matrix;

    fn qi(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn q_matrix(rows: Vec<Vec<i64>>) -> Matrix<Q> {
        Matrix::from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(qi).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_scaled_identity_plus_matrix() {
        // 5 * I_4 + given matrix, entry for entry.
        let id: Matrix<Q> = Matrix::identity(4);
        let scaled = id.scale(&qi(5));
        let other = q_matrix(vec![
            vec![-5, 0, 0, 1],
            vec![0, -5, 0, 0],
            vec![0, 5, -4, 0],
            vec![0, 0, 0, -5],
        ]);
        let sum = scaled.try_add(&other).unwrap();
        let expected = q_matrix(vec![
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
            vec![0, 5, 1, 0],
            vec![0, 0, 0, 0],
        ]);
        assert_eq!(sum, expected);
    }

    #[test]
    fn test_rank_determinant_inverse_coherence() {
        // For square matrices: full rank iff nonzero determinant iff invertible.
        let invertible = q_matrix(vec![vec![2, 1, 0], vec![1, 3, 1], vec![0, 1, 4]]);
        assert_eq!(invertible.rank(), 3);
        assert_ne!(invertible.determinant().unwrap(), qi(0));
        assert!(invertible.inverse().is_ok());

        let singular = q_matrix(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        assert_eq!(singular.rank(), 2);
        assert_eq!(singular.determinant().unwrap(), qi(0));
        assert!(singular.inverse().is_err());
    }

    #[test]
    fn test_linearity_of_matrix_vector_product() {
        // A * (a*v + b*u) == a*(A*v) + b*(A*u)
        let m = q_matrix(vec![vec![1, 2, 0], vec![3, -1, 4]]);
        let v = [qi(1), qi(0), qi(2)];
        let u = [qi(-1), qi(3), qi(5)];
        let (a, b) = (qi(7), qi(-2));

        let combined: Vec<Q> = v
            .iter()
            .zip(u.iter())
            .map(|(x, y)| a * *x + b * *y)
            .collect();
        let lhs = m.mv(&combined).unwrap();

        let mv = m.mv(&v).unwrap();
        let mu = m.mv(&u).unwrap();
        let rhs: Vec<Q> = mv
            .iter()
            .zip(mu.iter())
            .map(|(x, y)| a * *x + b * *y)
            .collect();

        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_row_equivalence() {
        let a = q_matrix(vec![vec![1, 2], vec![3, 4]]);
        let mut b = a.clone();
        b.swap_rows(0, 1);
        b.add_scaled_row(0, 1, &qi(5));
        assert!(a.is_row_equivalent_to(&b));

        let singular = q_matrix(vec![vec![1, 2], vec![2, 4]]);
        assert!(!a.is_row_equivalent_to(&singular));
    }

    #[test]
    fn test_real_field_determinant_tolerance() {
        let m = Matrix::from_rows(vec![
            vec![R64::new(1.0), R64::new(2.0)],
            vec![R64::new(3.0), R64::new(4.0)],
        ])
        .unwrap();
        let det = m.determinant().unwrap();
        assert!(det.approx_eq(R64::new(-2.0), 1e-12));
    }
}

#[cfg(test)]
mod elimination_properties {
    use proptest::prelude::*;

    use echelon_fields::{FiniteField, Ring};

    use crate::matrix::Matrix;

    type F5 = FiniteField<5>;

    fn f5_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<F5>> {
        proptest::collection::vec(0u64..5, rows * cols).prop_map(move |values| {
            Matrix::from_flat(values.into_iter().map(F5::new).collect(), cols).unwrap()
        })
    }

    proptest! {
        #[test]
        fn rref_is_idempotent(m in f5_matrix(4, 5)) {
            let rref = m.reduced_row_echelon_form();
            prop_assert!(rref.is_reduced_row_echelon_form());
            prop_assert_eq!(rref.reduced_row_echelon_form(), rref);
        }

        #[test]
        fn rank_is_stable_under_elimination(m in f5_matrix(4, 5)) {
            let rank = m.rank();
            prop_assert!(rank <= 4);
            prop_assert_eq!(m.row_echelon_form().rank(), rank);
            prop_assert!(m.row_echelon_form().is_row_echelon_form());
        }

        #[test]
        fn kernel_columns_map_to_zero(m in f5_matrix(3, 5)) {
            let kernel = m.kernel();
            prop_assert!(m.mm(&kernel).unwrap().is_zero_matrix());
            let rank = m.rank();
            if rank == m.cols() {
                prop_assert_eq!(kernel.cols(), 1);
            } else {
                prop_assert_eq!(kernel.cols(), m.cols() - rank);
            }
        }

        #[test]
        fn inverse_iff_full_rank(m in f5_matrix(3, 3)) {
            let full_rank = m.rank() == 3;
            let det_nonzero = !m.determinant().unwrap().is_zero();
            prop_assert_eq!(full_rank, det_nonzero);

            match m.inverse() {
                Ok(inv) => {
                    prop_assert!(full_rank);
                    prop_assert_eq!(m.mm(&inv).unwrap(), Matrix::identity(3));
                    prop_assert_eq!(inv.mm(&m).unwrap(), Matrix::identity(3));
                }
                Err(_) => prop_assert!(!full_rank),
            }
        }

        #[test]
        fn lu_reassembles_permuted_input(m in f5_matrix(4, 4)) {
            let lu = m.lu_decomposition().unwrap();
            prop_assert_eq!(
                lu.permutation.mm(&m).unwrap(),
                lu.lower.mm(&lu.upper).unwrap()
            );
            prop_assert!(lu.upper.is_row_echelon_form());
            for i in 0..4 {
                for j in i + 1..4 {
                    prop_assert!(lu.lower[(i, j)].is_zero());
                }
            }
        }

        #[test]
        fn byte_layout_round_trips(m in f5_matrix(3, 4)) {
            prop_assert_eq!(Matrix::<F5>::from_bytes(&m.to_bytes()).unwrap(), m);
        }
    }
}
