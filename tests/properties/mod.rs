//! Algebraic properties of the vector and matrix operations.
//!
//! Components are small integers, so that all sums and products below are exact.
use proptest::prelude::*;

use dense_linalg::{LinearAlgebraError, Matrix, Vector};

fn components(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-1000i32..1000).prop_map(f64::from), len)
}

/// Two vectors of the same, arbitrary, length.
fn pair() -> impl Strategy<Value = (Vector, Vector)> {
    (0usize..16).prop_flat_map(|len| (components(len), components(len)))
        .prop_map(|(u, v)| (Vector::new(u), Vector::new(v)))
}

fn matrix(nr_rows: usize, nr_columns: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(components(nr_rows), nr_columns)
        .prop_map(move |columns| {
            let columns = columns.into_iter().map(Vector::new).collect::<Vec<_>>();
            if columns.is_empty() {
                Matrix::new(nr_rows, 0)
            } else {
                Matrix::from_columns(columns).unwrap()
            }
        })
}

proptest! {
    #[test]
    fn add_then_subtract((u, v) in pair()) {
        prop_assert_eq!(&(&u + &v) - &v, u);
    }

    #[test]
    fn double_negation((u, _) in pair()) {
        prop_assert_eq!(-(-&u), u);
    }

    #[test]
    fn dot_commutes((u, v) in pair()) {
        prop_assert_eq!(u.dot(&v), v.dot(&u));
    }

    #[test]
    fn norm_non_negative((u, _) in pair()) {
        let norm = u.norm();
        prop_assert!(norm >= 0f64);
        prop_assert_eq!(norm == 0f64, u.iter().all(|&value| value == 0f64));
    }

    #[test]
    fn distance_is_norm_of_difference((u, v) in pair()) {
        prop_assert_eq!(u.distance_from(&v), Ok((&u - &v).norm()));
    }

    #[test]
    fn mismatched_sizes((u, _) in pair(), extra in components(1)) {
        let mut longer = u.clone().into_inner();
        longer.extend(extra);
        let v = Vector::new(longer);

        prop_assert!(u != v);
        prop_assert!(
            matches!(u.checked_add(&v), Err(LinearAlgebraError::DimensionMismatch { .. })),
            "addition should be rejected"
        );
        prop_assert!(
            matches!(u.checked_sub(&v), Err(LinearAlgebraError::DimensionMismatch { .. })),
            "subtraction should be rejected"
        );
        prop_assert!(
            matches!(u.dot(&v), Err(LinearAlgebraError::DimensionMismatch { .. })),
            "inner product should be rejected"
        );
        prop_assert!(
            matches!(u.distance_from(&v), Err(LinearAlgebraError::DimensionMismatch { .. })),
            "distance should be rejected"
        );
    }

    #[test]
    fn product_shape(
        (a, b) in (1usize..6, 1usize..6, 1usize..6)
            .prop_flat_map(|(m, k, n)| (matrix(m, k), matrix(k, n)))
    ) {
        let product = a.multiply_matrix(&b).unwrap();
        prop_assert_eq!(product.nr_rows(), a.nr_rows());
        prop_assert_eq!(product.nr_columns(), b.nr_columns());

        // Entry (i, j) is the inner product of row i and column j
        for (i, row) in a.rows().enumerate() {
            for (j, column) in b.columns().enumerate() {
                prop_assert_eq!(product.get(i, j), row.dot(column));
            }
        }
    }

    #[test]
    fn incompatible_product(m in 1usize..6, k in 1usize..6, n in 1usize..6) {
        let a = Matrix::new(m, k);
        let b = Matrix::new(k + 1, n);
        prop_assert!(
            matches!(a.multiply_matrix(&b), Err(LinearAlgebraError::DimensionMismatch { .. })),
            "product should be rejected"
        );
    }
}
