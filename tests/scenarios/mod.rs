use dense_linalg::{vector, LinearAlgebraError, Matrix, Operand, Product, Vector, Vector3D};

use super::init_logging;

fn left_matrix() -> Matrix {
    let mut m = Matrix::new(3, 3);
    for (j, column) in [[0f64, 1f64, 2f64], [3f64, 4f64, 5f64], [6f64, 7f64, 8f64]].iter().enumerate() {
        for (i, &value) in column.iter().enumerate() {
            m.set(i, j, value).unwrap();
        }
    }

    m
}

#[test]
fn distance() {
    init_logging();

    assert_eq!(vector![1, 1].distance_from(&vector![5, 4]), Ok(5f64));
}

#[test]
fn scale() {
    assert_eq!(vector![1, 2] * 2f64, Vector::new(vec![2f64, 4f64]));
    assert_eq!(vector![1, 2].scale(2f64), Ok(vector![2, 4]));
}

#[test]
fn matrix_times_vector() {
    init_logging();

    let m = left_matrix();
    let expected = vector![24, 30, 36];

    assert_eq!(&m * &vector![1, 2, 3], expected);
    assert_eq!(&m * &Vector3D::new(1f64, 2f64, 3f64), expected);
    assert_eq!(m.multiply_vector(&[1f64, 2f64, 3f64]), Ok(expected));
}

#[test]
fn matrix_times_matrix() {
    init_logging();

    let m = left_matrix();
    let n = Matrix::from_columns(vec![vector![1, 3, 5], vector![2, 4, 6], vector![7, 8, 9]]).unwrap();
    let expected = Matrix::from_columns(vec![
        vector![39, 48, 57],
        vector![48, 60, 72],
        vector![78, 102, 126],
    ]).unwrap();

    assert_eq!(&m * &n, expected);
    assert_eq!(m.multiply(Operand::Matrix(&n)), Ok(Product::Matrix(expected)));
}

#[test]
fn mismatches_are_errors_but_not_for_equality() {
    init_logging();

    let u = vector![1, 2];
    let v = vector![1, 2, 3];

    assert!(matches!(u.checked_add(&v), Err(LinearAlgebraError::DimensionMismatch { .. })));
    assert!(matches!(u.checked_sub(&v), Err(LinearAlgebraError::DimensionMismatch { .. })));
    assert!(matches!(u.dot(&v), Err(LinearAlgebraError::DimensionMismatch { .. })));
    assert!(matches!(u.distance_from(&v), Err(LinearAlgebraError::DimensionMismatch { .. })));
    assert!(u != v);

    let a = Matrix::new(2, 3);
    let b = Matrix::new(2, 3);
    assert!(matches!(a.multiply_matrix(&b), Err(LinearAlgebraError::DimensionMismatch { .. })));
    assert!(matches!(a.multiply_vector(&u), Err(LinearAlgebraError::DimensionMismatch { .. })));
    assert!(a != Matrix::new(3, 2));
}

#[test]
fn index_out_of_range() {
    let mut v = vector![1, 2, 3];
    assert_eq!(v.get(3), Err(LinearAlgebraError::IndexOutOfRange { index: 3, len: 3 }));
    assert!(v.set(10, 0f64).is_err());

    let mut m = Matrix::new(2, 2);
    assert!(matches!(m.get(2, 0), Err(LinearAlgebraError::IndexOutOfRange { .. })));
    assert!(matches!(m.set(0, 2, 1f64), Err(LinearAlgebraError::IndexOutOfRange { .. })));
}

#[test]
fn vector3d_in_place_of_vector() {
    let mut p = Vector3D::default();
    p.set_x(1f64);
    p[1] = 2f64;
    *p.z_mut() = 3f64;

    assert_eq!(p.as_vector(), &vector![1, 2, 3]);
    assert_eq!(p.norm_squared(), 14f64);
    assert_eq!(Matrix::identity(3).multiply_vector(&p), Ok(vector![1, 2, 3]));
}

#[test]
fn rendering() {
    let m = left_matrix();
    assert_eq!(
        m.to_string(),
        "0.000e+00, 3.000e+00, 6.000e+00\n1.000e+00, 4.000e+00, 7.000e+00\n2.000e+00, 5.000e+00, 8.000e+00",
    );
    assert_eq!(m.to_string().parse::<Matrix>(), Ok(m));
    assert_eq!(vector![1, 2].to_string().parse::<Vector>(), Ok(vector![1, 2]));
}
