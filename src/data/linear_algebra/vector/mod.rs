//! # Vector types
//!
//! A dense vector of arbitrary, but fixed, length and a three dimensional specialization of it
//! with named coordinates.
pub use dense::Dense as Vector;
pub use three::Vector3D;
pub use crate::data::linear_algebra::utilities::DEFAULT_PRECISION;

mod dense;
mod three;

/// Create a `Vector` from a list of numbers, each converted with `as f64`.
///
/// ```
/// use dense_linalg::{vector, Vector};
///
/// assert_eq!(vector![1, 2.5], Vector::new(vec![1f64, 2.5f64]));
/// ```
#[macro_export]
macro_rules! vector {
    ($($value:expr),* $(,)?) => {
        $crate::Vector::new(vec![$(($value) as f64),*])
    };
}
