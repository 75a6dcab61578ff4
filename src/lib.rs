//! # Dense linear algebra
//!
//! Vectors and matrices of real numbers with the usual arithmetic: inner products, norms,
//! distances and matrix-vector and matrix-matrix products. All types own their data; every
//! arithmetic operation allocates a fresh result.
#![warn(missing_docs)]

pub mod data;
pub mod io;

pub use data::linear_algebra::error::{LinearAlgebraError, Result};
pub use data::linear_algebra::matrix::{Matrix, Operand, Product};
pub use data::linear_algebra::traits::VectorLike;
pub use data::linear_algebra::vector::{Vector, Vector3D};
pub use io::error::ParseError;
