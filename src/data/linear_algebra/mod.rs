//! # Linear algebra primitives
//!
//! Dense vectors, their three dimensional specialization and column-major matrices.

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;
mod utilities;
