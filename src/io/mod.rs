//! # Reading vectors and matrices
//!
//! The `Display` implementations of `Vector` and `Matrix` produce a human-readable rendering. This
//! module reads such renderings back through `FromStr`. Values are reproduced up to the precision
//! they were rendered with.

pub mod error;
mod text;
