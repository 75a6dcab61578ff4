//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures used to represent dense linear algebra values.

pub mod linear_algebra;
