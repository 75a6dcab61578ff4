//! # Three dimensional vector
//!
//! A `Dense` vector that always has exactly three components, which can also be addressed as the
//! coordinates `x`, `y` and `z`.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Deref, Index, IndexMut, Mul, Neg, Sub};

use crate::data::linear_algebra::error::{LinearAlgebraError, Result};
use crate::data::linear_algebra::traits::VectorLike;
use crate::data::linear_algebra::vector::dense::Dense;

/// Vector in three dimensional space.
///
/// The read-only operations of `Dense` are available through `Deref`. Mutable access is per
/// component only, so the vector always has exactly three components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector3D {
    inner: Dense,
}

impl Vector3D {
    /// Create a vector from its three coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { inner: Dense::new(vec![x, y, z]) }
    }

    /// The x coordinate.
    pub fn x(&self) -> f64 {
        self.inner[0]
    }

    /// The y coordinate.
    pub fn y(&self) -> f64 {
        self.inner[1]
    }

    /// The z coordinate.
    pub fn z(&self) -> f64 {
        self.inner[2]
    }

    /// Change the x coordinate.
    pub fn set_x(&mut self, value: f64) {
        self.inner[0] = value;
    }

    /// Change the y coordinate.
    pub fn set_y(&mut self, value: f64) {
        self.inner[1] = value;
    }

    /// Change the z coordinate.
    pub fn set_z(&mut self, value: f64) {
        self.inner[2] = value;
    }

    /// Set the value at index `i` to `value`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i >= 3`, in which case the vector is unchanged.
    pub fn set(&mut self, i: usize, value: f64) -> Result<()> {
        self.inner.set(i, value)
    }

    /// Mutable access to the x coordinate.
    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.inner[0]
    }

    /// Mutable access to the y coordinate.
    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.inner[1]
    }

    /// Mutable access to the z coordinate.
    pub fn z_mut(&mut self) -> &mut f64 {
        &mut self.inner[2]
    }

    /// The underlying general vector.
    pub fn as_vector(&self) -> &Dense {
        &self.inner
    }

    fn from_dense(inner: Dense) -> Self {
        debug_assert_eq!(inner.len(), 3);

        Self { inner }
    }
}

impl Default for Vector3D {
    fn default() -> Self {
        Self::new(0f64, 0f64, 0f64)
    }
}

impl Deref for Vector3D {
    type Target = Dense;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<Dense> for Vector3D {
    fn as_ref(&self) -> &Dense {
        &self.inner
    }
}

impl VectorLike for Vector3D {
    fn len(&self) -> usize {
        3
    }

    fn component(&self, index: usize) -> f64 {
        self.inner[index]
    }
}

impl Index<usize> for Vector3D {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl IndexMut<usize> for Vector3D {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3D> for Dense {
    fn from(vector: Vector3D) -> Self {
        vector.inner
    }
}

impl TryFrom<Dense> for Vector3D {
    type Error = LinearAlgebraError;

    fn try_from(vector: Dense) -> Result<Self> {
        if vector.len() == 3 {
            Ok(Self::from_dense(vector))
        } else {
            Err(LinearAlgebraError::dimension_mismatch("conversion to Vector3D", 3, vector.len()))
        }
    }
}

impl PartialEq<Dense> for Vector3D {
    fn eq(&self, other: &Dense) -> bool {
        &self.inner == other
    }
}

impl PartialEq<Vector3D> for Dense {
    fn eq(&self, other: &Vector3D) -> bool {
        self == &other.inner
    }
}

// Both operands have three components, so these can't fail.
impl Add for &Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: &Vector3D) -> Self::Output {
        Vector3D::from_dense(&self.inner + &rhs.inner)
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, rhs: Vector3D) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: &Vector3D) -> Self::Output {
        Vector3D::from_dense(&self.inner - &rhs.inner)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, rhs: Vector3D) -> Self::Output {
        &self - &rhs
    }
}

impl Neg for &Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Self::Output {
        Vector3D::from_dense(-&self.inner)
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Mul<f64> for &Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector3D::from_dense(&self.inner * rhs)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, rhs: f64) -> Self::Output {
        &self * rhs
    }
}

impl Display for Vector3D {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
