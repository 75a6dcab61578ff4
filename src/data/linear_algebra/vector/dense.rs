//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size and supports the usual vector arithmetic.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::slice::Iter;

use itertools::Itertools;
use num_traits::ToPrimitive;

use crate::data::linear_algebra::error::{LinearAlgebraError, Result};
use crate::data::linear_algebra::traits::VectorLike;
use crate::data::linear_algebra::utilities::{check_len, format_scientific, DEFAULT_PRECISION};

/// Uses a `Vec<f64>` as underlying data structure. Length is fixed at creation.
///
/// Equality compares the length and every component. `Eq` and `Hash` are implemented so that
/// vectors can be used as keys, but a vector containing NaN is not equal to itself: it can be
/// inserted in a `HashSet` or `HashMap`, but never found again.
#[derive(Debug, Clone, Default)]
pub struct Dense {
    data: Vec<f64>,
}

impl Dense {
    /// Create a new vector from its components.
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Create a vector of zeros.
    ///
    /// # Arguments
    ///
    /// * `len`: Length of the vector, number of elements.
    pub fn zeros(len: usize) -> Self {
        Self { data: vec![0f64; len] }
    }

    /// Number of components in the vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no components.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Retrieve the value at an index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i >= self.len()`.
    pub fn get(&self, i: usize) -> Result<f64> {
        self.data.get(i)
            .copied()
            .ok_or_else(|| LinearAlgebraError::index_out_of_range(i, self.len()))
    }

    /// Set the value at index `i` to `value`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i >= self.len()`, in which case the vector is unchanged.
    pub fn set(&mut self, i: usize, value: f64) -> Result<()> {
        let len = self.len();
        match self.data.get_mut(i) {
            Some(component) => {
                *component = value;
                Ok(())
            }
            None => Err(LinearAlgebraError::index_out_of_range(i, len)),
        }
    }

    /// Iterate over the components of this vector.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    /// View the components as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Take the components out of the vector.
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }

    /// Euclidean inner product with any vector-like value of the same length.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the lengths differ.
    pub fn dot<V: VectorLike + ?Sized>(&self, rhs: &V) -> Result<f64> {
        check_len("inner product", self.len(), rhs.len())?;

        Ok(self.data.iter()
            .enumerate()
            .map(|(i, value)| value * rhs.component(i))
            .sum())
    }

    /// Sum of the squares of all components.
    pub fn norm_squared(&self) -> f64 {
        self.data.iter().map(|value| value * value).sum()
    }

    /// Euclidean length of this vector.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Euclidean distance between this vector and `rhs`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the lengths differ.
    pub fn distance_from(&self, rhs: &Dense) -> Result<f64> {
        check_len("distance", self.len(), rhs.len())?;

        Ok(self.data.iter()
            .zip_eq(&rhs.data)
            .map(|(left, right)| (left - right) * (left - right))
            .sum::<f64>()
            .sqrt())
    }

    /// Elementwise sum, as a new vector.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the lengths differ.
    pub fn checked_add(&self, rhs: &Dense) -> Result<Dense> {
        self.zip_with("addition", rhs, |left, right| left + right)
    }

    /// Elementwise difference, as a new vector.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the lengths differ.
    pub fn checked_sub(&self, rhs: &Dense) -> Result<Dense> {
        self.zip_with("subtraction", rhs, |left, right| left - right)
    }

    /// Add `rhs` to this vector in place.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the lengths differ, in which case the vector is unchanged.
    pub fn checked_add_assign(&mut self, rhs: &Dense) -> Result<()> {
        check_len("addition", self.len(), rhs.len())?;

        for (value, other) in self.data.iter_mut().zip_eq(&rhs.data) {
            *value += other;
        }
        Ok(())
    }

    /// Subtract `rhs` from this vector in place.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the lengths differ, in which case the vector is unchanged.
    pub fn checked_sub_assign(&mut self, rhs: &Dense) -> Result<()> {
        check_len("subtraction", self.len(), rhs.len())?;

        for (value, other) in self.data.iter_mut().zip_eq(&rhs.data) {
            *value -= other;
        }
        Ok(())
    }

    /// Multiply every component by a number.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if the scalar can't be represented as an `f64`.
    pub fn scale<T: ToPrimitive>(&self, scalar: T) -> Result<Dense> {
        match scalar.to_f64() {
            Some(factor) => Ok(self * factor),
            None => {
                log::debug!("scalar multiplication with a value that is not a real number");
                Err(LinearAlgebraError::TypeMismatch(
                    "vector can only be multiplied by a number".to_string(),
                ))
            }
        }
    }

    fn zip_with(
        &self,
        operation: &'static str,
        rhs: &Dense,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Dense> {
        check_len(operation, self.len(), rhs.len())?;

        Ok(self.data.iter()
            .zip_eq(&rhs.data)
            .map(|(&left, &right)| f(left, right))
            .collect())
    }
}

impl VectorLike for Dense {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn component(&self, index: usize) -> f64 {
        self[index]
    }
}

impl From<Vec<f64>> for Dense {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl From<&[f64]> for Dense {
    fn from(data: &[f64]) -> Self {
        Self::new(data.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Dense {
    fn from(data: [f64; N]) -> Self {
        Self::new(data.to_vec())
    }
}

impl FromIterator<f64> for Dense {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Dense {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dense {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Dense {
    type Output = f64;

    /// # Panics
    ///
    /// If `index` is out of range.
    fn index(&self, index: usize) -> &Self::Output {
        match self.data.get(index) {
            Some(value) => value,
            None => panic!("{}", LinearAlgebraError::index_out_of_range(index, self.len())),
        }
    }
}

impl IndexMut<usize> for Dense {
    /// # Panics
    ///
    /// If `index` is out of range.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len();
        match self.data.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", LinearAlgebraError::index_out_of_range(index, len)),
        }
    }
}

impl PartialEq for Dense {
    /// Vectors of different lengths are unequal, they are not an error.
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

// Only vectors containing NaN break reflexivity.
impl Eq for Dense {}

impl Hash for Dense {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.len().hash(state);
        for value in &self.data {
            // 0 and -0 are equal, so they need to hash the same
            let normalized = if *value == 0f64 { 0f64 } else { *value };
            normalized.to_bits().hash(state);
        }
    }
}

impl Neg for &Dense {
    type Output = Dense;

    fn neg(self) -> Self::Output {
        self.data.iter().map(|value| -value).collect()
    }
}

impl Neg for Dense {
    type Output = Dense;

    fn neg(self) -> Self::Output {
        -&self
    }
}

macro_rules! impl_fallible_operator {
    ($trait_name:ident, $method:ident, $checked:ident) => {
        impl $trait_name<&Dense> for &Dense {
            type Output = Dense;

            /// # Panics
            ///
            /// If the lengths of the operands differ.
            fn $method(self, rhs: &Dense) -> Self::Output {
                match self.$checked(rhs) {
                    Ok(result) => result,
                    Err(error) => panic!("{}", error),
                }
            }
        }

        impl $trait_name<Dense> for Dense {
            type Output = Dense;

            fn $method(self, rhs: Dense) -> Self::Output {
                $trait_name::$method(&self, &rhs)
            }
        }

        impl $trait_name<&Dense> for Dense {
            type Output = Dense;

            fn $method(self, rhs: &Dense) -> Self::Output {
                $trait_name::$method(&self, rhs)
            }
        }
    }
}

impl_fallible_operator!(Add, add, checked_add);
impl_fallible_operator!(Sub, sub, checked_sub);

macro_rules! impl_fallible_assign {
    ($trait_name:ident, $method:ident, $checked:ident) => {
        impl $trait_name<&Dense> for Dense {
            /// # Panics
            ///
            /// If the lengths of the operands differ.
            fn $method(&mut self, rhs: &Dense) {
                if let Err(error) = self.$checked(rhs) {
                    panic!("{}", error);
                }
            }
        }

        impl $trait_name<Dense> for Dense {
            fn $method(&mut self, rhs: Dense) {
                $trait_name::$method(self, &rhs);
            }
        }
    }
}

impl_fallible_assign!(AddAssign, add_assign, checked_add_assign);
impl_fallible_assign!(SubAssign, sub_assign, checked_sub_assign);

impl Mul<f64> for &Dense {
    type Output = Dense;

    fn mul(self, rhs: f64) -> Self::Output {
        self.data.iter().map(|value| value * rhs).collect()
    }
}

impl Mul<f64> for Dense {
    type Output = Dense;

    fn mul(self, rhs: f64) -> Self::Output {
        &self * rhs
    }
}

impl Mul<&Dense> for f64 {
    type Output = Dense;

    fn mul(self, rhs: &Dense) -> Self::Output {
        rhs * self
    }
}

impl Mul<Dense> for f64 {
    type Output = Dense;

    fn mul(self, rhs: Dense) -> Self::Output {
        &rhs * self
    }
}

impl MulAssign<f64> for Dense {
    fn mul_assign(&mut self, rhs: f64) {
        for value in &mut self.data {
            *value *= rhs;
        }
    }
}

impl Display for Dense {
    /// Components separated by `", "` in scientific notation.
    ///
    /// The number of fractional digits defaults to three and follows the formatter's precision if
    /// one is given.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{}", self.data.iter().map(|&value| format_scientific(value, precision)).join(", "))
    }
}
