//! # Dense matrix
//!
//! A matrix stored as a sequence of column vectors. Rows are not stored; they are recomputed from
//! the columns whenever they are needed.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut, Mul};

use crate::data::linear_algebra::error::{LinearAlgebraError, Result};
use crate::data::linear_algebra::traits::VectorLike;
use crate::data::linear_algebra::utilities::check_len;
use crate::data::linear_algebra::vector::{Vector, Vector3D};

/// Uses a `Vec<Vector>` of columns as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    columns: Vec<Vector>,
    nr_rows: usize,
    nr_columns: usize,
}

/// Right-hand side of a matrix product, when its kind is only known at run time.
#[derive(Clone, Copy)]
pub enum Operand<'a> {
    /// Multiply with a matrix, giving a matrix.
    Matrix(&'a Matrix),
    /// Multiply with anything vector-like, giving a vector.
    Vector(&'a dyn VectorLike),
}

/// Result of a matrix product, matching the kind of `Operand` that was multiplied with.
#[derive(Clone, Debug, PartialEq)]
pub enum Product {
    /// Product with a matrix.
    Matrix(Matrix),
    /// Product with a vector-like value.
    Vector(Vector),
}

impl Matrix {
    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            columns: vec![Vector::zeros(nr_rows); nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut matrix = Self::new(len, len);
        for i in 0..len {
            matrix[(i, i)] = 1f64;
        }

        matrix
    }

    /// Create a matrix from its column vectors.
    ///
    /// The number of rows is the length of the columns, which needs to be equal for all columns.
    /// Without any columns, the matrix has no rows either.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if not all columns have the same length.
    pub fn from_columns(columns: Vec<Vector>) -> Result<Self> {
        let nr_rows = columns.first().map_or(0, Vector::len);
        for column in &columns {
            check_len("matrix construction", nr_rows, column.len())?;
        }
        let nr_columns = columns.len();

        Ok(Self { columns, nr_rows, nr_columns })
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the value at coordinate (`row`, `column`).
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if either index is out of range.
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        self.column(column)?.get(row)
    }

    /// Set the value at coordinate (`row`, `column`) to `value`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if either index is out of range.
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        let nr_columns = self.nr_columns;
        self.columns.get_mut(column)
            .ok_or_else(|| LinearAlgebraError::index_out_of_range(column, nr_columns))?
            .set(row, value)
    }

    /// Get column `j` of this matrix.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `j >= self.nr_columns()`.
    pub fn column(&self, j: usize) -> Result<&Vector> {
        self.columns.get(j)
            .ok_or_else(|| LinearAlgebraError::index_out_of_range(j, self.nr_columns))
    }

    /// Compute row `i` of this matrix as a new vector.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i >= self.nr_rows()`.
    pub fn row(&self, i: usize) -> Result<Vector> {
        if i < self.nr_rows {
            Ok(self.compute_row(i))
        } else {
            Err(LinearAlgebraError::index_out_of_range(i, self.nr_rows))
        }
    }

    /// Iterate over all rows, each computed from the columns when it is reached.
    ///
    /// Every call starts a new traversal.
    pub fn rows(&self) -> impl Iterator<Item = Vector> + '_ {
        (0..self.nr_rows).map(move |i| self.compute_row(i))
    }

    /// Iterate over all stored columns.
    pub fn columns(&self) -> impl Iterator<Item = &Vector> + '_ {
        self.columns.iter()
    }

    /// Multiply with a right-hand side whose kind is chosen at run time.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the number of columns of this matrix doesn't match the number of
    /// rows (or the length) of `rhs`.
    pub fn multiply(&self, rhs: Operand<'_>) -> Result<Product> {
        match rhs {
            Operand::Matrix(matrix) => self.multiply_matrix(matrix).map(Product::Matrix),
            Operand::Vector(vector) => self.multiply_vector(vector).map(Product::Vector),
        }
    }

    /// Matrix product `self * rhs`.
    ///
    /// Entry (`i`, `j`) of the result is the inner product of row `i` of `self` with column `j` of
    /// `rhs`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `self.nr_columns() != rhs.nr_rows()`.
    pub fn multiply_matrix(&self, rhs: &Matrix) -> Result<Matrix> {
        log::trace!(
            "multiplying {}x{} matrix with {}x{} matrix",
            self.nr_rows, self.nr_columns, rhs.nr_rows, rhs.nr_columns,
        );
        check_len("matrix product", self.nr_columns, rhs.nr_rows)?;

        let mut result = Matrix::new(self.nr_rows, rhs.nr_columns);
        for (i, row) in self.rows().enumerate() {
            for (j, column) in rhs.columns().enumerate() {
                result.columns[j][i] = row.dot(column)?;
            }
        }

        Ok(result)
    }

    /// Matrix-vector product `self * rhs`.
    ///
    /// Value `i` of the result is the inner product of row `i` of `self` with `rhs`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `self.nr_columns() != rhs.len()`.
    pub fn multiply_vector<V: VectorLike + ?Sized>(&self, rhs: &V) -> Result<Vector> {
        log::trace!("multiplying {}x{} matrix with vector of length {}", self.nr_rows, self.nr_columns, rhs.len());
        check_len("matrix-vector product", self.nr_columns, rhs.len())?;

        self.rows().map(|row| row.dot(rhs)).collect()
    }

    fn compute_row(&self, i: usize) -> Vector {
        debug_assert!(i < self.nr_rows);

        self.columns.iter().map(|column| column[i]).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    ///
    /// If the row or column is out of range.
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.columns.get(column) {
            Some(vector) => &vector[row],
            None => panic!("{}", LinearAlgebraError::index_out_of_range(column, self.nr_columns)),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    /// # Panics
    ///
    /// If the row or column is out of range.
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        let nr_columns = self.nr_columns;
        match self.columns.get_mut(column) {
            Some(vector) => &mut vector[row],
            None => panic!("{}", LinearAlgebraError::index_out_of_range(column, nr_columns)),
        }
    }
}

fn unwrap_product<T>(result: Result<T>) -> T {
    match result {
        Ok(product) => product,
        Err(error) => panic!("{}", error),
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// If the inner dimensions don't match.
    fn mul(self, rhs: &Matrix) -> Self::Output {
        unwrap_product(self.multiply_matrix(rhs))
    }
}

impl Mul<&Vector> for &Matrix {
    type Output = Vector;

    /// # Panics
    ///
    /// If the number of columns differs from the length of the vector.
    fn mul(self, rhs: &Vector) -> Self::Output {
        unwrap_product(self.multiply_vector(rhs))
    }
}

impl Mul<&Vector3D> for &Matrix {
    type Output = Vector;

    /// # Panics
    ///
    /// If the matrix doesn't have three columns.
    fn mul(self, rhs: &Vector3D) -> Self::Output {
        unwrap_product(self.multiply_vector(rhs))
    }
}

impl Mul<&[f64]> for &Matrix {
    type Output = Vector;

    /// # Panics
    ///
    /// If the number of columns differs from the length of the slice.
    fn mul(self, rhs: &[f64]) -> Self::Output {
        unwrap_product(self.multiply_vector(rhs))
    }
}

impl Display for Matrix {
    /// One line per row, each rendered as a vector.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            Display::fmt(&row, f)?;
        }

        Ok(())
    }
}
