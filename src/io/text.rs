//! Parsing of the text rendering produced by `Display`.
//!
//! A vector is a list of components separated by `,`. A matrix is a list of such vectors, one per
//! line, all of the same length.
use std::str::FromStr;

use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::vector::Vector;
use crate::io::error::{ParseError, ParseResult};

impl FromStr for Vector {
    type Err = ParseError;

    /// Read a vector. The empty string is the vector without components.
    fn from_str(text: &str) -> ParseResult<Self> {
        if text.trim().is_empty() {
            return Ok(Vector::new(Vec::new()));
        }

        text.split(',')
            .map(str::trim)
            .enumerate()
            .map(|(position, component)| component.parse::<f64>()
                .map_err(|source| ParseError::Component {
                    position,
                    text: component.to_string(),
                    source,
                }))
            .collect()
    }
}

impl FromStr for Matrix {
    type Err = ParseError;

    /// Read a matrix, one row per line.
    ///
    /// The empty string is the `0 x 0` matrix. As a matrix with a single row but without columns is
    /// rendered as the empty string as well, that shape is not reproduced.
    fn from_str(text: &str) -> ParseResult<Self> {
        if text.is_empty() {
            return Ok(Matrix::new(0, 0));
        }

        let rows = text.split('\n')
            .enumerate()
            .map(|(i, line)| line.parse::<Vector>().map_err(|error| error.in_row(i)))
            .collect::<ParseResult<Vec<_>>>()?;

        let nr_rows = rows.len();
        let nr_columns = rows.first().map_or(0, Vector::len);
        if let Some((row, vector)) = rows.iter().enumerate().find(|(_, row)| row.len() != nr_columns) {
            log::debug!("ragged matrix text: row {} has length {} instead of {}", row, vector.len(), nr_columns);
            return Err(ParseError::RaggedRows { row, expected: nr_columns, found: vector.len() });
        }

        let mut matrix = Matrix::new(nr_rows, nr_columns);
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                matrix[(i, j)] = value;
            }
        }

        Ok(matrix)
    }
}
