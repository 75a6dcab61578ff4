//! # Error reporting for reading vectors and matrices from text
//!
//! A parse error may wrap another one to describe where in a larger text the problem occurred, for
//! example the row of a matrix in which a component couldn't be read.
use std::num::ParseFloatError;

use thiserror::Error;

/// Problems encountered while reading the textual rendering of a vector or matrix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A component is not a real number.
    #[error("could not parse component {position} (\"{text}\") as a real number")]
    Component {
        /// Position of the component within its vector, starting at `0`.
        position: usize,
        /// The offending text, trimmed.
        text: String,
        /// Why the text was rejected.
        #[source]
        source: ParseFloatError,
    },
    /// A row of a matrix has a different length than the first row.
    #[error("row {row} has {found} components, but the first row has {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A row of a matrix could not be read.
    #[error("could not parse row {row}")]
    Row {
        /// Index of the offending row.
        row: usize,
        /// The problem within that row.
        #[source]
        source: Box<ParseError>,
    },
}

/// Result of reading a value from text.
pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// Wrap an error that occurred while reading row `row` of a matrix.
    pub(crate) fn in_row(self, row: usize) -> ParseError {
        ParseError::Row { row, source: Box::new(self) }
    }
}
