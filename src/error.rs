//! Error types for field construction and pattern parsing

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FieldError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field dimensions must not be negative, got {rows}x{columns}")]
    NegativeDimension { rows: i64, columns: i64 },

    #[error("Field dimensions {rows}x{columns} exceed the addressable size")]
    TooLarge { rows: i64, columns: i64 },

    #[error("Invalid character '{found}' at line {line}, column {column}")]
    Parse {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("Row {row} has length {length}, expected {expected}")]
    Ragged {
        row: usize,
        length: usize,
        expected: usize,
    },
}
