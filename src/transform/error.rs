use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound { column: String, table: String },
    #[error("Value '{raw}' in column '{column}' at row {row} is not a {expected}")]
    TypeMismatch {
        column: String,
        row: usize,
        raw: String,
        expected: &'static str,
    },
    #[error("Column '{column}' holds {found} values, expected {expected}")]
    ColumnTypeMismatch {
        column: String,
        found: String,
        expected: &'static str,
    },
    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },
    #[error("Series needs as many x as y values, got {x} and {y}")]
    LengthMismatch { x: usize, y: usize },
    #[error("Can not derive scalar: {0}")]
    Arithmetic(String),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
