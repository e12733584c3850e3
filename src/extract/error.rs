use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not load table from '{path}': {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("Could not parse '{raw}' in column '{column}' at row {row} as a date")]
    Parse {
        column: String,
        row: usize,
        raw: String,
    },
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound { column: String, table: String },
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
