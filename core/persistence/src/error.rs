//! FILENAME: core/persistence/src/error.rs

use thiserror::Error;

/// Fatal failure while loading the dataset. No partial dataset is ever returned.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column missing: {0}")]
    MissingColumn(String),

    #[error("Row {row}: missing value for column '{column}'")]
    MissingValue { row: usize, column: String },

    #[error("Row {row}: invalid number '{value}' in column '{column}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row}: unparseable visit_date '{value}'")]
    InvalidDate { row: usize, value: String },
}

/// Failure while exporting rows as CSV.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),
}
