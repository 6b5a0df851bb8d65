use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{parser} CSV error: {source}")]
    Csv {
        parser: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("{parser} workbook error: {message}")]
    Workbook {
        parser: &'static str,
        message: String,
    },

    #[error("{parser} file did not contain a header row")]
    MissingHeader { parser: &'static str },

    #[error("required column '{column}' is missing")]
    MissingColumn { column: &'static str },

    #[error("column '{column}' has type {found}, expected {expected}")]
    ColumnType {
        column: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("{parser} row {row} column '{column}': '{value}' is not an integer")]
    InvalidValue {
        parser: &'static str,
        column: &'static str,
        row: usize,
        value: String,
    },

    #[error("failed to build order frame: {0}")]
    Polars(#[from] PolarsError),
}
