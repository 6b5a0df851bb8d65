// crates/foodhub-core/src/error.rs

use foodhub_parser::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Order data failed schema validation: {0}")]
    Schema(#[from] SchemaError),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
