use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigitPlotError {
    #[error("Cannot find 'digits' in benchmark name: {0}")]
    MalformedName(String),

    #[error("Invalid digit count '{token}' in benchmark name: {name}")]
    InvalidCount { name: String, token: String },

    #[error("Invalid digit range {min}..={max} in benchmark name: {name}")]
    InvalidRange { name: String, min: u32, max: u32 },

    #[error("Results directory not found: {}", .0.display())]
    ResultsDirNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Estimate '{statistic}' missing from {}", path.display())]
    MissingEstimate { statistic: String, path: PathBuf },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Plot generation error: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, DigitPlotError>;
