use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a monitoring run.
#[derive(Debug, Error)]
pub enum DustError {
    #[error("{} not found. Please place the file in the working directory.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("CSV must contain 'Time', 'PM10', and 'PM2.5' columns (missing: {})", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("row {row}: {column} value '{value}' is not a number")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("rendering chart: {0}")]
    Render(String),

    #[error("writing summary: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DustError {
    /// Process exit code for an aborted run.
    pub fn exit_code(&self) -> u8 {
        match self {
            DustError::FileNotFound { .. } => 2,
            DustError::Schema { .. } => 3,
            DustError::Parse { .. } => 4,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DustError>;
