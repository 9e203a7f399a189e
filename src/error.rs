use thiserror::Error;

use crate::report::outputfile::ReportError;
use crate::scan::scanconfig::ScanConfigError;

/// Errors that end a run. Per-sample domain errors never reach this level.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInterval(#[from] ScanConfigError),
    #[error("invalid number '{input}' for {name}")]
    InvalidInput { name: String, input: String },
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(String),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to read scan file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scan file: {0}")]
    Config(#[from] serde_json::Error),
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}
