use std::fs::{
    File,
    OpenOptions
};
use std::path::Path;

use thiserror::Error;

pub const BATCH_OUTPUT_FILE: &str = "result.txt";
pub const INTERACTIVE_OUTPUT_FILE: &str = "results.txt";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Truncate,
    Append,
}

pub fn open_output<P: AsRef<Path>>(path: P, mode: OutputMode) -> Result<File, ReportError> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    match mode {
        OutputMode::Truncate => options.write(true).create(true).truncate(true),
        OutputMode::Append => options.append(true).create(true),
    };
    options.open(path).map_err(|source| ReportError::FileOpen {
        path: path.display().to_string(),
        source,
    })
}
