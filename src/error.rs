use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reviewing a project.
///
/// Per-file variants never abort a review run: the engine records them next to
/// the file and every rule that needs the file logs and skips it.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unknown output format '{0}' (expected json, text or markdown)")]
    UnknownFormat(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
