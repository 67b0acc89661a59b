// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InjectError {
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Failed to append to '{path}': {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove '{path}': {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Invalid thresholds: mismatch={mismatch}, missing={missing} (need 0 <= mismatch <= missing <= 1)")]
    InvalidThresholds { mismatch: f64, missing: f64 },

    #[error("Suffix length must be at least 1")]
    EmptySuffix,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InjectError>;
