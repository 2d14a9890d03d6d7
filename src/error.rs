// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while reading columns from a CSV file.
///
/// The `Display` messages are what the user sees on stderr, so they carry
/// enough detail to act on (the offending path, the valid column names).
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: file is empty, no header row", .0.display())]
    Empty(PathBuf),

    #[error("column '{column}' not found; available columns: {}", .available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("malformed CSV: {0}")]
    Malformed(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ReadError>;
