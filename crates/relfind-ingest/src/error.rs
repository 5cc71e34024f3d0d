//! Error types for ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal ingestion failures; anything recoverable is reported as a `DataIssue`.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The search item list does not exist.
    #[error("search list not found: {path}")]
    SourceMissing { path: PathBuf },

    /// The search list holds no usable search items.
    #[error("search list has no search items: {path}")]
    SourceEmpty { path: PathBuf },

    /// No usable release table could be loaded.
    #[error("release table unavailable at {path}: {reason}")]
    TableUnavailable { path: PathBuf, reason: String },

    /// Reading a file failed.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn table(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::TableUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
