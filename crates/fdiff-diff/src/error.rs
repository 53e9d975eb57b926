//! Error types for the diff crate.

use std::path::PathBuf;

/// Errors that can occur during diff operations.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A source file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file is not valid UTF-8 text.
    #[error("{path:?} is not valid UTF-8 text")]
    InvalidUtf8 { path: PathBuf },

    /// The differing line could not be rendered because one side carries a
    /// line terminator.
    #[error("cannot render line {line}: it contains an embedded line terminator")]
    Unrenderable { line: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
