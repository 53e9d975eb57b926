use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("line {index} contains an embedded line terminator")]
    EmbeddedTerminator { index: usize },
}
