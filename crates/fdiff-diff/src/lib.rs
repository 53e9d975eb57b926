//! Diff engine for fdiff.
//!
//! Finds the first point at which two lines, or two documents, stop agreeing
//! position by position, and renders a short caret report for it. There is
//! no alignment step: a single inserted line makes every later line differ,
//! and only the first one is reported.
//!
//! # Key Functions
//!
//! - [`compare_line`] / [`format_line_diff`] -- Single-line divergence and its three-line report
//! - [`compare_lines`] / [`format_file_diff`] -- Document divergence and its four-line report
//! - [`read_document`] / [`format_file_diff_from_paths`] -- File-backed entry points
//! - [`DiffReport`] / [`LineReport`] -- Serializable summaries of a comparison

pub mod document_diff;
pub mod error;
pub mod line_diff;
pub mod report;
pub mod source;

pub use document_diff::{
    compare_lines, format_divergence, format_file_diff, try_format_file_diff, NO_DIFFERENCES,
};
pub use error::{DiffError, DiffResult};
pub use line_diff::{compare_line, format_line_diff, CARET, MARKER_FILL};
pub use report::{DiffReport, LineReport};
pub use source::{format_file_diff_from_paths, read_document};
