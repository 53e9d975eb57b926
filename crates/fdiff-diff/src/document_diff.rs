//! Document-level diff: first differing line, then first differing column.

use fdiff_types::{Divergence, Document, Position};
use tracing::{debug, warn};

use crate::error::{DiffError, DiffResult};
use crate::line_diff::{compare_line, format_line_diff};

/// Report returned for identical documents.
pub const NO_DIFFERENCES: &str = "No differences\n";

/// Find the first line, and the first column within it, where two documents
/// differ.
///
/// When one document is a strict prefix of the other, the divergence is the
/// first line only the longer document has, at column 0.
pub fn compare_lines(doc1: &Document, doc2: &Document) -> Divergence {
    if doc1 == doc2 {
        return Divergence::Identical;
    }

    let lines1 = doc1.lines();
    let lines2 = doc2.lines();
    for (line, (l1, l2)) in lines1.iter().zip(lines2).enumerate() {
        if let Position::DifferAt(column) = compare_line(l1, l2) {
            return Divergence::At { line, column };
        }
    }

    Divergence::At {
        line: lines1.len().min(lines2.len()),
        column: 0,
    }
}

/// Render the first difference between two documents.
///
/// Identical documents produce [`NO_DIFFERENCES`]. Otherwise the result is a
/// `Line N:` header followed by the [`format_line_diff`] report for line `N`,
/// where a document that ends before line `N` contributes an empty line.
///
/// If the differing line cannot be rendered (a line carries an embedded
/// `\r` or `\n`), only the header is returned. Use [`try_format_file_diff`] to
/// get an error for that case instead.
pub fn format_file_diff(doc1: &Document, doc2: &Document) -> String {
    format_divergence(doc1, doc2, compare_lines(doc1, doc2))
}

/// Render an already computed [`Divergence`] between `doc1` and `doc2`.
///
/// `divergence` must come from [`compare_lines`] on the same documents.
pub fn format_divergence(doc1: &Document, doc2: &Document, divergence: Divergence) -> String {
    match render(doc1, doc2, divergence) {
        Ok(report) => report,
        Err(HeaderOnly { header, line }) => {
            warn!(line, "differing line contains a line terminator; report truncated to header");
            header
        }
    }
}

/// Like [`format_file_diff`], but fails with [`DiffError::Unrenderable`]
/// instead of truncating the report.
pub fn try_format_file_diff(doc1: &Document, doc2: &Document) -> DiffResult<String> {
    render(doc1, doc2, compare_lines(doc1, doc2))
        .map_err(|HeaderOnly { line, .. }| DiffError::Unrenderable { line })
}

/// A report whose body could not be rendered.
struct HeaderOnly {
    header: String,
    line: usize,
}

fn render(
    doc1: &Document,
    doc2: &Document,
    divergence: Divergence,
) -> Result<String, HeaderOnly> {
    let (line, column) = match divergence {
        Divergence::Identical => return Ok(NO_DIFFERENCES.to_string()),
        Divergence::At { line, column } => (line, column),
    };
    debug!(line, column, left_len = doc1.len(), right_len = doc2.len(), "documents diverge");

    let header = format!("Line {line}:\n");
    let body = format_line_diff(doc1.line_or_empty(line), doc2.line_or_empty(line), column);
    if body.is_empty() {
        return Err(HeaderOnly { header, line });
    }
    Ok(header + &body)
}
