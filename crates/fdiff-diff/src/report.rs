//! Serializable summaries of line and document comparisons.

use fdiff_types::{Divergence, Document, Position};
use serde::{Deserialize, Serialize};

use crate::document_diff::{compare_lines, format_divergence, NO_DIFFERENCES};
use crate::line_diff::{compare_line, format_line_diff};

/// Machine-readable result of comparing two documents.
///
/// `line`, `column`, `left` and `right` are all `None` for identical
/// documents and all `Some` otherwise. `left` / `right` hold the line at the
/// divergence, with `""` standing in for a document that ended early.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    pub identical: bool,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub left: Option<String>,
    pub right: Option<String>,
    /// Same text as [`format_file_diff`](crate::format_file_diff).
    pub rendered: String,
}

impl DiffReport {
    /// Compare two documents and summarize the first difference.
    pub fn from_documents(doc1: &Document, doc2: &Document) -> Self {
        let divergence = compare_lines(doc1, doc2);
        let rendered = format_divergence(doc1, doc2, divergence);
        match divergence {
            Divergence::Identical => Self {
                identical: true,
                line: None,
                column: None,
                left: None,
                right: None,
                rendered,
            },
            Divergence::At { line, column } => Self {
                identical: false,
                line: Some(line),
                column: Some(column),
                left: Some(doc1.line_or_empty(line).to_owned()),
                right: Some(doc2.line_or_empty(line).to_owned()),
                rendered,
            },
        }
    }
}

/// Machine-readable result of comparing two single lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineReport {
    pub identical: bool,
    pub column: Option<usize>,
    /// `"No differences\n"`, or the [`format_line_diff`] report.
    pub rendered: String,
}

impl LineReport {
    /// Compare two lines and summarize the first difference.
    pub fn from_lines(line1: &str, line2: &str) -> Self {
        let position = compare_line(line1, line2);
        let rendered = match position {
            Position::Identical => NO_DIFFERENCES.to_string(),
            Position::DifferAt(idx) => format_line_diff(line1, line2, idx),
        };
        Self {
            identical: position.is_identical(),
            column: position.index(),
            rendered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        lines.iter().copied().collect()
    }

    #[test]
    fn identical_report() {
        let d = doc(&["x"]);
        let report = DiffReport::from_documents(&d, &d);
        assert!(report.identical);
        assert_eq!(report.line, None);
        assert_eq!(report.left, None);
        assert_eq!(report.rendered, "No differences\n");
    }

    #[test]
    fn divergent_report() {
        let report = DiffReport::from_documents(&doc(&["acc", "ab", "a"]), &doc(&["acc", "ac"]));
        assert!(!report.identical);
        assert_eq!(report.line, Some(1));
        assert_eq!(report.column, Some(1));
        assert_eq!(report.left.as_deref(), Some("ab"));
        assert_eq!(report.right.as_deref(), Some("ac"));
        assert_eq!(report.rendered, "Line 1:\nab\n=^\nac\n");
    }

    #[test]
    fn missing_line_reported_as_empty() {
        let report = DiffReport::from_documents(&doc(&["a"]), &doc(&["a", "b"]));
        assert_eq!(report.line, Some(1));
        assert_eq!(report.left.as_deref(), Some(""));
        assert_eq!(report.right.as_deref(), Some("b"));
    }

    #[test]
    fn rendered_matches_format_file_diff() {
        let cases = [
            (doc(&["acc", "ab", "a"]), doc(&["acc", "ac"])),
            (doc(&["a", "b"]), doc(&["a"])),
            (doc(&["same"]), doc(&["same"])),
            (doc(&["a\rb"]), doc(&["a\rc"])),
        ];
        for (d1, d2) in &cases {
            let report = DiffReport::from_documents(d1, d2);
            assert_eq!(report.rendered, crate::format_file_diff(d1, d2));
        }
    }

    #[test]
    fn identical_line_report() {
        let report = LineReport::from_lines("abc", "abc");
        assert!(report.identical);
        assert_eq!(report.column, None);
        assert_eq!(report.rendered, "No differences\n");
    }

    #[test]
    fn divergent_line_report() {
        let report = LineReport::from_lines("abd", "abc");
        assert!(!report.identical);
        assert_eq!(report.column, Some(2));
        assert_eq!(report.rendered, "abd\n==^\nabc\n");
    }

    #[test]
    fn line_report_serializes_to_json() {
        let report = LineReport::from_lines("b", "");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["identical"], false);
        assert_eq!(value["column"], 0);
        assert_eq!(value["rendered"], "b\n^\n\n");
    }

    #[test]
    fn serializes_to_json() {
        let report = DiffReport::from_documents(&doc(&["a"]), &doc(&["b"]));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["identical"], false);
        assert_eq!(value["line"], 0);
        assert_eq!(value["column"], 0);
        assert_eq!(value["rendered"], "Line 0:\na\n^\nb\n");
    }
}
