//! File-backed entry points.

use std::fs;
use std::path::Path;

use fdiff_types::Document;
use tracing::debug;

use crate::document_diff::format_file_diff;
use crate::error::{DiffError, DiffResult};

/// Read a text file into a [`Document`].
///
/// Splitting follows [`Document::from_text`]: trailing `\n` / `\r\n`
/// terminators are stripped, other carriage returns are kept.
pub fn read_document(path: impl AsRef<Path>) -> DiffResult<Document> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DiffError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| DiffError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    let doc = Document::from_text(&text);
    debug!(path = %path.display(), lines = doc.len(), "read document");
    Ok(doc)
}

/// Read two files and render the first difference between them.
///
/// Returns `"No differences\n"` for files with identical lines.
pub fn format_file_diff_from_paths(
    path1: impl AsRef<Path>,
    path2: impl AsRef<Path>,
) -> DiffResult<String> {
    let doc1 = read_document(path1)?;
    let doc2 = read_document(path2)?;
    Ok(format_file_diff(&doc1, &doc2))
}
