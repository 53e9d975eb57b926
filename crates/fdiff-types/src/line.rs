//! Helpers for single-line strings.

/// Returns `true` if `line` contains a line feed or carriage return.
pub fn has_terminator(line: &str) -> bool {
    line.contains(['\n', '\r'])
}

/// Number of characters (Unicode scalar values) in `line`.
///
/// Columns throughout fdiff count characters, not bytes.
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}
