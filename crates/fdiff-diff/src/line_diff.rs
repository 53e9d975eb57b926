//! Single-line diff: first differing column and its caret report.

use fdiff_types::{char_len, has_terminator, Position};

/// Character repeated in the marker line up to the differing column.
pub const MARKER_FILL: char = '=';

/// Character placed under the differing column.
pub const CARET: char = '^';

/// Find the first column at which `line1` and `line2` differ.
///
/// Returns [`Position::Identical`] for equal lines. When one line is a strict
/// prefix of the other, the result is the length of the shorter one, i.e. the
/// first character that only the longer line has.
pub fn compare_line(line1: &str, line2: &str) -> Position {
    if line1 == line2 {
        return Position::Identical;
    }

    let idx = line1
        .chars()
        .zip(line2.chars())
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| char_len(line1).min(char_len(line2)));
    Position::DifferAt(idx)
}

/// Render `line1`, a marker line, and `line2`, each followed by `\n`.
///
/// The marker is `idx` copies of [`MARKER_FILL`] followed by [`CARET`], so the
/// caret sits under column `idx`. Returns an empty string when `idx` lies past
/// the shorter line (one past its end is allowed) or when either line
/// contains `\n` or `\r`.
pub fn format_line_diff(line1: &str, line2: &str, idx: usize) -> String {
    if idx > char_len(line1).min(char_len(line2)) {
        return String::new();
    }
    if has_terminator(line1) || has_terminator(line2) {
        return String::new();
    }

    let mut out = String::with_capacity(line1.len() + line2.len() + idx + 4);
    out.push_str(line1);
    out.push('\n');
    out.extend(std::iter::repeat(MARKER_FILL).take(idx));
    out.push(CARET);
    out.push('\n');
    out.push_str(line2);
    out.push('\n');
    out
}
