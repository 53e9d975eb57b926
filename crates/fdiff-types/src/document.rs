use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::line::has_terminator;

/// An ordered sequence of lines, top to bottom.
///
/// Lines are expected to be free of `\n` and `\r`. [`Document::from_text`]
/// guarantees this for line feeds; [`Document::try_new`] checks it for
/// arbitrary input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Wrap already-split lines without checking them.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Wrap already-split lines, rejecting any line that carries a terminator.
    pub fn try_new(lines: Vec<String>) -> Result<Self, TypeError> {
        if let Some(index) = lines.iter().position(|l| has_terminator(l)) {
            return Err(TypeError::EmbeddedTerminator { index });
        }
        Ok(Self { lines })
    }

    /// Split text into lines.
    ///
    /// Each line loses its trailing `\n` (or `\r\n`). A final line without a
    /// terminator is kept; a trailing terminator does not produce an extra
    /// empty line. Carriage returns anywhere else are left in place.
    pub fn from_text(text: &str) -> Self {
        text.lines().collect()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The line at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// The line at `index`, or `""` past the end of the document.
    pub fn line_or_empty(&self, index: usize) -> &str {
        self.get(index).unwrap_or("")
    }
}

impl<S: Into<String>> FromIterator<S> for Document {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}
