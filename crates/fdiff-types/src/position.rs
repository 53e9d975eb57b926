use std::fmt;

use serde::{Deserialize, Serialize};

/// Where two lines first differ.
///
/// `Identical` takes the place of a reserved "no difference" index, so every
/// `DifferAt` value is a real 0-based character column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    /// The two lines are equal.
    Identical,
    /// The lines first differ at this character index.
    DifferAt(usize),
}

impl Position {
    /// Returns `true` if no difference was found.
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical)
    }

    /// The differing index, or `None` for identical input.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Identical => None,
            Self::DifferAt(idx) => Some(*idx),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identical => write!(f, "identical"),
            Self::DifferAt(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<Option<usize>> for Position {
    fn from(idx: Option<usize>) -> Self {
        idx.map_or(Self::Identical, Self::DifferAt)
    }
}

/// Where two documents first differ.
///
/// Either both the line and the column are known, or the documents are
/// identical; a half-identical pair cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Divergence {
    /// The documents have the same lines in the same order.
    Identical,
    /// First differing line (0-based) and the first differing column within it.
    At { line: usize, column: usize },
}

impl Divergence {
    /// Returns `true` if the documents are identical.
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical)
    }

    /// Line component as a [`Position`].
    pub fn line(&self) -> Position {
        match self {
            Self::Identical => Position::Identical,
            Self::At { line, .. } => Position::DifferAt(*line),
        }
    }

    /// Column component as a [`Position`].
    pub fn column(&self) -> Position {
        match self {
            Self::Identical => Position::Identical,
            Self::At { column, .. } => Position::DifferAt(*column),
        }
    }

    /// The `(line, column)` pair.
    pub fn as_pair(&self) -> (Position, Position) {
        (self.line(), self.column())
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identical => write!(f, "identical"),
            Self::At { line, column } => write!(f, "line {line}, column {column}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn position_accessors() {
        assert!(Position::Identical.is_identical());
        assert_eq!(Position::Identical.index(), None);
        assert!(!Position::DifferAt(0).is_identical());
        assert_eq!(Position::DifferAt(7).index(), Some(7));
    }

    #[test]
    fn position_display() {
        assert_eq!(Position::Identical.to_string(), "identical");
        assert_eq!(Position::DifferAt(3).to_string(), "3");
    }

    #[test]
    fn identical_sorts_before_every_index() {
        assert!(Position::Identical < Position::DifferAt(0));
        assert!(Position::DifferAt(1) < Position::DifferAt(2));
    }

    #[test]
    fn divergence_components_are_never_mixed() {
        let d = Divergence::Identical;
        assert_eq!(d.as_pair(), (Position::Identical, Position::Identical));

        let d = Divergence::At { line: 4, column: 0 };
        assert_eq!(d.as_pair(), (Position::DifferAt(4), Position::DifferAt(0)));
    }

    #[test]
    fn divergence_display() {
        assert_eq!(Divergence::Identical.to_string(), "identical");
        assert_eq!(
            Divergence::At { line: 1, column: 2 }.to_string(),
            "line 1, column 2"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let d = Divergence::At { line: 2, column: 5 };
        let json = serde_json::to_string(&d).unwrap();
        let back: Divergence = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }

    proptest! {
        #[test]
        fn option_conversion_preserves_index(idx in proptest::option::of(0usize..10_000)) {
            prop_assert_eq!(Position::from(idx).index(), idx);
        }
    }
}
