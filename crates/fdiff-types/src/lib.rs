//! Foundation types for fdiff.
//!
//! Every other fdiff crate depends on `fdiff-types`. The types here are plain
//! immutable values; none of them perform I/O.
//!
//! # Key Types
//!
//! - [`Position`] — First differing index within two lines, or "identical"
//! - [`Divergence`] — First differing (line, column) within two documents
//! - [`Document`] — Ordered sequence of terminator-free lines

pub mod document;
pub mod error;
pub mod line;
pub mod position;

pub use document::Document;
pub use error::TypeError;
pub use line::{char_len, has_terminator};
pub use position::{Divergence, Position};
