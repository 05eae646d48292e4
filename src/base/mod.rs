//! Foundation types shared by the scanner, parser and declaration store.
//!
//! - [`Position`], [`Span`] - Line/column positions for declarations and diagnostics
//! - [`LineIndex`] - Byte offset to line/column conversion
//!
//! This module has NO dependencies on other crate modules.

mod line_index;
mod position;

pub use line_index::LineIndex;
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
