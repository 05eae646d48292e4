//! # tck-syntax
//!
//! Parser, declaration store and semantic validation for timed-automata
//! system declarations (`.tck` files).
//!
//! ```text
//! system:S{}
//! event:a
//! process:P
//! location:P:l0{initial: : invariant:x<=5}
//! edge:P:l0:l0:a{provided:x>=1}
//! sync:P@a:Q@a?
//! ```
//!
//! Parsing continues past errors to report as many diagnostics as possible,
//! but a model is only returned when no error was reported.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → .tck file loading
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, diagnostics
//!   ↓
//! semantic  → Validators, declaration store, declaration model
//!   ↓
//! base      → Primitives (Span/Position, LineIndex, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → semantic → parser → project)
// ============================================================================

/// Foundation types: Span, Position, LineIndex, TextRange
pub mod base;

/// Declaration model, store and validators
pub mod semantic;

/// Parser: Logos lexer, recursive-descent parser, diagnostics
pub mod parser;

/// File loading
pub mod project;

// Re-export commonly needed items
pub use base::{LineIndex, Position, Span, TextRange, TextSize};
pub use parser::{Diagnostic, ErrorCode, Parse, ParseOptions, parse_system, parse_system_with};
pub use project::{LoadError, load_system};
pub use semantic::{DeclarationStore, SystemDeclaration};
