//! Parser for the system declaration format
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Parser → Production per declaration, syntax errors recovered per line
//!     ↓
//! Validator → DeclarationStore inside a SystemDeclaration
//! ```
//!
//! The parser keeps one token of lookahead and can be driven by any iterator
//! of [`Token`]s, not only the bundled [`Lexer`].

#[allow(clippy::module_inception)]
mod parser;

pub mod errors;
mod lexer;
mod options;
mod production;
mod token_kind;

pub use errors::{
    Diagnostic, DiagnosticBuilder, ErrorCode, ErrorKind, ErrorReporter, ParseContext,
    RelatedInfo, Severity,
};
pub use lexer::{Lexer, Token, tokenize};
pub use options::{IntBoundsCheck, ParseOptions};
pub use parser::{Parse, Parser, parse_system, parse_system_with};
pub use production::{Lexeme, Number, Production};
pub use token_kind::TokenKind;

/// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
