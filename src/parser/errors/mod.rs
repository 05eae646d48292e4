//! Parser error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - Context-aware syntax error messages
//! - The per-session [`ErrorReporter`] that counts errors

mod codes;
mod context;
mod error;
mod reporter;

pub use codes::{ErrorCode, ErrorKind};
pub use context::ParseContext;
pub use error::{Diagnostic, DiagnosticBuilder, RelatedInfo, Severity};
pub use reporter::ErrorReporter;
