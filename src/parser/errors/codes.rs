//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Syntax errors (unexpected tokens)
//! - E03xx: Declaration errors (duplicates, namespace clashes, sizes)
//! - E04xx: Reference errors (undeclared process, location, event)
//! - E05xx: Numeric literal errors
//! - E06xx: Integer variable bound checks
//! - E09xx: Fatal errors

use std::fmt;

/// How an error affects the rest of the parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Token sequence does not match the grammar; recovered at end of line
    Syntax,
    /// Declaration rejected by validation; parsing continues
    Semantic,
    /// Parsing aborts
    Fatal,
}

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Character sequence the scanner could not classify
    E0101,

    // =========================================================================
    // E02xx: Syntax errors
    // =========================================================================
    /// Unexpected token
    E0201,
    /// Unexpected end of file
    E0202,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Name declared twice in the same namespace
    E0301,
    /// Name already declared as a clock or as an int variable
    E0302,
    /// Clock or int variable declared with size 0
    E0303,
    /// Declaration store rejected the declaration
    E0304,

    // =========================================================================
    // E04xx: Reference errors
    // =========================================================================
    /// Undeclared process
    E0401,
    /// Undeclared location
    E0402,
    /// Undeclared event
    E0403,

    // =========================================================================
    // E05xx: Numeric literal errors
    // =========================================================================
    /// Signed integer literal out of range
    E0501,
    /// Unsigned integer literal out of range
    E0502,

    // =========================================================================
    // E06xx: Bound checks
    // =========================================================================
    /// Initial value of an int variable outside of its bounds
    E0601,

    // =========================================================================
    // E09xx: Fatal errors
    // =========================================================================
    /// Too many errors, parsing aborted
    E0901,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0601 => "E0601",
            Self::E0901 => "E0901",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::E0101 | Self::E0201 | Self::E0202 => ErrorKind::Syntax,
            Self::E0901 => ErrorKind::Fatal,
            _ => ErrorKind::Semantic,
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid token",
            Self::E0201 => "unexpected token",
            Self::E0202 => "unexpected end of file",
            Self::E0301 => "multiple declarations",
            Self::E0302 => "variable already declared",
            Self::E0303 => "size should be >= 1",
            Self::E0304 => "insertion of declaration failed",
            Self::E0401 => "process is not declared",
            Self::E0402 => "location is not declared",
            Self::E0403 => "event is not declared",
            Self::E0501 => "integer value out of range",
            Self::E0502 => "unsigned integer value out of range",
            Self::E0601 => "initial value out of bounds",
            Self::E0901 => "too many errors",
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind() == ErrorKind::Fatal
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
