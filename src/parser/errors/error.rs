//! Diagnostic types
//!
//! Provides rich error information including:
//! - Error codes for categorization
//! - Severity levels
//! - Hints/suggestions for fixes
//! - Related source locations

use std::fmt;

use crate::base::Span;

use super::codes::ErrorCode;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Counts towards the error total and discards the model
    #[default]
    Error,
    /// Reported but does not affect the result
    Warning,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Related location information for a diagnostic
///
/// Used to point to related source locations, e.g. the first declaration
/// of a name declared twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Description of this related location
    pub message: String,
    /// Source span
    pub span: Span,
}

impl RelatedInfo {
    /// Create a new related info
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// A diagnostic reported while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Categorized error code
    pub code: ErrorCode,
    /// Severity
    pub severity: Severity,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
    /// Related source locations
    pub related: Vec<RelatedInfo>,
}

impl Diagnostic {
    /// Create a new error diagnostic with minimal information
    pub fn new(message: impl Into<String>, span: Span, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            span,
            code,
            severity: Severity::Error,
            hint: None,
            related: vec![],
        }
    }

    /// Create a builder for more complex diagnostics
    pub fn builder(code: ErrorCode) -> DiagnosticBuilder {
        DiagnosticBuilder::new(code)
    }

    /// Add a hint to this diagnostic
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Add related information
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }

    /// One diagnostic line, prefixed with the source name when there is one
    pub fn render(&self, source_name: Option<&str>) -> String {
        match source_name {
            Some(name) => format!("{}:{}", name, self),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.span, self.message)
    }
}

/// Builder for diagnostics with hints or related locations
pub struct DiagnosticBuilder {
    code: ErrorCode,
    message: Option<String>,
    span: Span,
    severity: Severity,
    hint: Option<String>,
    related: Vec<RelatedInfo>,
}

impl DiagnosticBuilder {
    /// Create a new builder with an error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            span: Span::default(),
            severity: Severity::Error,
            hint: None,
            related: vec![],
        }
    }

    /// Set the message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set the severity
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Add a hint
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Add related information
    pub fn related(mut self, message: impl Into<String>, span: Span) -> Self {
        self.related.push(RelatedInfo::new(message, span));
        self
    }

    /// Build the diagnostic, falling back to the code's default message
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            span: self.span,
            code: self.code,
            severity: self.severity,
            hint: self.hint,
            related: self.related,
        }
    }
}
