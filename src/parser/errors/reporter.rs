//! Per-session error reporting context.

use crate::base::Span;

use super::codes::ErrorCode;
use super::error::{Diagnostic, Severity};

/// Collects diagnostics and counts errors for one parse session.
///
/// Warnings are kept but not counted.
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an error at `span`.
    pub fn report(&mut self, span: Span, code: ErrorCode, message: impl Into<String>) {
        self.push(Diagnostic::new(message, span, code));
    }

    /// Report a warning at `span`.
    pub fn warn(&mut self, span: Span, code: ErrorCode, message: impl Into<String>) {
        self.push(Diagnostic::new(message, span, code).with_severity(Severity::Warning));
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            code = %diagnostic.code,
            severity = diagnostic.severity.as_str(),
            "{}",
            diagnostic
        );
        if diagnostic.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count
    }

    /// All diagnostics in the order they were reported
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
