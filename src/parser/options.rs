/// How an int whose initial value lies outside `[min, max]` is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntBoundsCheck {
    /// Accept the declaration silently
    #[default]
    Ignore,
    /// Accept it and emit a warning
    Warn,
    /// Reject it with an error
    Error,
}

/// Settings for one parse session
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Name shown in front of rendered diagnostics, usually the file path
    pub source_name: Option<String>,
    /// Give up once more than this many errors were reported
    pub max_errors: Option<usize>,
    pub int_bounds: IntBoundsCheck,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = Some(max_errors);
        self
    }

    pub fn with_int_bounds(mut self, check: IntBoundsCheck) -> Self {
        self.int_bounds = check;
        self
    }
}
