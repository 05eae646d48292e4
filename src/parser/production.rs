//! Declarations as recognized by the grammar, before validation.

use crate::base::Span;
use crate::semantic::{Attributes, Integer, SyncConstraint, Unsigned};

/// A token's text together with where it was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Lexeme<'a> {
    pub fn new(text: &'a str, span: Span) -> Self {
        Self { text, span }
    }
}

/// A numeric literal, converted as soon as it is read.
///
/// `value` is `None` when the literal was out of range. That error has
/// already been reported and the declaration is built with 0 in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number<'a, T> {
    pub lexeme: Lexeme<'a>,
    pub value: Option<T>,
}

impl<'a, T: Copy + Default> Number<'a, T> {
    pub fn new(lexeme: Lexeme<'a>, value: Option<T>) -> Self {
        Self { lexeme, value }
    }

    pub fn value_or_default(&self) -> T {
        self.value.unwrap_or_default()
    }
}

/// A syntactically complete declaration.
///
/// Names are still raw text; resolving them is the validator's job. Numbers
/// and sync constraints are checked earlier, as the parser reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Production<'a> {
    Clock {
        size: Number<'a, Unsigned>,
        name: Lexeme<'a>,
        attributes: Attributes,
        span: Span,
    },
    Int {
        size: Number<'a, Unsigned>,
        min: Number<'a, Integer>,
        max: Number<'a, Integer>,
        initial: Number<'a, Integer>,
        name: Lexeme<'a>,
        attributes: Attributes,
        span: Span,
    },
    Event {
        name: Lexeme<'a>,
        attributes: Attributes,
        span: Span,
    },
    Process {
        name: Lexeme<'a>,
        attributes: Attributes,
        span: Span,
    },
    Location {
        process: Lexeme<'a>,
        name: Lexeme<'a>,
        attributes: Attributes,
        span: Span,
    },
    Edge {
        process: Lexeme<'a>,
        target: Lexeme<'a>,
        source: Lexeme<'a>,
        event: Lexeme<'a>,
        attributes: Attributes,
        span: Span,
    },
    Sync {
        constraints: Vec<SyncConstraint>,
        attributes: Attributes,
        span: Span,
    },
}
