//! Parse context tracking for context-aware error messages
//!
//! The parser records which rule it is in so syntax errors can say where in
//! the declaration they happened and how the parser resynchronizes.

use crate::parser::TokenKind;

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseContext {
    /// The leading `system:NAME` declaration
    #[default]
    SystemHeader,
    /// Between declarations
    DeclarationList,
    ClockDeclaration,
    IntDeclaration,
    EventDeclaration,
    ProcessDeclaration,
    LocationDeclaration,
    EdgeDeclaration,
    SyncDeclaration,
    /// Inside `{...}`
    AttributeList,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::SystemHeader => "in system declaration",
            Self::DeclarationList => "at start of declaration",
            Self::ClockDeclaration => "in clock declaration",
            Self::IntDeclaration => "in int declaration",
            Self::EventDeclaration => "in event declaration",
            Self::ProcessDeclaration => "in process declaration",
            Self::LocationDeclaration => "in location declaration",
            Self::EdgeDeclaration => "in edge declaration",
            Self::SyncDeclaration => "in sync declaration",
            Self::AttributeList => "in attribute list",
        }
    }

    /// Get a description of the expected shape in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::SystemHeader => "system:NAME{attributes}",
            Self::DeclarationList => "one of clock, int, event, process, location, edge, sync",
            Self::ClockDeclaration => "clock:SIZE:NAME{attributes}",
            Self::IntDeclaration => "int:SIZE:MIN:MAX:INIT:NAME{attributes}",
            Self::EventDeclaration => "event:NAME{attributes}",
            Self::ProcessDeclaration => "process:NAME{attributes}",
            Self::LocationDeclaration => "location:PROCESS:NAME{attributes}",
            Self::EdgeDeclaration => "edge:PROCESS:TARGET:SOURCE:EVENT{attributes}",
            Self::SyncDeclaration => "sync:PROCESS@EVENT[?]:...{attributes}",
            Self::AttributeList => "{key:value : key:value}",
        }
    }

    /// Tokens the parser resynchronizes on after a syntax error
    pub fn recovers_at(&self, kind: TokenKind) -> bool {
        match self {
            Self::SystemHeader => kind == TokenKind::EOF,
            _ => kind.is_end_of_declaration(),
        }
    }

    /// A syntax error in this context leaves no declaration model to continue with
    pub fn is_fatal_on_error(&self) -> bool {
        matches!(self, Self::SystemHeader)
    }
}
