//! Token kinds produced by the scanner and consumed by the parser.

use std::fmt;

/// All token kinds of the system declaration format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,   // x, P.l0
    INTEGER, // 42, -3
    TEXT,    // raw attribute value

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    COLON,    // :
    AT,       // @
    QUESTION, // ?
    L_BRACE,  // {
    R_BRACE,  // }
    EOL,      // \n

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    CLOCK_KW,
    EDGE_KW,
    EVENT_KW,
    INT_KW,
    LOCATION_KW,
    PROCESS_KW,
    SYNC_KW,
    SYSTEM_KW,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// Character sequence the scanner could not classify
    ERROR,
    /// Synthesized by the parser once the token source is exhausted
    EOF,
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::CLOCK_KW
                | Self::EDGE_KW
                | Self::EVENT_KW
                | Self::INT_KW
                | Self::LOCATION_KW
                | Self::PROCESS_KW
                | Self::SYNC_KW
                | Self::SYSTEM_KW
        )
    }

    /// Tokens that may terminate a declaration
    pub fn is_end_of_declaration(self) -> bool {
        matches!(self, Self::EOL | Self::EOF)
    }

    /// Human-readable name used in syntax error messages
    pub fn name(self) -> &'static str {
        match self {
            Self::IDENT => "identifier",
            Self::INTEGER => "integer value",
            Self::TEXT => "text value",
            Self::COLON => "\":\"",
            Self::AT => "\"@\"",
            Self::QUESTION => "\"?\"",
            Self::L_BRACE => "\"{\"",
            Self::R_BRACE => "\"}\"",
            Self::EOL => "end of line",
            Self::CLOCK_KW => "\"clock\"",
            Self::EDGE_KW => "\"edge\"",
            Self::EVENT_KW => "\"event\"",
            Self::INT_KW => "\"int\"",
            Self::LOCATION_KW => "\"location\"",
            Self::PROCESS_KW => "\"process\"",
            Self::SYNC_KW => "\"sync\"",
            Self::SYSTEM_KW => "\"system\"",
            Self::ERROR => "invalid token",
            Self::EOF => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
