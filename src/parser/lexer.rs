//! Logos-based lexer for system declarations
//!
//! Declarations are lexed with the logos-generated tokenizer. Attribute lists
//! need context: keys are identifiers even when they spell a keyword, and a
//! value is the raw text following the key's `:`, so the lexer tracks where it
//! is inside `{...}` and scans values by hand.

use super::token_kind::TokenKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: TextRange,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        let start = TextSize::new(start as u32);
        Self {
            kind,
            text,
            range: TextRange::at(start, TextSize::of(text)),
        }
    }
}

/// Position of the lexer relative to an attribute list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrState {
    /// Outside of `{...}`
    Outside,
    /// Expecting an attribute key (or `}`)
    Key,
    /// Right after `key:`, the next characters are a raw value
    Value,
    /// After a value, expecting `:` or `}`
    Separator,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    state: AttrState,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            state: AttrState::Outside,
        }
    }

    /// Scan the raw text of an attribute value, up to `:`, `{`, `}` or a newline.
    fn attr_value(&mut self) -> Option<Token<'a>> {
        self.state = AttrState::Separator;
        let remainder = self.inner.remainder();
        let len = remainder
            .find([':', '{', '}', '\n'])
            .unwrap_or(remainder.len());
        if len == 0 {
            return None;
        }
        let start = self.inner.span().end;
        let text = &remainder[..len];
        self.inner.bump(len);
        Some(Token::new(TokenKind::TEXT, text, start))
    }

    fn advance_state(&mut self, kind: TokenKind) -> TokenKind {
        match (self.state, kind) {
            (_, TokenKind::EOL) => {
                self.state = AttrState::Outside;
                kind
            }
            (AttrState::Outside, TokenKind::L_BRACE) => {
                self.state = AttrState::Key;
                kind
            }
            (AttrState::Key, TokenKind::COLON) => {
                self.state = AttrState::Value;
                kind
            }
            (AttrState::Separator, TokenKind::COLON) => {
                self.state = AttrState::Key;
                kind
            }
            (AttrState::Key | AttrState::Separator, TokenKind::R_BRACE) => {
                self.state = AttrState::Outside;
                kind
            }
            (AttrState::Key, kw) if kw.is_keyword() => TokenKind::IDENT,
            _ => kind,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == AttrState::Value {
            if let Some(token) = self.attr_value() {
                return Some(token);
            }
        }

        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let start = self.inner.span().start;

        let kind = match logos_token {
            Ok(t) => self.advance_state(t.into()),
            Err(()) => TokenKind::ERROR,
        };

        Some(Token::new(kind, text, start))
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"#[^\n]*")]
pub enum LogosToken {
    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.]*")]
    Ident,

    #[regex(r"-?[0-9]+")]
    Integer,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token(":")]
    Colon,
    #[token("@")]
    At,
    #[token("?")]
    Question,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("\n")]
    Newline,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("clock")]
    ClockKw,
    #[token("edge")]
    EdgeKw,
    #[token("event")]
    EventKw,
    #[token("int")]
    IntKw,
    #[token("location")]
    LocationKw,
    #[token("process")]
    ProcessKw,
    #[token("sync")]
    SyncKw,
    #[token("system")]
    SystemKw,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Ident => TokenKind::IDENT,
            Integer => TokenKind::INTEGER,
            Colon => TokenKind::COLON,
            At => TokenKind::AT,
            Question => TokenKind::QUESTION,
            LBrace => TokenKind::L_BRACE,
            RBrace => TokenKind::R_BRACE,
            Newline => TokenKind::EOL,
            ClockKw => TokenKind::CLOCK_KW,
            EdgeKw => TokenKind::EDGE_KW,
            EventKw => TokenKind::EVENT_KW,
            IntKw => TokenKind::INT_KW,
            LocationKw => TokenKind::LOCATION_KW,
            ProcessKw => TokenKind::PROCESS_KW,
            SyncKw => TokenKind::SYNC_KW,
            SystemKw => TokenKind::SYSTEM_KW,
        }
    }
}
