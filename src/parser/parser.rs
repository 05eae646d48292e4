//! Recursive descent parser for system declarations
//!
//! Pulls tokens one at a time, hands every completed declaration to the
//! validator and resynchronizes at the next end of line after a syntax error.
//! The session yields a model only when no error was reported.

use text_size::{TextRange, TextSize};

use super::errors::{Diagnostic, ErrorCode, ErrorReporter, ParseContext};
use super::lexer::{Lexer, Token};
use super::options::ParseOptions;
use super::production::{Lexeme, Number, Production};
use super::token_kind::TokenKind;
use crate::base::{LineIndex, Span};
use crate::semantic::{
    Attribute, Attributes, Integer, SyncConstraint, SyncStrength, SystemDeclaration, Unsigned,
    Validator,
};

/// Result of a parse session
#[derive(Debug, Clone)]
pub struct Parse {
    /// The model, present iff no error was reported
    pub system: Option<SystemDeclaration>,
    /// Errors and warnings in the order they were reported
    pub diagnostics: Vec<Diagnostic>,
    /// Parsing stopped before the end of input
    pub fatal: bool,
    pub source_name: Option<String>,
}

impl Parse {
    pub fn ok(&self) -> bool {
        self.system.is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// All diagnostics, one per line
    pub fn render(&self) -> String {
        self.diagnostics
            .iter()
            .map(|d| d.render(self.source_name.as_deref()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Parse a system declaration with default options
pub fn parse_system(input: &str) -> Parse {
    parse_system_with(input, &ParseOptions::default())
}

pub fn parse_system_with(input: &str, options: &ParseOptions) -> Parse {
    let line_index = LineIndex::new(input);
    let mut reporter = ErrorReporter::new();
    let (system, fatal) = {
        let mut parser = Parser::new(Lexer::new(input), &line_index, &mut reporter, options);
        let system = parser.parse();
        (system, parser.is_fatal())
    };
    Parse {
        system,
        diagnostics: reporter.into_diagnostics(),
        fatal,
        source_name: options.source_name.clone(),
    }
}

const DECLARATION_KEYWORDS: [TokenKind; 7] = [
    TokenKind::CLOCK_KW,
    TokenKind::EDGE_KW,
    TokenKind::EVENT_KW,
    TokenKind::INT_KW,
    TokenKind::LOCATION_KW,
    TokenKind::PROCESS_KW,
    TokenKind::SYNC_KW,
];

/// A token the grammar did not accept
struct Unexpected<'a> {
    found: Token<'a>,
    expected: Vec<TokenKind>,
    context: ParseContext,
}

/// The parser state.
///
/// Works on any token source; `line_index` must describe the text the
/// tokens' ranges point into.
pub struct Parser<'a, 'r, I>
where
    I: Iterator<Item = Token<'a>>,
{
    tokens: I,
    current: Token<'a>,
    /// End of the last consumed token
    last_end: TextSize,
    line_index: &'r LineIndex,
    reporter: &'r mut ErrorReporter,
    options: &'r ParseOptions,
    context: ParseContext,
    system: Option<SystemDeclaration>,
    fatal: bool,
    initial_errors: usize,
}

impl<'a, 'r, I> Parser<'a, 'r, I>
where
    I: Iterator<Item = Token<'a>>,
{
    pub fn new(
        tokens: I,
        line_index: &'r LineIndex,
        reporter: &'r mut ErrorReporter,
        options: &'r ParseOptions,
    ) -> Self {
        let initial_errors = reporter.error_count();
        let mut parser = Self {
            tokens,
            current: Self::eof_token(line_index),
            last_end: TextSize::new(0),
            line_index,
            reporter,
            options,
            context: ParseContext::default(),
            system: None,
            fatal: false,
            initial_errors,
        };
        parser.current = parser.next_token();
        parser
    }

    /// Parse the whole input. Returns the model only if the session reported
    /// no new error and was not aborted.
    pub fn parse(&mut self) -> Option<SystemDeclaration> {
        self.build();
        if self.fatal {
            return None;
        }
        let errors = self.error_count();
        if errors > 0 {
            tracing::debug!(errors, "discarding declaration model");
            return None;
        }
        self.system.take()
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    fn build(&mut self) {
        match self.system_header() {
            Ok(system) => self.system = Some(system),
            Err(unexpected) => {
                self.syntax_error(unexpected);
                return;
            }
        }
        self.declaration_list();
    }

    fn error_count(&self) -> usize {
        self.reporter.error_count() - self.initial_errors
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn eof_token(line_index: &LineIndex) -> Token<'a> {
        Token {
            kind: TokenKind::EOF,
            text: "",
            range: TextRange::empty(line_index.len()),
        }
    }

    fn next_token(&mut self) -> Token<'a> {
        self.tokens
            .next()
            .unwrap_or_else(|| Self::eof_token(self.line_index))
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn span(&self, range: TextRange) -> Span {
        self.line_index.span(range)
    }

    /// From `start` to the end of the last consumed token
    fn span_from(&self, start: TextSize) -> Span {
        self.span(TextRange::new(start, self.last_end.max(start)))
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Token<'a> {
        let token = self.current;
        if token.kind != TokenKind::EOF {
            self.last_end = token.range.end();
            self.current = self.next_token();
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, Unexpected<'a>> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(&[kind]))
        }
    }

    fn lexeme(&mut self, kind: TokenKind) -> Result<Lexeme<'a>, Unexpected<'a>> {
        let token = self.expect(kind)?;
        Ok(Lexeme::new(token.text, self.span(token.range)))
    }

    fn skip_eols(&mut self) {
        while self.at(TokenKind::EOL) {
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn unexpected(&self, expected: &[TokenKind]) -> Unexpected<'a> {
        Unexpected {
            found: self.current,
            expected: expected.to_vec(),
            context: self.context,
        }
    }

    fn syntax_error(&mut self, unexpected: Unexpected<'a>) {
        let Unexpected {
            found,
            expected,
            context,
        } = unexpected;
        let (code, found_name) = match found.kind {
            TokenKind::EOF => (ErrorCode::E0202, found.kind.name().to_string()),
            TokenKind::ERROR => (
                ErrorCode::E0101,
                format!("{} \"{}\"", found.kind.name(), found.text),
            ),
            _ => (ErrorCode::E0201, found.kind.name().to_string()),
        };
        let expected = expected
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(" or ");
        // an end of line is reported where it starts, not on the next line
        let range = if found.kind == TokenKind::EOL {
            TextRange::empty(found.range.start())
        } else {
            found.range
        };
        let diagnostic = Diagnostic::builder(code)
            .message(format!(
                "syntax error, unexpected {found_name}, expecting {expected}"
            ))
            .span(self.span(range))
            .hint(format!(
                "{}, expected {}",
                context.description(),
                context.expected_description()
            ))
            .build();
        self.reporter.push(diagnostic);

        if self.context.is_fatal_on_error() {
            self.fatal = true;
            tracing::warn!(context = ?self.context, "syntax error is fatal, parsing aborted");
        }
        self.recover();
    }

    /// Skip up to, not past, the next token the current context resumes at
    fn recover(&mut self) {
        tracing::debug!(context = ?self.context, "recovering from syntax error");
        while !self.context.recovers_at(self.current.kind) {
            self.bump();
        }
    }

    fn error_limit_exceeded(&self) -> bool {
        self.options
            .max_errors
            .is_some_and(|max| self.error_count() > max)
    }

    fn abort_too_many_errors(&mut self) {
        let errors = self.error_count();
        let span = self.span(self.current.range);
        self.reporter.report(
            span,
            ErrorCode::E0901,
            format!(
                "{} ({errors}), parsing aborted",
                ErrorCode::E0901.default_message()
            ),
        );
        self.fatal = true;
        tracing::warn!(errors, "error limit exceeded, parsing aborted");
    }

    // =========================================================================
    // Semantic actions
    // =========================================================================

    fn validator(&mut self) -> Option<Validator<'_>> {
        let system = self.system.as_mut()?;
        Some(Validator::new(
            system.store_mut(),
            &mut *self.reporter,
            self.options.int_bounds,
        ))
    }

    fn reduce(&mut self, production: Production<'a>) {
        if let Some(mut validator) = self.validator() {
            validator.reduce(production);
        }
    }

    fn sync_constraint(
        &mut self,
        process: Lexeme<'a>,
        event: Lexeme<'a>,
        strength: SyncStrength,
        span: Span,
    ) -> Option<SyncConstraint> {
        self.validator()?.sync_constraint(process, event, strength, span)
    }

    /// Read a size literal; range errors are reported right away
    fn unsigned(&mut self) -> Result<Number<'a, Unsigned>, Unexpected<'a>> {
        let literal = self.lexeme(TokenKind::INTEGER)?;
        let value = self.validator().and_then(|mut v| v.unsigned(literal));
        Ok(Number::new(literal, value))
    }

    fn integer(&mut self) -> Result<Number<'a, Integer>, Unexpected<'a>> {
        let literal = self.lexeme(TokenKind::INTEGER)?;
        let value = self.validator().and_then(|mut v| v.integer(literal));
        Ok(Number::new(literal, value))
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn system_header(&mut self) -> Result<SystemDeclaration, Unexpected<'a>> {
        self.context = ParseContext::SystemHeader;
        self.skip_eols();
        let start = self.expect(TokenKind::SYSTEM_KW)?.range.start();
        self.expect(TokenKind::COLON)?;
        let name = self.expect(TokenKind::IDENT)?;
        let (attributes, span) = self.end_of_declaration(start, &[])?;
        Ok(SystemDeclaration::new(name.text, attributes, span))
    }

    fn declaration_list(&mut self) {
        loop {
            self.context = ParseContext::DeclarationList;
            self.skip_eols();
            if self.at(TokenKind::EOF) {
                break;
            }
            match self.declaration() {
                Ok(production) => self.reduce(production),
                Err(unexpected) => self.syntax_error(unexpected),
            }
            if self.error_limit_exceeded() {
                self.abort_too_many_errors();
                break;
            }
        }
    }

    fn declaration(&mut self) -> Result<Production<'a>, Unexpected<'a>> {
        match self.current.kind {
            TokenKind::CLOCK_KW => self.clock_declaration(),
            TokenKind::INT_KW => self.int_declaration(),
            TokenKind::EVENT_KW => self.event_declaration(),
            TokenKind::PROCESS_KW => self.process_declaration(),
            TokenKind::LOCATION_KW => self.location_declaration(),
            TokenKind::EDGE_KW => self.edge_declaration(),
            TokenKind::SYNC_KW => self.sync_declaration(),
            _ => Err(self.unexpected(&DECLARATION_KEYWORDS)),
        }
    }

    /// Consume `KEYWORD :` and return where the declaration starts
    fn keyword(&mut self, context: ParseContext) -> Result<TextSize, Unexpected<'a>> {
        self.context = context;
        let start = self.bump().range.start();
        self.expect(TokenKind::COLON)?;
        Ok(start)
    }

    fn clock_declaration(&mut self) -> Result<Production<'a>, Unexpected<'a>> {
        let start = self.keyword(ParseContext::ClockDeclaration)?;
        let size = self.unsigned()?;
        self.expect(TokenKind::COLON)?;
        let name = self.lexeme(TokenKind::IDENT)?;
        let (attributes, span) = self.end_of_declaration(start, &[])?;
        Ok(Production::Clock {
            size,
            name,
            attributes,
            span,
        })
    }

    fn int_declaration(&mut self) -> Result<Production<'a>, Unexpected<'a>> {
        let start = self.keyword(ParseContext::IntDeclaration)?;
        let size = self.unsigned()?;
        self.expect(TokenKind::COLON)?;
        let min = self.integer()?;
        self.expect(TokenKind::COLON)?;
        let max = self.integer()?;
        self.expect(TokenKind::COLON)?;
        let initial = self.integer()?;
        self.expect(TokenKind::COLON)?;
        let name = self.lexeme(TokenKind::IDENT)?;
        let (attributes, span) = self.end_of_declaration(start, &[])?;
        Ok(Production::Int {
            size,
            min,
            max,
            initial,
            name,
            attributes,
            span,
        })
    }

    fn event_declaration(&mut self) -> Result<Production<'a>, Unexpected<'a>> {
        let start = self.keyword(ParseContext::EventDeclaration)?;
        let name = self.lexeme(TokenKind::IDENT)?;
        let (attributes, span) = self.end_of_declaration(start, &[])?;
        Ok(Production::Event {
            name,
            attributes,
            span,
        })
    }

    fn process_declaration(&mut self) -> Result<Production<'a>, Unexpected<'a>> {
        let start = self.keyword(ParseContext::ProcessDeclaration)?;
        let name = self.lexeme(TokenKind::IDENT)?;
        let (attributes, span) = self.end_of_declaration(start, &[])?;
        Ok(Production::Process {
            name,
            attributes,
            span,
        })
    }

    fn location_declaration(&mut self) -> Result<Production<'a>, Unexpected<'a>> {
        let start = self.keyword(ParseContext::LocationDeclaration)?;
        let process = self.lexeme(TokenKind::IDENT)?;
        self.expect(TokenKind::COLON)?;
        let name = self.lexeme(TokenKind::IDENT)?;
        let (attributes, span) = self.end_of_declaration(start, &[])?;
        Ok(Production::Location {
            process,
            name,
            attributes,
            span,
        })
    }

    fn edge_declaration(&mut self) -> Result<Production<'a>, Unexpected<'a>> {
        let start = self.keyword(ParseContext::EdgeDeclaration)?;
        let process = self.lexeme(TokenKind::IDENT)?;
        self.expect(TokenKind::COLON)?;
        let target = self.lexeme(TokenKind::IDENT)?;
        self.expect(TokenKind::COLON)?;
        let source = self.lexeme(TokenKind::IDENT)?;
        self.expect(TokenKind::COLON)?;
        let event = self.lexeme(TokenKind::IDENT)?;
        let (attributes, span) = self.end_of_declaration(start, &[])?;
        Ok(Production::Edge {
            process,
            target,
            source,
            event,
            attributes,
            span,
        })
    }

    fn sync_declaration(&mut self) -> Result<Production<'a>, Unexpected<'a>> {
        let start = self.keyword(ParseContext::SyncDeclaration)?;
        let mut constraints = Vec::new();
        loop {
            let process = self.lexeme(TokenKind::IDENT)?;
            self.expect(TokenKind::AT)?;
            let event = self.lexeme(TokenKind::IDENT)?;
            let mut span = process.span.cover(event.span);
            let strength = if self.at(TokenKind::QUESTION) {
                let question = self.bump();
                span = span.cover(self.span(question.range));
                SyncStrength::Weak
            } else {
                SyncStrength::Strong
            };
            if let Some(constraint) = self.sync_constraint(process, event, strength, span) {
                constraints.push(constraint);
            }

            if self.at(TokenKind::COLON) {
                self.bump();
                continue;
            }
            let alternatives: &[TokenKind] = match strength {
                SyncStrength::Weak => &[TokenKind::COLON],
                SyncStrength::Strong => &[TokenKind::QUESTION, TokenKind::COLON],
            };
            let (attributes, span) = self.end_of_declaration(start, alternatives)?;
            return Ok(Production::Sync {
                constraints,
                attributes,
                span,
            });
        }
    }

    /// `attr_list end_decl`. Returns the attributes and the span of the
    /// declaration from `start`, excluding the end of line.
    ///
    /// `alternatives` are the other tokens the rule could have continued
    /// with, for the error message.
    fn end_of_declaration(
        &mut self,
        start: TextSize,
        alternatives: &[TokenKind],
    ) -> Result<(Attributes, Span), Unexpected<'a>> {
        let has_list = self.at(TokenKind::L_BRACE);
        let attributes = if has_list {
            self.attr_list()?
        } else {
            Attributes::new()
        };
        let span = self.span_from(start);
        match self.current.kind {
            TokenKind::EOL => {
                self.bump();
                Ok((attributes, span))
            }
            TokenKind::EOF => Ok((attributes, span)),
            _ => {
                let mut expected = Vec::new();
                if !has_list {
                    expected.extend_from_slice(alternatives);
                    expected.push(TokenKind::L_BRACE);
                }
                expected.extend([TokenKind::EOL, TokenKind::EOF]);
                Err(self.unexpected(&expected))
            }
        }
    }

    fn attr_list(&mut self) -> Result<Attributes, Unexpected<'a>> {
        let outer = std::mem::replace(&mut self.context, ParseContext::AttributeList);
        let result = self.attributes();
        self.context = outer;
        result
    }

    fn attributes(&mut self) -> Result<Attributes, Unexpected<'a>> {
        self.expect(TokenKind::L_BRACE)?;
        let mut attributes = Attributes::new();
        if self.at(TokenKind::R_BRACE) {
            self.bump();
            return Ok(attributes);
        }
        loop {
            if !self.at(TokenKind::IDENT) {
                let expected: &[TokenKind] = if attributes.is_empty() {
                    &[TokenKind::IDENT, TokenKind::R_BRACE]
                } else {
                    &[TokenKind::IDENT]
                };
                return Err(self.unexpected(expected));
            }
            let key = self.bump();
            self.expect(TokenKind::COLON)?;
            let value = if self.at(TokenKind::TEXT) {
                Some(self.bump())
            } else {
                None
            };
            let (text, value_range) = match value {
                Some(token) => (token.text, token.range),
                None => ("", TextRange::empty(self.current.range.start())),
            };
            attributes.push(Attribute::new(
                key.text,
                text,
                self.span(key.range),
                self.span(value_range),
            ));

            match self.current.kind {
                TokenKind::COLON => {
                    self.bump();
                }
                TokenKind::R_BRACE => {
                    self.bump();
                    return Ok(attributes);
                }
                _ if value.is_none() => {
                    return Err(self.unexpected(&[
                        TokenKind::TEXT,
                        TokenKind::COLON,
                        TokenKind::R_BRACE,
                    ]));
                }
                _ => return Err(self.unexpected(&[TokenKind::COLON, TokenKind::R_BRACE])),
            }
        }
    }
}
