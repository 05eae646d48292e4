//! Semantic actions run when the parser completes a declaration.
//!
//! Every declaration goes through the same three steps: check that its name
//! is free, resolve the names it refers to, then build it and insert it into
//! the store. The first failing step reports a diagnostic and drops the
//! declaration; parsing continues either way.

use crate::base::Span;
use crate::parser::{
    Diagnostic, ErrorCode, ErrorReporter, IntBoundsCheck, Lexeme, Number, Production,
};

use super::attributes::Attributes;
use super::declarations::{
    ClockDeclaration, Declaration, EdgeDeclaration, EventDeclaration, IntDeclaration,
    LocationDeclaration, ProcessDeclaration, SyncConstraint, SyncDeclaration, SyncStrength,
};
use super::ids::{DeclarationId, DeclarationKind, EventId, LocationId, ProcessId, VariableId};
use super::numeric::{Integer, Unsigned, parse_integer, parse_unsigned};
use super::store::DeclarationStore;

pub struct Validator<'s> {
    store: &'s mut DeclarationStore,
    reporter: &'s mut ErrorReporter,
    int_bounds: IntBoundsCheck,
}

impl<'s> Validator<'s> {
    pub fn new(
        store: &'s mut DeclarationStore,
        reporter: &'s mut ErrorReporter,
        int_bounds: IntBoundsCheck,
    ) -> Self {
        Self {
            store,
            reporter,
            int_bounds,
        }
    }

    /// Validate a completed declaration and insert it on success
    pub fn reduce(&mut self, production: Production<'_>) -> Option<DeclarationId> {
        match production {
            Production::Clock {
                size,
                name,
                attributes,
                span,
            } => self.clock(size, name, attributes, span),
            Production::Int {
                size,
                min,
                max,
                initial,
                name,
                attributes,
                span,
            } => self.int(size, [min, max, initial], name, attributes, span),
            Production::Event {
                name,
                attributes,
                span,
            } => self.event(name, attributes, span),
            Production::Process {
                name,
                attributes,
                span,
            } => self.process(name, attributes, span),
            Production::Location {
                process,
                name,
                attributes,
                span,
            } => self.location(process, name, attributes, span),
            Production::Edge {
                process,
                target,
                source,
                event,
                attributes,
                span,
            } => self.edge(process, target, source, event, attributes, span),
            Production::Sync {
                constraints,
                attributes,
                span,
            } => self.insert(Declaration::Sync(SyncDeclaration {
                constraints,
                attributes,
                span,
            })),
        }
    }

    /// Resolve one `P@e[?]` constraint; `None` drops it from its sync
    pub fn sync_constraint(
        &mut self,
        process: Lexeme<'_>,
        event: Lexeme<'_>,
        strength: SyncStrength,
        span: Span,
    ) -> Option<SyncConstraint> {
        let process = self.resolve_process(process)?;
        let event = self.resolve_event(event)?;
        Some(SyncConstraint {
            process,
            event,
            strength,
            span,
        })
    }

    fn clock(
        &mut self,
        size: Number<'_, Unsigned>,
        name: Lexeme<'_>,
        attributes: Attributes,
        span: Span,
    ) -> Option<DeclarationId> {
        if !self.check_variable(name, DeclarationKind::Clock) {
            return None;
        }
        if size.value == Some(0) {
            self.reporter.report(
                size.lexeme.span,
                ErrorCode::E0303,
                format!("clock {} has size 0, size should be >= 1", name.text),
            );
            return None;
        }
        let decl = ClockDeclaration::new(name.text, size.value_or_default(), attributes, span);
        self.insert(Declaration::Clock(decl))
    }

    fn int(
        &mut self,
        size: Number<'_, Unsigned>,
        [min, max, initial]: [Number<'_, Integer>; 3],
        name: Lexeme<'_>,
        attributes: Attributes,
        span: Span,
    ) -> Option<DeclarationId> {
        if !self.check_variable(name, DeclarationKind::Int) {
            return None;
        }
        if size.value == Some(0) {
            self.reporter.report(
                size.lexeme.span,
                ErrorCode::E0303,
                format!("int variable {} has size 0, size should be >= 1", name.text),
            );
            return None;
        }
        let decl = IntDeclaration {
            name: name.text.into(),
            size: size.value_or_default(),
            min: min.value_or_default(),
            max: max.value_or_default(),
            initial: initial.value_or_default(),
            attributes,
            span,
        };
        let all_parsed = min.value.is_some() && max.value.is_some() && initial.value.is_some();
        if all_parsed
            && !decl.initial_in_bounds()
            && !self.check_int_bounds(&decl, initial.lexeme.span)
        {
            return None;
        }
        self.insert(Declaration::Int(decl))
    }

    /// Returns false when the declaration must be dropped
    fn check_int_bounds(&mut self, decl: &IntDeclaration, span: Span) -> bool {
        let message = format!(
            "initial value {} of int variable {} is outside [{},{}]",
            decl.initial, decl.name, decl.min, decl.max
        );
        match self.int_bounds {
            IntBoundsCheck::Ignore => true,
            IntBoundsCheck::Warn => {
                self.reporter.warn(span, ErrorCode::E0601, message);
                true
            }
            IntBoundsCheck::Error => {
                self.reporter.report(span, ErrorCode::E0601, message);
                false
            }
        }
    }

    fn event(&mut self, name: Lexeme<'_>, attributes: Attributes, span: Span) -> Option<DeclarationId> {
        if let Some(existing) = self.store.find_event_id(name.text) {
            self.report_duplicate(
                format!("multiple declarations of event {}", name.text),
                name.span,
                DeclarationId::Event(existing),
            );
            return None;
        }
        self.insert(Declaration::Event(EventDeclaration {
            name: name.text.into(),
            attributes,
            span,
        }))
    }

    fn process(&mut self, name: Lexeme<'_>, attributes: Attributes, span: Span) -> Option<DeclarationId> {
        if let Some(existing) = self.store.find_process_id(name.text) {
            self.report_duplicate(
                format!("multiple declarations of process {}", name.text),
                name.span,
                DeclarationId::Process(existing),
            );
            return None;
        }
        self.insert(Declaration::Process(ProcessDeclaration {
            name: name.text.into(),
            attributes,
            span,
        }))
    }

    fn location(
        &mut self,
        process: Lexeme<'_>,
        name: Lexeme<'_>,
        attributes: Attributes,
        span: Span,
    ) -> Option<DeclarationId> {
        let process_id = self.resolve_process(process)?;
        if let Some(existing) = self.store.find_location_id(process_id, name.text) {
            self.report_duplicate(
                format!(
                    "multiple declarations of location {} in process {}",
                    name.text, process.text
                ),
                name.span,
                DeclarationId::Location(existing),
            );
            return None;
        }
        self.insert(Declaration::Location(LocationDeclaration {
            name: name.text.into(),
            process: process_id,
            attributes,
            span,
        }))
    }

    fn edge(
        &mut self,
        process: Lexeme<'_>,
        target: Lexeme<'_>,
        source: Lexeme<'_>,
        event: Lexeme<'_>,
        attributes: Attributes,
        span: Span,
    ) -> Option<DeclarationId> {
        let process_id = self.resolve_process(process)?;
        let target = self.resolve_location(process_id, process, target)?;
        let source = self.resolve_location(process_id, process, source)?;
        let event = self.resolve_event(event)?;
        self.insert(Declaration::Edge(EdgeDeclaration {
            process: process_id,
            target,
            source,
            event,
            attributes,
            span,
        }))
    }

    // ============================================================
    // Helpers
    // ============================================================

    fn insert(&mut self, declaration: Declaration) -> Option<DeclarationId> {
        let kind = declaration.kind();
        let span = declaration.span();
        match self.store.insert(declaration) {
            Ok(id) => Some(id),
            Err(err) => {
                self.reporter.report(
                    span,
                    ErrorCode::E0304,
                    format!("insertion of {kind} declaration failed: {err}"),
                );
                None
            }
        }
    }

    /// Convert a size literal, reporting it when out of range
    pub fn unsigned(&mut self, literal: Lexeme<'_>) -> Option<Unsigned> {
        parse_unsigned(literal.text)
            .map_err(|err| {
                self.reporter
                    .report(literal.span, ErrorCode::E0502, err.to_string())
            })
            .ok()
    }

    /// Convert a bound or initial value, reporting it when out of range
    pub fn integer(&mut self, literal: Lexeme<'_>) -> Option<Integer> {
        parse_integer(literal.text)
            .map_err(|err| {
                self.reporter
                    .report(literal.span, ErrorCode::E0501, err.to_string())
            })
            .ok()
    }

    /// Clocks and ints share one namespace
    fn check_variable(&mut self, name: Lexeme<'_>, declaring: DeclarationKind) -> bool {
        let Some(existing) = self.store.find_variable_id(name.text) else {
            return true;
        };
        let (code, message) = if existing.kind() == declaring {
            let what = match existing {
                VariableId::Clock(_) => "clock",
                VariableId::Int(_) => "int variable",
            };
            (
                ErrorCode::E0301,
                format!("multiple declarations of {what} {}", name.text),
            )
        } else {
            let what = match existing {
                VariableId::Clock(_) => "a clock",
                VariableId::Int(_) => "an int",
            };
            (
                ErrorCode::E0302,
                format!("variable {} already declared as {what}", name.text),
            )
        };
        self.report_with_previous(code, message, name.span, existing.into());
        false
    }

    fn report_duplicate(&mut self, message: String, span: Span, previous: DeclarationId) {
        self.report_with_previous(ErrorCode::E0301, message, span, previous);
    }

    fn report_with_previous(
        &mut self,
        code: ErrorCode,
        message: String,
        span: Span,
        previous: DeclarationId,
    ) {
        let mut builder = Diagnostic::builder(code).message(message).span(span);
        if let Some(decl) = self.store.get(previous) {
            builder = builder.related("previous declaration", decl.span());
        }
        self.reporter.push(builder.build());
    }

    fn resolve_process(&mut self, process: Lexeme<'_>) -> Option<ProcessId> {
        let id = self.store.find_process_id(process.text);
        if id.is_none() {
            self.reporter.report(
                process.span,
                ErrorCode::E0401,
                format!("process {} is not declared", process.text),
            );
        }
        id
    }

    fn resolve_location(
        &mut self,
        process_id: ProcessId,
        process: Lexeme<'_>,
        location: Lexeme<'_>,
    ) -> Option<LocationId> {
        let id = self.store.find_location_id(process_id, location.text);
        if id.is_none() {
            self.reporter.report(
                location.span,
                ErrorCode::E0402,
                format!(
                    "location {} is not declared in process {}",
                    location.text, process.text
                ),
            );
        }
        id
    }

    fn resolve_event(&mut self, event: Lexeme<'_>) -> Option<EventId> {
        let id = self.store.find_event_id(event.text);
        if id.is_none() {
            self.reporter.report(
                event.span,
                ErrorCode::E0403,
                format!("event {} is not declared", event.text),
            );
        }
        id
    }
}
