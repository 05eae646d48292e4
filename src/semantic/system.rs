use std::fmt;

use smol_str::SmolStr;

use super::attributes::Attributes;
use super::declarations::DeclarationRef;
use super::store::DeclarationStore;
use crate::base::Span;

/// The validated model of a system: its header and every accepted declaration
#[derive(Debug, Clone)]
pub struct SystemDeclaration {
    name: SmolStr,
    attributes: Attributes,
    span: Span,
    store: DeclarationStore,
}

impl SystemDeclaration {
    pub fn new(name: impl Into<SmolStr>, attributes: Attributes, span: Span) -> Self {
        Self {
            name: name.into(),
            attributes,
            span,
            store: DeclarationStore::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Span of the `system:` header
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn store(&self) -> &DeclarationStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut DeclarationStore {
        &mut self.store
    }

    fn write_declaration(&self, f: &mut fmt::Formatter<'_>, decl: DeclarationRef<'_>) -> fmt::Result {
        let store = &self.store;
        let process_name = |id| store.get_process(id).map_or("?", |p| p.name.as_str());
        let event_name = |id| store.get_event(id).map_or("?", |e| e.name.as_str());
        let location_name = |id| store.get_location(id).map_or("?", |l| l.name.as_str());

        match decl {
            DeclarationRef::Clock(clock) => write!(f, "clock:{}:{}", clock.size, clock.name)?,
            DeclarationRef::Int(int) => write!(
                f,
                "int:{}:{}:{}:{}:{}",
                int.size, int.min, int.max, int.initial, int.name
            )?,
            DeclarationRef::Event(event) => write!(f, "event:{}", event.name)?,
            DeclarationRef::Process(process) => write!(f, "process:{}", process.name)?,
            DeclarationRef::Location(location) => write!(
                f,
                "location:{}:{}",
                process_name(location.process),
                location.name
            )?,
            DeclarationRef::Edge(edge) => write!(
                f,
                "edge:{}:{}:{}:{}",
                process_name(edge.process),
                location_name(edge.target),
                location_name(edge.source),
                event_name(edge.event)
            )?,
            DeclarationRef::Sync(sync) => {
                f.write_str("sync")?;
                for constraint in &sync.constraints {
                    write!(
                        f,
                        ":{}@{}",
                        process_name(constraint.process),
                        event_name(constraint.event)
                    )?;
                    if constraint.strength.is_weak() {
                        f.write_str("?")?;
                    }
                }
            }
        }
        write!(f, "{}", decl.attributes())
    }
}

/// Prints the system in the declaration syntax it was parsed from, one
/// declaration per line in acceptance order
impl fmt::Display for SystemDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "system:{}{}", self.name, self.attributes)?;
        for decl in self.store.declarations() {
            self.write_declaration(f, decl)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
