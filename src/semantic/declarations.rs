//! Declaration values stored in a [`DeclarationStore`](super::DeclarationStore).
//!
//! Each declaration keeps its name, its typed references to other
//! declarations, its attributes and the span of the source text it was built
//! from. Declarations are immutable once inserted: the store only hands out
//! shared references.

use smol_str::SmolStr;

use super::attributes::Attributes;
use super::ids::{DeclarationKind, EventId, LocationId, ProcessId};
use super::numeric::{Integer, Unsigned};
use crate::base::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDeclaration {
    pub name: SmolStr,
    /// Number of clocks in the array (1 for a scalar clock)
    pub size: Unsigned,
    pub attributes: Attributes,
    pub span: Span,
}

impl ClockDeclaration {
    pub fn new(name: impl Into<SmolStr>, size: Unsigned, attributes: Attributes, span: Span) -> Self {
        Self {
            name: name.into(),
            size,
            attributes,
            span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntDeclaration {
    pub name: SmolStr,
    pub size: Unsigned,
    pub min: Integer,
    pub max: Integer,
    pub initial: Integer,
    pub attributes: Attributes,
    pub span: Span,
}

impl IntDeclaration {
    /// Whether `min <= initial <= max`
    pub fn initial_in_bounds(&self) -> bool {
        self.min <= self.initial && self.initial <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDeclaration {
    pub name: SmolStr,
    pub attributes: Attributes,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDeclaration {
    pub name: SmolStr,
    pub attributes: Attributes,
    pub span: Span,
}

/// A location, owned by exactly one process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDeclaration {
    pub name: SmolStr,
    pub process: ProcessId,
    pub attributes: Attributes,
    pub span: Span,
}

/// An edge between two locations of the same process.
///
/// Fields follow the declaration syntax `edge:P:TARGET:SOURCE:EVENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDeclaration {
    pub process: ProcessId,
    pub target: LocationId,
    pub source: LocationId,
    pub event: EventId,
    pub attributes: Attributes,
    pub span: Span,
}

/// `?` marks a weak constraint, no marker a strong one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SyncStrength {
    Weak,
    #[default]
    Strong,
}

impl SyncStrength {
    pub fn is_weak(self) -> bool {
        matches!(self, Self::Weak)
    }
}

/// One `PROCESS@EVENT[?]` element of a sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConstraint {
    pub process: ProcessId,
    pub event: EventId,
    pub strength: SyncStrength,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncDeclaration {
    /// Valid constraints in source order. May be empty when every written
    /// constraint referred to something undeclared.
    pub constraints: Vec<SyncConstraint>,
    pub attributes: Attributes,
    pub span: Span,
}

/// Any declaration, as handed to [`DeclarationStore::insert`](super::DeclarationStore::insert)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Clock(ClockDeclaration),
    Int(IntDeclaration),
    Event(EventDeclaration),
    Process(ProcessDeclaration),
    Location(LocationDeclaration),
    Edge(EdgeDeclaration),
    Sync(SyncDeclaration),
}

/// Borrowed view of a stored declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationRef<'a> {
    Clock(&'a ClockDeclaration),
    Int(&'a IntDeclaration),
    Event(&'a EventDeclaration),
    Process(&'a ProcessDeclaration),
    Location(&'a LocationDeclaration),
    Edge(&'a EdgeDeclaration),
    Sync(&'a SyncDeclaration),
}

macro_rules! declaration_accessors {
    ($ty:ty, $($variant:ident),*) => {
        impl $ty {
            pub fn kind(&self) -> DeclarationKind {
                match self {
                    $(Self::$variant(_) => DeclarationKind::$variant,)*
                }
            }

            pub fn attributes(&self) -> &Attributes {
                match self {
                    $(Self::$variant(decl) => &decl.attributes,)*
                }
            }

            pub fn span(&self) -> Span {
                match self {
                    $(Self::$variant(decl) => decl.span,)*
                }
            }
        }
    };
}

declaration_accessors!(Declaration, Clock, Int, Event, Process, Location, Edge, Sync);
declaration_accessors!(DeclarationRef<'_>, Clock, Int, Event, Process, Location, Edge, Sync);

impl Declaration {
    /// Declared name; edges and syncs are anonymous
    pub fn name(&self) -> Option<&str> {
        self.view().name()
    }

    pub fn view(&self) -> DeclarationRef<'_> {
        match self {
            Self::Clock(decl) => DeclarationRef::Clock(decl),
            Self::Int(decl) => DeclarationRef::Int(decl),
            Self::Event(decl) => DeclarationRef::Event(decl),
            Self::Process(decl) => DeclarationRef::Process(decl),
            Self::Location(decl) => DeclarationRef::Location(decl),
            Self::Edge(decl) => DeclarationRef::Edge(decl),
            Self::Sync(decl) => DeclarationRef::Sync(decl),
        }
    }
}

impl<'a> DeclarationRef<'a> {
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Self::Clock(decl) => Some(decl.name.as_str()),
            Self::Int(decl) => Some(decl.name.as_str()),
            Self::Event(decl) => Some(decl.name.as_str()),
            Self::Process(decl) => Some(decl.name.as_str()),
            Self::Location(decl) => Some(decl.name.as_str()),
            Self::Edge(_) | Self::Sync(_) => None,
        }
    }
}
