//! Typed identifiers for declarations held by the store.
//!
//! Declarations refer to each other through these ids, never through owning
//! handles. An id is an index into the store's per-kind storage, which is
//! append-only, so ids stay valid for the lifetime of the store.

use std::fmt;

macro_rules! declaration_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u32);

        impl $name {
            /// Create a new id from an index
            pub fn new(index: usize) -> Self {
                Self(index as u32)
            }

            /// Get the index into the per-kind storage
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

declaration_id!(
    /// Id of a clock declaration
    ClockId
);
declaration_id!(
    /// Id of an int variable declaration
    IntId
);
declaration_id!(
    /// Id of an event declaration
    EventId
);
declaration_id!(
    /// Id of a process declaration
    ProcessId
);
declaration_id!(
    /// Id of a location declaration (unique across all processes)
    LocationId
);
declaration_id!(EdgeId);
declaration_id!(SyncId);

/// The kinds of declaration the store holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Clock,
    Int,
    Event,
    Process,
    Location,
    Edge,
    Sync,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Int => "int",
            Self::Event => "event",
            Self::Process => "process",
            Self::Location => "location",
            Self::Edge => "edge",
            Self::Sync => "sync",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Id of any declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationId {
    Clock(ClockId),
    Int(IntId),
    Event(EventId),
    Process(ProcessId),
    Location(LocationId),
    Edge(EdgeId),
    Sync(SyncId),
}

impl DeclarationId {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::Clock(_) => DeclarationKind::Clock,
            Self::Int(_) => DeclarationKind::Int,
            Self::Event(_) => DeclarationKind::Event,
            Self::Process(_) => DeclarationKind::Process,
            Self::Location(_) => DeclarationKind::Location,
            Self::Edge(_) => DeclarationKind::Edge,
            Self::Sync(_) => DeclarationKind::Sync,
        }
    }
}

/// Entry of the namespace shared by clocks and int variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableId {
    Clock(ClockId),
    Int(IntId),
}

impl VariableId {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::Clock(_) => DeclarationKind::Clock,
            Self::Int(_) => DeclarationKind::Int,
        }
    }
}

impl From<VariableId> for DeclarationId {
    fn from(id: VariableId) -> Self {
        match id {
            VariableId::Clock(id) => DeclarationId::Clock(id),
            VariableId::Int(id) => DeclarationId::Int(id),
        }
    }
}
