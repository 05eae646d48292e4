use indexmap::IndexMap;
use indexmap::map::Entry;
use rustc_hash::{FxBuildHasher, FxHashMap};
use smol_str::SmolStr;
use thiserror::Error;

use crate::semantic::declarations::{
    ClockDeclaration, Declaration, EdgeDeclaration, EventDeclaration, IntDeclaration,
    LocationDeclaration, ProcessDeclaration, SyncConstraint, SyncDeclaration,
};
use crate::semantic::ids::{
    ClockId, DeclarationId, DeclarationKind, EdgeId, EventId, IntId, LocationId, ProcessId,
    SyncId, VariableId,
};

pub(super) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Why the store refused a declaration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{name} is already declared as {existing}")]
    Duplicate {
        name: SmolStr,
        existing: DeclarationKind,
    },
    #[error("no process with id {0:?}")]
    UnknownProcess(ProcessId),
    #[error("no event with id {0:?}")]
    UnknownEvent(EventId),
    #[error("no location with id {location:?} in process {process:?}")]
    UnknownLocation {
        process: ProcessId,
        location: LocationId,
    },
}

/// All declarations of one system, grouped by kind.
///
/// Clocks and ints share one namespace. Events and processes each have their
/// own. Location names are unique per process. Every reference held by a
/// stored declaration resolves to a declaration already in the store.
#[derive(Debug, Clone, Default)]
pub struct DeclarationStore {
    pub(super) clocks: Vec<ClockDeclaration>,
    pub(super) ints: Vec<IntDeclaration>,
    pub(super) variables: FxHashMap<SmolStr, VariableId>,
    pub(super) events: FxIndexMap<SmolStr, EventDeclaration>,
    pub(super) processes: FxIndexMap<SmolStr, ProcessDeclaration>,
    pub(super) locations: FxIndexMap<(ProcessId, SmolStr), LocationDeclaration>,
    pub(super) edges: Vec<EdgeDeclaration>,
    pub(super) syncs: Vec<SyncDeclaration>,
    /// Insertion order across all kinds
    pub(super) order: Vec<DeclarationId>,
}

impl DeclarationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration.
    ///
    /// Fails without modifying the store when the name is taken in the
    /// declaration's namespace or when a referenced id is not in the store.
    pub fn insert(&mut self, declaration: Declaration) -> Result<DeclarationId, StoreError> {
        let kind = declaration.kind();
        let id = match declaration {
            Declaration::Clock(decl) => self.insert_clock(decl)?,
            Declaration::Int(decl) => self.insert_int(decl)?,
            Declaration::Event(decl) => self.insert_event(decl)?,
            Declaration::Process(decl) => self.insert_process(decl)?,
            Declaration::Location(decl) => self.insert_location(decl)?,
            Declaration::Edge(decl) => self.insert_edge(decl)?,
            Declaration::Sync(decl) => self.insert_sync(decl)?,
        };
        self.order.push(id);
        tracing::trace!(%kind, ?id, "declaration inserted");
        Ok(id)
    }

    fn check_variable_free(&self, name: &SmolStr) -> Result<(), StoreError> {
        match self.variables.get(name) {
            Some(existing) => Err(StoreError::Duplicate {
                name: name.clone(),
                existing: existing.kind(),
            }),
            None => Ok(()),
        }
    }

    fn insert_clock(&mut self, decl: ClockDeclaration) -> Result<DeclarationId, StoreError> {
        self.check_variable_free(&decl.name)?;
        let id = ClockId::new(self.clocks.len());
        self.variables.insert(decl.name.clone(), VariableId::Clock(id));
        self.clocks.push(decl);
        Ok(DeclarationId::Clock(id))
    }

    fn insert_int(&mut self, decl: IntDeclaration) -> Result<DeclarationId, StoreError> {
        self.check_variable_free(&decl.name)?;
        let id = IntId::new(self.ints.len());
        self.variables.insert(decl.name.clone(), VariableId::Int(id));
        self.ints.push(decl);
        Ok(DeclarationId::Int(id))
    }

    fn insert_event(&mut self, decl: EventDeclaration) -> Result<DeclarationId, StoreError> {
        match self.events.entry(decl.name.clone()) {
            Entry::Occupied(entry) => Err(StoreError::Duplicate {
                name: entry.key().clone(),
                existing: DeclarationKind::Event,
            }),
            Entry::Vacant(entry) => {
                let id = EventId::new(entry.index());
                entry.insert(decl);
                Ok(DeclarationId::Event(id))
            }
        }
    }

    fn insert_process(&mut self, decl: ProcessDeclaration) -> Result<DeclarationId, StoreError> {
        match self.processes.entry(decl.name.clone()) {
            Entry::Occupied(entry) => Err(StoreError::Duplicate {
                name: entry.key().clone(),
                existing: DeclarationKind::Process,
            }),
            Entry::Vacant(entry) => {
                let id = ProcessId::new(entry.index());
                entry.insert(decl);
                Ok(DeclarationId::Process(id))
            }
        }
    }

    fn insert_location(&mut self, decl: LocationDeclaration) -> Result<DeclarationId, StoreError> {
        self.check_process(decl.process)?;
        match self.locations.entry((decl.process, decl.name.clone())) {
            Entry::Occupied(entry) => Err(StoreError::Duplicate {
                name: entry.key().1.clone(),
                existing: DeclarationKind::Location,
            }),
            Entry::Vacant(entry) => {
                let id = LocationId::new(entry.index());
                entry.insert(decl);
                Ok(DeclarationId::Location(id))
            }
        }
    }

    fn insert_edge(&mut self, decl: EdgeDeclaration) -> Result<DeclarationId, StoreError> {
        self.check_process(decl.process)?;
        self.check_location(decl.process, decl.target)?;
        self.check_location(decl.process, decl.source)?;
        self.check_event(decl.event)?;
        let id = EdgeId::new(self.edges.len());
        self.edges.push(decl);
        Ok(DeclarationId::Edge(id))
    }

    fn insert_sync(&mut self, decl: SyncDeclaration) -> Result<DeclarationId, StoreError> {
        for SyncConstraint { process, event, .. } in &decl.constraints {
            self.check_process(*process)?;
            self.check_event(*event)?;
        }
        let id = SyncId::new(self.syncs.len());
        self.syncs.push(decl);
        Ok(DeclarationId::Sync(id))
    }

    fn check_process(&self, process: ProcessId) -> Result<(), StoreError> {
        if process.index() < self.processes.len() {
            Ok(())
        } else {
            Err(StoreError::UnknownProcess(process))
        }
    }

    fn check_event(&self, event: EventId) -> Result<(), StoreError> {
        if event.index() < self.events.len() {
            Ok(())
        } else {
            Err(StoreError::UnknownEvent(event))
        }
    }

    fn check_location(&self, process: ProcessId, location: LocationId) -> Result<(), StoreError> {
        match self.locations.get_index(location.index()) {
            Some((_, decl)) if decl.process == process => Ok(()),
            _ => Err(StoreError::UnknownLocation { process, location }),
        }
    }
}
