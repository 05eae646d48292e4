use smol_str::SmolStr;

use super::table::DeclarationStore;
use crate::semantic::declarations::{
    ClockDeclaration, DeclarationRef, EdgeDeclaration, EventDeclaration, IntDeclaration,
    LocationDeclaration, ProcessDeclaration, SyncDeclaration,
};
use crate::semantic::ids::{
    ClockId, DeclarationId, EdgeId, EventId, IntId, LocationId, ProcessId, SyncId, VariableId,
};

/// Where a name is looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Clocks and ints
    Variable,
    Event,
    Process,
    /// Locations of one process
    Location(ProcessId),
}

impl DeclarationStore {
    // ============================================================
    // Name lookups
    // ============================================================

    pub fn lookup(&self, namespace: Namespace, name: &str) -> Option<DeclarationId> {
        match namespace {
            Namespace::Variable => self.find_variable_id(name).map(DeclarationId::from),
            Namespace::Event => self.find_event_id(name).map(DeclarationId::Event),
            Namespace::Process => self.find_process_id(name).map(DeclarationId::Process),
            Namespace::Location(process) => self
                .find_location_id(process, name)
                .map(DeclarationId::Location),
        }
    }

    pub fn find_variable_id(&self, name: &str) -> Option<VariableId> {
        self.variables.get(name).copied()
    }

    pub fn find_clock(&self, name: &str) -> Option<&ClockDeclaration> {
        match self.find_variable_id(name)? {
            VariableId::Clock(id) => self.get_clock(id),
            VariableId::Int(_) => None,
        }
    }

    pub fn find_int(&self, name: &str) -> Option<&IntDeclaration> {
        match self.find_variable_id(name)? {
            VariableId::Int(id) => self.get_int(id),
            VariableId::Clock(_) => None,
        }
    }

    pub fn find_event_id(&self, name: &str) -> Option<EventId> {
        self.events.get_index_of(name).map(EventId::new)
    }

    pub fn find_event(&self, name: &str) -> Option<&EventDeclaration> {
        self.events.get(name)
    }

    pub fn find_process_id(&self, name: &str) -> Option<ProcessId> {
        self.processes.get_index_of(name).map(ProcessId::new)
    }

    pub fn find_process(&self, name: &str) -> Option<&ProcessDeclaration> {
        self.processes.get(name)
    }

    pub fn find_location_id(&self, process: ProcessId, name: &str) -> Option<LocationId> {
        self.locations
            .get_index_of(&(process, SmolStr::new(name)))
            .map(LocationId::new)
    }

    pub fn find_location(&self, process: ProcessId, name: &str) -> Option<&LocationDeclaration> {
        self.locations.get(&(process, SmolStr::new(name)))
    }

    // ============================================================
    // Id lookups
    // ============================================================

    pub fn get_clock(&self, id: ClockId) -> Option<&ClockDeclaration> {
        self.clocks.get(id.index())
    }

    pub fn get_int(&self, id: IntId) -> Option<&IntDeclaration> {
        self.ints.get(id.index())
    }

    pub fn get_event(&self, id: EventId) -> Option<&EventDeclaration> {
        self.events.get_index(id.index()).map(|(_, decl)| decl)
    }

    pub fn get_process(&self, id: ProcessId) -> Option<&ProcessDeclaration> {
        self.processes.get_index(id.index()).map(|(_, decl)| decl)
    }

    pub fn get_location(&self, id: LocationId) -> Option<&LocationDeclaration> {
        self.locations.get_index(id.index()).map(|(_, decl)| decl)
    }

    pub fn get_edge(&self, id: EdgeId) -> Option<&EdgeDeclaration> {
        self.edges.get(id.index())
    }

    pub fn get_sync(&self, id: SyncId) -> Option<&SyncDeclaration> {
        self.syncs.get(id.index())
    }

    pub fn get(&self, id: DeclarationId) -> Option<DeclarationRef<'_>> {
        match id {
            DeclarationId::Clock(id) => self.get_clock(id).map(DeclarationRef::Clock),
            DeclarationId::Int(id) => self.get_int(id).map(DeclarationRef::Int),
            DeclarationId::Event(id) => self.get_event(id).map(DeclarationRef::Event),
            DeclarationId::Process(id) => self.get_process(id).map(DeclarationRef::Process),
            DeclarationId::Location(id) => self.get_location(id).map(DeclarationRef::Location),
            DeclarationId::Edge(id) => self.get_edge(id).map(DeclarationRef::Edge),
            DeclarationId::Sync(id) => self.get_sync(id).map(DeclarationRef::Sync),
        }
    }

    // ============================================================
    // Enumeration
    // ============================================================

    /// Number of declarations of every kind
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Every declaration in insertion order
    pub fn declarations(&self) -> impl Iterator<Item = DeclarationRef<'_>> {
        self.order.iter().filter_map(|id| self.get(*id))
    }

    pub fn clocks(&self) -> &[ClockDeclaration] {
        &self.clocks
    }

    pub fn ints(&self) -> &[IntDeclaration] {
        &self.ints
    }

    pub fn events(&self) -> impl Iterator<Item = &EventDeclaration> {
        self.events.values()
    }

    pub fn processes(&self) -> impl Iterator<Item = &ProcessDeclaration> {
        self.processes.values()
    }

    pub fn locations(&self) -> impl Iterator<Item = &LocationDeclaration> {
        self.locations.values()
    }

    /// Locations of one process, in declaration order
    pub fn locations_of(&self, process: ProcessId) -> impl Iterator<Item = &LocationDeclaration> {
        self.locations
            .values()
            .filter(move |decl| decl.process == process)
    }

    pub fn edges(&self) -> &[EdgeDeclaration] {
        &self.edges
    }

    pub fn syncs(&self) -> &[SyncDeclaration] {
        &self.syncs
    }
}
