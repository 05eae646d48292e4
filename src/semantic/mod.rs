//! # Semantic Analysis
//!
//! Turns the parser's productions into a validated declaration model:
//! name uniqueness per namespace, resolution of process, location and event
//! references, and numeric range checks.

mod attributes;
mod declarations;
mod ids;
mod numeric;
mod store;
mod system;
mod validator;

pub use attributes::{Attribute, Attributes};
pub use declarations::{
    ClockDeclaration, Declaration, DeclarationRef, EdgeDeclaration, EventDeclaration,
    IntDeclaration, LocationDeclaration, ProcessDeclaration, SyncConstraint, SyncDeclaration,
    SyncStrength,
};
pub use ids::{
    ClockId, DeclarationId, DeclarationKind, EdgeId, EventId, IntId, LocationId, ProcessId,
    SyncId, VariableId,
};
pub use numeric::{Integer, NumericError, Unsigned, parse_integer, parse_unsigned};
pub use store::{DeclarationStore, Namespace, StoreError};
pub use system::SystemDeclaration;
pub use validator::Validator;
