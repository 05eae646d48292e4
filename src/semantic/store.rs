//! Symbol table and storage for every declaration of a system

mod lookup;
mod table;

pub use lookup::Namespace;
pub use table::{DeclarationStore, StoreError};
