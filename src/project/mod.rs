pub mod file_loader;

pub use file_loader::{LoadError, TCK_EXT, load_system, validate_extension};
