use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::{Parse, ParseOptions, parse_system_with};

/// Extension of system declaration files
pub const TCK_EXT: &str = "tck";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Get the file extension of `path`, if it has one
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Accept only `.tck` files
pub fn validate_extension(path: &Path) -> Result<(), LoadError> {
    match get_extension(path) {
        Some(TCK_EXT) => Ok(()),
        _ => Err(LoadError::UnsupportedExtension(path.to_path_buf())),
    }
}

pub fn load_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and parse a system declaration file.
///
/// Diagnostics are prefixed with the path unless `options` already names the
/// source. Parse errors are reported in the returned [`Parse`]; only file
/// problems produce an `Err`.
pub fn load_system(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Parse, LoadError> {
    let path = path.as_ref();
    validate_extension(path)?;
    let content = load_file(path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded system file");

    let options = match options.source_name {
        Some(_) => options.clone(),
        None => options.clone().with_source_name(path.display().to_string()),
    };
    Ok(parse_system_with(&content, &options))
}
