//! YAML file loading.
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;

/// Read `path` and parse it into a top-level mapping.
///
/// An empty document counts as an empty mapping so that a blank user config
/// simply inherits every default.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read,
/// [`ConfigError::Parse`] if it is not valid YAML, and
/// [`ConfigError::NotAMapping`] if the document is a scalar or a sequence.
pub fn load_mapping(path: &Path) -> Result<Mapping, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_mapping(&content, path)
}

/// Parse YAML text into a top-level mapping; `origin` is only used in errors.
///
/// # Errors
///
/// Same as [`load_mapping`], minus the I/O case.
pub fn parse_mapping(content: &str, origin: &Path) -> Result<Mapping, ConfigError> {
    let value: Value = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(ConfigError::NotAMapping {
            path: origin.to_path_buf(),
        }),
    }
}
