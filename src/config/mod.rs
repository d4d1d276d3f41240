//! Configuration loading: read the default and user YAML files, fill the
//! user config from the defaults, and deserialize the result.
pub mod apps;
pub mod merge;
pub mod ssh;
pub mod yaml;

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;

/// The effective machine description after merging.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Timezone identifier such as `Europe/Berlin`; only needed outside WSL mode.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Base packages installed before anything else.
    pub basics: Vec<String>,
    /// SSH setup.
    pub ssh: ssh::Ssh,
    /// Third-party applications keyed by name, in file order.
    pub apps: IndexMap<String, apps::App>,
}

impl Config {
    /// Load `defaults_path` and `config_path`, merge them and deserialize.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or parsed, or if the
    /// merged mapping does not match the schema.
    pub fn load(config_path: &Path, defaults_path: &Path) -> Result<Self, ConfigError> {
        let defaults = yaml::load_mapping(defaults_path)?;
        let user = yaml::load_mapping(config_path)?;
        Self::from_layers(&user, &defaults)
    }

    /// Merge an in-memory user mapping onto defaults and deserialize.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Schema`] if a required key is missing or has
    /// the wrong type.
    pub fn from_layers(user: &Mapping, defaults: &Mapping) -> Result<Self, ConfigError> {
        let merged = merge::merge(user, defaults);
        if !merged.overrides.is_empty() {
            tracing::debug!("{} default(s) overridden by user config", merged.overrides.len());
        }
        Self::from_mapping(merged.config)
    }

    /// Deserialize an already merged mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Schema`] on a schema mismatch.
    pub fn from_mapping(mapping: Mapping) -> Result<Self, ConfigError> {
        serde_yaml::from_value(Value::Mapping(mapping))
            .map_err(|source| ConfigError::Schema { source })
    }
}
