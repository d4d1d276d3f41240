//! Domain-specific error types for the script generator.
//!
//! Internal modules return typed errors ([`ConfigError`], [`GenerateError`],
//! [`OutputError`]) while the command handler at the CLI boundary converts
//! them to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! SetupError
//! ├── Config(ConfigError)     — reading, parsing, schema mismatch
//! ├── Generate(GenerateError) — keys required while rendering sections
//! └── Output(OutputError)     — writing the script, setting its mode
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a generator run.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Loading or merging the YAML configuration failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A section could not be rendered.
    #[error("Generation error: {0}")]
    Generate(#[from] GenerateError),

    /// The script could not be written.
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Errors that arise while loading a YAML config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("IO error reading config file {}: {source}", .path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid YAML.
    #[error("Invalid YAML in {}: {source}", .path.display())]
    Parse {
        /// Path to the offending file.
        path: PathBuf,
        /// Underlying parser error.
        source: serde_yaml::Error,
    },

    /// The top-level YAML value is not a mapping.
    #[error("Config file {} must contain a mapping at the top level", .path.display())]
    NotAMapping {
        /// Path to the offending file.
        path: PathBuf,
    },

    /// The merged configuration does not fit the expected schema.
    #[error("Invalid configuration: {source}")]
    Schema {
        /// Underlying deserialization error (names the missing or mistyped key).
        source: serde_yaml::Error,
    },
}

/// Errors that arise while rendering script sections.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A key needed by a section is absent from the merged config.
    #[error("Missing required key '{0}'")]
    MissingKey(String),
}

/// Errors that arise while writing the generated script.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The script file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The script was written but its mode could not be changed.
    #[error("Failed to set permissions on {}: {source}", .path.display())]
    Permissions {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
