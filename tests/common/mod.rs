// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed workspace holding a default config,
// a user config and the output path, plus a fluent builder so each test can
// describe only the YAML it cares about.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use setup_gen::commands::generate;
use setup_gen::error::SetupError;
use setup_gen::logging::Logger;
use setup_gen::script::GenerateOptions;

/// Default config used unless a test overrides it.
pub const DEFAULT_YML: &str = "\
timezone: Europe/Berlin
basics:
  - curl
  - git
ssh:
  authorized-keys: []
  generate: false
apps: {}
";

/// An isolated workspace backed by a [`tempfile::TempDir`].
pub struct IntegrationTestContext {
    /// Temporary directory containing the YAML files.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Path of the default config.
    pub fn defaults_path(&self) -> PathBuf {
        self.root.path().join("default.yml")
    }

    /// Path of the user config.
    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config.yml")
    }

    /// Path the script is written to.
    pub fn output_path(&self) -> PathBuf {
        self.root.path().join("setup.sh")
    }

    /// Workspace root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Render the script without writing it.
    pub fn render(&self, options: GenerateOptions) -> Result<String, SetupError> {
        generate::render(
            &self.config_path(),
            &self.defaults_path(),
            options,
            &Logger::new(),
        )
    }

    /// Render with default options, panicking on failure.
    pub fn render_ok(&self) -> String {
        self.render(GenerateOptions::default())
            .expect("render script")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin with [`DEFAULT_YML`] and an empty user config.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::write(root.path().join("default.yml"), DEFAULT_YML).expect("write default.yml");
        std::fs::write(root.path().join("config.yml"), "").expect("write config.yml");
        Self {
            ctx: IntegrationTestContext { root },
        }
    }

    /// Replace the default config.
    pub fn with_defaults(self, content: &str) -> Self {
        std::fs::write(self.ctx.defaults_path(), content).expect("write default.yml");
        self
    }

    /// Replace the user config.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.ctx.config_path(), content).expect("write config.yml");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
