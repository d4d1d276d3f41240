//! Provisioning script generator.
//!
//! Turns a declarative YAML description of a Debian-family machine
//! (timezone, base packages, SSH setup, third-party apt repositories and
//! applications) into a single shell script. A user config is merged onto a
//! default config, and the result is rendered section by section in a fixed
//! order.
//!
//! - **[`config`]**: load YAML, fill user values from defaults, deserialize
//! - **[`script`]**: render and assemble the script sections
//! - **[`output`]**: write the script and mark it executable
//! - **[`commands`]**: the end-to-end pipeline behind the CLI
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod script;
