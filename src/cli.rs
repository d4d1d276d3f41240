//! Command-line interface.
use std::path::PathBuf;

use clap::Parser;

use crate::script::GenerateOptions;

/// Create a setup script for Linux from YAML files.
#[derive(Parser, Debug)]
#[command(
    name = "setup-gen",
    about = "Create a setup script for linux from yaml files",
    version
)]
pub struct Cli {
    /// Path to config yaml
    #[arg(
        short = 'i',
        long = "config_file",
        value_name = "config.yml",
        default_value = "config.yml"
    )]
    pub config_file: PathBuf,

    /// Path to output script
    #[arg(
        short = 'o',
        long = "output_file",
        value_name = "setup.sh",
        default_value = "setup.sh"
    )]
    pub output_file: PathBuf,

    /// Path to the default config the user config is merged onto
    #[arg(long, value_name = "default.yml", default_value = "default.yml")]
    pub defaults: PathBuf,

    /// Run apt quietly (`apt -qq`)
    #[arg(short, long)]
    pub quiet: bool,

    /// Target Windows Subsystem for Linux (skips the timezone)
    #[arg(long)]
    pub wsl: bool,

    /// Print the script to stdout instead of writing the output file
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Rendering options selected on the command line.
    #[must_use]
    pub const fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            quiet: self.quiet,
            wsl: self.wsl,
        }
    }
}
