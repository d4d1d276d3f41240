//! The generate command: load, merge, render, write.
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::SetupError;
use crate::logging::{Logger, SectionStatus};
use crate::output;
use crate::script::{self, GenerateOptions};

/// Run the generator with the parsed command line.
///
/// # Errors
///
/// Returns an error if loading, rendering or writing fails. Nothing is
/// written unless the whole script rendered successfully.
pub fn run(cli: &Cli, log: &Logger) -> Result<()> {
    let version = option_env!("SETUP_GEN_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.debug(&format!("setup-gen {version}"));

    let options = cli.generate_options();
    let script = render(&cli.config_file, &cli.defaults, options, log)?;

    if cli.dry_run {
        log.stage("Dry run");
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(script.as_bytes())
            .and_then(|()| stdout.flush())
            .context("writing script to stdout")?;
    } else {
        log.stage("Writing script");
        output::write_script(&cli.output_file, &script).map_err(SetupError::from)?;
        log.info(&format!("wrote {}", cli.output_file.display()));
    }

    log.print_summary();
    Ok(())
}

/// Load both config files and render the script text.
///
/// Records one summary entry per section on `log`.
///
/// # Errors
///
/// Returns [`SetupError::Config`] if loading fails and
/// [`SetupError::Generate`] if a section cannot be rendered.
pub fn render(
    config_path: &Path,
    defaults_path: &Path,
    options: GenerateOptions,
    log: &Logger,
) -> Result<String, SetupError> {
    log.stage("Loading configuration");
    log.info(&format!(
        "{} onto {}",
        config_path.display(),
        defaults_path.display()
    ));
    let config = Config::load(config_path, defaults_path)?;
    log.info(&format!(
        "{} base packages, {} apps",
        config.basics.len(),
        config.apps.len()
    ));
    if options.wsl {
        log.info("WSL mode: timezone will not be set");
    }

    log.stage("Generating script");
    let fragments = script::render_sections(&config, options)?;
    for fragment in &fragments {
        let name = fragment.section.name();
        if fragment.text.is_some() {
            let lines = fragment.line_count();
            let unit = if lines == 1 { "line" } else { "lines" };
            log.record_section(name, SectionStatus::Generated, Some(&format!("{lines} {unit}")));
        } else {
            log.record_section(
                name,
                SectionStatus::Skipped,
                Some(fragment.section.skip_reason(options)),
            );
        }
    }
    Ok(script::assemble(&fragments))
}
