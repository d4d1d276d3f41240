//! Shell script generation.
//!
//! Each section renders one fragment of the script from the merged
//! [`Config`]. Sections always run in [`Section::ORDER`]; a section with
//! nothing to emit produces no fragment rather than an empty line.
pub mod apps;
pub mod apt;
pub mod repositories;
pub mod ssh;
pub mod timezone;

use std::fmt;

use crate::config::Config;
use crate::error::GenerateError;
use apt::Apt;

/// Settings that change how the script is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Run apt with `-qq`.
    pub quiet: bool,
    /// Target is Windows Subsystem for Linux: leave the timezone alone.
    pub wsl: bool,
}

/// One concern of the generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Initial package index refresh.
    SystemUpdate,
    /// `timedatectl set-timezone`.
    Timezone,
    /// Base packages from `basics`.
    Basics,
    /// SSH directory, authorized keys, key generation.
    Ssh,
    /// Repository keys and source lists.
    GpgKeys,
    /// Package index refresh picking up the new repositories.
    RepositoryUpdate,
    /// Per-app install and post-install.
    Apps,
}

impl Section {
    /// The fixed order sections appear in the script.
    pub const ORDER: [Self; 7] = [
        Self::SystemUpdate,
        Self::Timezone,
        Self::Basics,
        Self::Ssh,
        Self::GpgKeys,
        Self::RepositoryUpdate,
        Self::Apps,
    ];

    /// Short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SystemUpdate => "system update",
            Self::Timezone => "timezone",
            Self::Basics => "base packages",
            Self::Ssh => "ssh",
            Self::GpgKeys => "gpg keys",
            Self::RepositoryUpdate => "repository update",
            Self::Apps => "apps",
        }
    }

    /// Render this section, or `None` if it has nothing to emit.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingKey`] if the section needs a key the
    /// config does not provide.
    pub fn render(
        self,
        config: &Config,
        options: GenerateOptions,
    ) -> Result<Option<String>, GenerateError> {
        let apt = Apt::new(options.quiet);
        let text = match self {
            Self::SystemUpdate | Self::RepositoryUpdate => Some(apt.update()),
            Self::Timezone => {
                if options.wsl {
                    None
                } else {
                    let tz = config
                        .timezone
                        .as_deref()
                        .ok_or_else(|| GenerateError::MissingKey("timezone".to_string()))?;
                    Some(timezone::timezone(tz))
                }
            }
            Self::Basics => apt.install(&config.basics),
            Self::Ssh => Some(ssh::ssh(&config.ssh)?),
            Self::GpgKeys => repositories::gpg_keys(&config.apps),
            Self::Apps => apps::apps(&config.apps, apt),
        };
        Ok(text)
    }

    /// Why a section rendered nothing, for the run summary.
    #[must_use]
    pub const fn skip_reason(self, options: GenerateOptions) -> &'static str {
        match self {
            Self::Timezone if options.wsl => "WSL mode",
            Self::Basics => "no base packages",
            Self::GpgKeys => "no third-party repositories",
            Self::Apps => "no apps",
            _ => "nothing to emit",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Which section produced it.
    pub section: Section,
    /// The shell text, `None` if the section was skipped.
    pub text: Option<String>,
}

impl Fragment {
    /// Number of lines this fragment contributes.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.as_deref().map_or(0, |t| t.lines().count())
    }
}

/// Render every section in [`Section::ORDER`].
///
/// # Errors
///
/// Fails on the first section that cannot be rendered.
pub fn render_sections(
    config: &Config,
    options: GenerateOptions,
) -> Result<Vec<Fragment>, GenerateError> {
    Section::ORDER
        .iter()
        .map(|&section| {
            Ok(Fragment {
                section,
                text: section.render(config, options)?,
            })
        })
        .collect()
}

/// Join fragments with newlines; the script ends with a single newline.
#[must_use]
pub fn assemble(fragments: &[Fragment]) -> String {
    let mut script = fragments
        .iter()
        .filter_map(|f| f.text.as_deref())
        .collect::<Vec<_>>()
        .join("\n");
    script.push('\n');
    script
}

/// Render the whole script for `config`.
///
/// # Errors
///
/// Returns [`GenerateError::MissingKey`] if a required key is absent.
pub fn generate(config: &Config, options: GenerateOptions) -> Result<String, GenerateError> {
    Ok(assemble(&render_sections(config, options)?))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn config(text: &str) -> Config {
        Config::from_mapping(serde_yaml::from_str(text).unwrap()).unwrap()
    }

    const MINIMAL: &str = "\
timezone: Europe/Berlin
basics: [curl, git]
ssh:
  authorized-keys: []
  generate: false
apps: {}
";

    const WITH_APPS: &str = "\
timezone: UTC
basics: [curl]
ssh:
  authorized-keys: [ssh-ed25519 AAAA me]
  generate: false
apps:
  nginx:
    install: [nginx]
    gpg:
      key: https://x/key.gpg
      tee: deb.list
";

    #[test]
    fn section_order_is_fixed() {
        let names: Vec<&str> = Section::ORDER.iter().map(|s| s.name()).collect();
        insta::assert_snapshot!(names.join("\n"), @r"
        system update
        timezone
        base packages
        ssh
        gpg keys
        repository update
        apps
        ");
    }

    #[test]
    fn minimal_script() {
        let script = generate(&config(MINIMAL), GenerateOptions::default()).unwrap();
        assert_eq!(
            script,
            "apt update\n\
             timedatectl set-timezone Europe/Berlin\n\
             apt install -y curl git\n\
             mkdir -p $HOME/.ssh\n\
             apt update\n"
        );
    }

    #[test]
    fn begins_and_ends_with_update_without_apps() {
        let script = generate(&config(MINIMAL), GenerateOptions::default()).unwrap();
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines.first(), Some(&"apt update"));
        assert_eq!(lines.last(), Some(&"apt update"));
    }

    #[test]
    fn wsl_mode_removes_only_the_timezone_line() {
        let cfg = config(WITH_APPS);
        let normal = generate(&cfg, GenerateOptions::default()).unwrap();
        let wsl = generate(
            &cfg,
            GenerateOptions {
                wsl: true,
                ..GenerateOptions::default()
            },
        )
        .unwrap();

        let expected: Vec<&str> = normal
            .lines()
            .filter(|l| !l.starts_with("timedatectl"))
            .collect();
        assert_eq!(wsl.lines().collect::<Vec<_>>(), expected);
        assert_eq!(normal.lines().count(), wsl.lines().count() + 1);
    }

    #[test]
    fn wsl_mode_does_not_need_a_timezone() {
        let mut cfg = config(MINIMAL);
        cfg.timezone = None;
        let options = GenerateOptions {
            wsl: true,
            quiet: false,
        };
        assert!(generate(&cfg, options).is_ok());
        assert!(matches!(
            generate(&cfg, GenerateOptions::default()),
            Err(GenerateError::MissingKey(key)) if key == "timezone"
        ));
    }

    #[test]
    fn quiet_mode_applies_to_every_apt_call() {
        let script = generate(
            &config(WITH_APPS),
            GenerateOptions {
                quiet: true,
                wsl: false,
            },
        )
        .unwrap();
        let apt_lines: Vec<&str> = script.lines().filter(|l| l.starts_with("apt")).collect();
        assert_eq!(apt_lines.len(), 4);
        assert!(apt_lines.iter().all(|l| l.starts_with("apt -qq ")));
    }

    #[test]
    fn gpg_block_precedes_second_update_and_installs() {
        let script = generate(&config(WITH_APPS), GenerateOptions::default()).unwrap();
        let keyring = script.find("/etc/apt/keyrings/nginx.gpg").unwrap();
        let source = script.find("/etc/apt/sources.list.d/nginx.list").unwrap();
        let second_update = script.rfind("apt update").unwrap();
        let install = script.find("apt install -y nginx").unwrap();
        assert!(keyring < source);
        assert!(source < second_update);
        assert!(second_update < install);
    }

    #[test]
    fn skipped_sections_have_no_text() {
        let fragments = render_sections(
            &config(MINIMAL),
            GenerateOptions {
                wsl: true,
                quiet: false,
            },
        )
        .unwrap();
        let skipped: Vec<Section> = fragments
            .iter()
            .filter(|f| f.text.is_none())
            .map(|f| f.section)
            .collect();
        assert_eq!(
            skipped,
            vec![Section::Timezone, Section::GpgKeys, Section::Apps]
        );
        assert_eq!(fragments[2].line_count(), 1);
    }

    #[test]
    fn skip_reasons() {
        let wsl = GenerateOptions {
            wsl: true,
            quiet: false,
        };
        assert_eq!(Section::Timezone.skip_reason(wsl), "WSL mode");
        assert_eq!(
            Section::GpgKeys.skip_reason(GenerateOptions::default()),
            "no third-party repositories"
        );
    }
}
