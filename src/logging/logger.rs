//! Structured logger with section summary collection.
use std::sync::Mutex;

use super::STAGE_TARGET;
use super::types::{SectionEntry, SectionStatus};

/// Console logger that also remembers what each script section produced.
#[derive(Debug, Default)]
pub struct Logger {
    sections: Mutex<Vec<SectionEntry>>,
}

impl Logger {
    /// Create an empty logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major step of the run).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (shown on the console only with `--verbose`).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Record a section result for the summary.
    pub fn record_section(&self, name: &str, status: SectionStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.sections.lock() {
            guard.push(SectionEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Return a clone of all recorded section entries.
    #[must_use]
    pub fn section_entries(&self) -> Vec<SectionEntry> {
        self.sections.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Count sections with the given status.
    #[must_use]
    pub fn count(&self, status: SectionStatus) -> usize {
        self.sections
            .lock()
            .map_or(0, |guard| guard.iter().filter(|s| s.status == status).count())
    }

    /// Log the summary of all recorded sections.
    pub fn print_summary(&self) {
        let sections = self.section_entries();
        if sections.is_empty() {
            return;
        }

        self.stage("Summary");
        for section in &sections {
            let (icon, color) = match section.status {
                SectionStatus::Generated => ("✓", "\x1b[32m"),
                SectionStatus::Skipped => ("○", "\x1b[33m"),
            };
            let suffix = section
                .message
                .as_ref()
                .map(|m| format!(" \x1b[2m({m})\x1b[0m"))
                .unwrap_or_default();
            self.info(&format!("{color}{icon}\x1b[0m {}{suffix}", section.name));
        }
        self.info(&format!(
            "{} generated, {} skipped",
            self.count(SectionStatus::Generated),
            self.count(SectionStatus::Skipped)
        ));
    }
}
