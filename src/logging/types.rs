//! Summary records collected while generating a script.

/// Outcome of rendering one script section.
#[derive(Debug, Clone)]
pub struct SectionEntry {
    /// Human-readable section name.
    pub name: String,
    /// Whether the section contributed text.
    pub status: SectionStatus,
    /// Line count or skip reason.
    pub message: Option<String>,
}

/// Status of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    /// The section emitted at least one line.
    Generated,
    /// The section had nothing to emit.
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_status_equality() {
        assert_eq!(SectionStatus::Generated, SectionStatus::Generated);
        assert_ne!(SectionStatus::Generated, SectionStatus::Skipped);
    }

    #[test]
    fn section_entry_clone() {
        let entry = SectionEntry {
            name: "ssh".to_string(),
            status: SectionStatus::Generated,
            message: Some("3 lines".to_string()),
        };
        let cloned = entry.clone();
        assert_eq!(cloned.name, entry.name);
        assert_eq!(cloned.status, entry.status);
        assert_eq!(cloned.message, entry.message);
    }
}
