//! apt command lines.

/// Renders `apt` invocations, optionally in quiet mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apt {
    quiet: bool,
}

impl Apt {
    /// Create a renderer; `quiet` adds `-qq` to every invocation.
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// The command prefix, `apt` or `apt -qq`.
    #[must_use]
    pub const fn program(self) -> &'static str {
        if self.quiet { "apt -qq" } else { "apt" }
    }

    /// Refresh the package index.
    #[must_use]
    pub fn update(self) -> String {
        format!("{} update", self.program())
    }

    /// Install `packages` in one command, or `None` for an empty list.
    #[must_use]
    pub fn install(self, packages: &[String]) -> Option<String> {
        if packages.is_empty() {
            return None;
        }
        Some(format!("{} install -y {}", self.program(), packages.join(" ")))
    }
}

/// Join post-install commands one per line, verbatim.
#[must_use]
pub fn post_install(commands: &[String]) -> String {
    commands.join("\n")
}
