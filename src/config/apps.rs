//! Third-party applications and their apt repositories.
use serde::Deserialize;

/// One application entry under `apps`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct App {
    /// Packages installed for this app.
    pub install: Vec<String>,
    /// Shell commands run after installation, verbatim.
    #[serde(default)]
    pub post_install: Option<Vec<String>>,
    /// Signed apt repository providing the packages.
    #[serde(default)]
    pub gpg: Option<Gpg>,
}

/// Signing key and source line of an apt repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Gpg {
    /// URL of the ASCII-armored signing key.
    pub key: String,
    /// Remainder of the `deb` line (URI, suite, components).
    pub tee: String,
}
