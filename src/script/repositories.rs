//! Signed third-party apt repositories.
use indexmap::IndexMap;

use crate::config::apps::App;

/// Directory receiving dearmored repository keys.
pub const KEYRING_DIR: &str = "/etc/apt/keyrings";

/// Directory receiving apt source lists.
pub const SOURCES_DIR: &str = "/etc/apt/sources.list.d";

/// Render key download and source registration for every app with `gpg`.
///
/// Returns `None` when no app declares a repository.
#[must_use]
pub fn gpg_keys(apps: &IndexMap<String, App>) -> Option<String> {
    let mut out = vec!["# gpg keys".to_string(), format!("mkdir -p {KEYRING_DIR}")];
    let mut registered = 0usize;
    for (name, app) in apps {
        let Some(gpg) = &app.gpg else {
            continue;
        };
        let keyring = format!("{KEYRING_DIR}/{name}.gpg");
        out.push(format!("# {name}"));
        out.push(format!("curl -fsSL {} | gpg --dearmor -o {keyring}", gpg.key));
        out.push(format!(
            "echo \"deb [arch=$(dpkg --print-architecture) signed-by={keyring}]\" {} | tee {SOURCES_DIR}/{name}.list > /dev/null",
            gpg.tee
        ));
        tracing::debug!("adding {name} gpg keys");
        registered += 1;
    }
    (registered > 0).then(|| out.join("\n"))
}
