//! Per-application installation.
use indexmap::IndexMap;

use super::apt::{Apt, post_install};
use crate::config::apps::App;

/// Render install and post-install commands for every app, in order.
///
/// Returns `None` when there are no apps.
#[must_use]
pub fn apps(apps: &IndexMap<String, App>, apt: Apt) -> Option<String> {
    if apps.is_empty() {
        return None;
    }
    let mut out = vec!["# installing apps".to_string()];
    for (name, app) in apps {
        out.push(format!("# {name}"));
        out.extend(apt.install(&app.install));
        if let Some(commands) = &app.post_install {
            out.push(post_install(commands));
        }
    }
    Some(out.join("\n"))
}
