//! Default filling for user configs.
//!
//! The user config always wins. Keys missing from it are copied from the
//! defaults, nested mappings are filled recursively, and a key present on
//! both sides with a different value is kept as the user wrote it and
//! reported as an [`Override`].

use serde_yaml::{Mapping, Value};

/// A user value that differs from its default and was kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    /// Dotted key path, e.g. `ssh.key-size`.
    pub path: String,
    /// The user value that was retained.
    pub retained: Value,
}

/// Result of [`merge`].
#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    /// The effective configuration.
    pub config: Mapping,
    /// Every conflicting key, in depth-first default order.
    pub overrides: Vec<Override>,
}

/// Fill `config` with the keys of `defaults` it lacks.
///
/// Neither input is modified. Keys already present in `config` keep their
/// position; keys taken from `defaults` are appended in default order.
/// Recursion only happens where both sides hold a mapping; any other
/// mismatch is left untouched and logged at debug level.
#[must_use]
pub fn merge(config: &Mapping, defaults: &Mapping) -> Merged {
    let mut overrides = Vec::new();
    let config = merge_mapping(config, defaults, &[], &mut overrides);
    Merged { config, overrides }
}

fn merge_mapping(
    config: &Mapping,
    defaults: &Mapping,
    path: &[String],
    overrides: &mut Vec<Override>,
) -> Mapping {
    let mut merged = config.clone();
    for (key, fallback) in defaults {
        let mut key_path = path.to_vec();
        key_path.push(key_label(key));

        match (config.get(key), fallback) {
            (None, _) => {
                merged.insert(key.clone(), fallback.clone());
            }
            (Some(Value::Mapping(user)), Value::Mapping(nested)) => {
                let filled = merge_mapping(user, nested, &key_path, overrides);
                merged.insert(key.clone(), Value::Mapping(filled));
            }
            (Some(user), _) if user == fallback => {}
            (Some(user), _) => {
                let path = key_path.join(".");
                tracing::debug!("override {path}: {}", render_inline(user));
                overrides.push(Override {
                    path,
                    retained: user.clone(),
                });
            }
        }
    }
    merged
}

/// Render a mapping key as a path segment.
fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => render_inline(other),
    }
}

/// Render a value on a single line for diagnostics.
fn render_inline(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(render_inline).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}: {}", render_inline(k), render_inline(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, render_inline(&tagged.value)),
    }
}
