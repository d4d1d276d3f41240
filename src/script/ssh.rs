//! SSH directory, authorized keys and key generation.
use crate::config::ssh::Ssh;
use crate::error::GenerateError;

/// Directory holding the user's SSH files, expanded by the shell.
pub const SSH_DIR: &str = "$HOME/.ssh";

/// Render the SSH setup commands.
///
/// Keys and key-generation values are inserted verbatim.
///
/// # Errors
///
/// Returns [`GenerateError::MissingKey`] when `generate` is set but a
/// key-generation field is absent.
pub fn ssh(config: &Ssh) -> Result<String, GenerateError> {
    let mut out = vec![format!("mkdir -p {SSH_DIR}")];
    for key in &config.authorized_keys {
        out.push(format!("echo \"{key}\" >> {SSH_DIR}/authorized_keys"));
    }
    if let Some(params) = config.keygen()? {
        out.push(format!(
            "ssh-keygen -q -t {} -b {} -f {} -N \"{}\" -C \"{}\"",
            params.algorithm, params.key_size, params.keyfile, params.passphrase, params.comment
        ));
    }
    Ok(out.join("\n"))
}
