//! Writing the generated script to disk.
use std::path::Path;

use crate::error::OutputError;

/// Mode applied to the written script (`rwxr-xr-x`).
pub const SCRIPT_MODE: u32 = 0o755;

/// Write `script` to `path`, replacing any existing file, and make it
/// executable.
///
/// The write is not atomic. On non-Unix platforms the mode is left as is.
///
/// # Errors
///
/// Returns [`OutputError::Write`] if the file cannot be written and
/// [`OutputError::Permissions`] if its mode cannot be changed.
pub fn write_script(path: &Path, script: &str) -> Result<(), OutputError> {
    std::fs::write(path, script).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    make_executable(path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), OutputError> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(SCRIPT_MODE)).map_err(
        |source| OutputError::Permissions {
            path: path.to_path_buf(),
            source,
        },
    )
}

#[cfg(not(unix))]
fn make_executable(path: &Path) -> Result<(), OutputError> {
    tracing::debug!("not setting mode on {}: unsupported platform", path.display());
    Ok(())
}
