//! Installs the git highlighting definition for nano.
use crate::error::{InstallError, Result};
use crate::fsutil::{path_status, write_text};
use crate::paths::NanoPaths;
use crate::templates;
use std::path::PathBuf;

/// Write the embedded definition to `~/.gitcommit.nanorc`.
///
/// An existing file is left untouched unless `force` is set. Returns the
/// path that was written.
pub fn install_highlighting(paths: &NanoPaths, force: bool) -> Result<PathBuf> {
    let path = paths.highlighting_path();
    let status = path_status(&path)?;
    if status.exists() && !force {
        return Err(InstallError::AlreadyExists { path });
    }
    tracing::info!(
        path = %path.display(),
        overwrite = status.exists(),
        "installing highlighting file"
    );
    write_text(&path, templates::GITCOMMIT_NANORC)?;
    Ok(path)
}
