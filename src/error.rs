//! Error type shared by the install and link steps.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the highlighting installer and the nanorc linker.
///
/// I/O failures keep the underlying `io::Error` as their source so callers
/// can still inspect the original cause (e.g. `PermissionDenied`).
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("file already exists: {} (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("{action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine home directory")]
    HomeDirUnavailable,
}

impl InstallError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = InstallError> = std::result::Result<T, E>;
