use crate::error::{InstallError, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Mode applied to files this tool creates.
#[cfg(unix)]
pub const FILE_MODE: u32 = 0o644;

/// Outcome of an existence probe that could be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    Exists,
    NotExists,
}

impl PathStatus {
    pub fn exists(self) -> bool {
        matches!(self, PathStatus::Exists)
    }
}

/// Probe `path` without following symlinks.
///
/// Only `NotFound` maps to `NotExists`; any other failure (permission denied,
/// a file used as a directory component) is returned as an error.
pub fn path_status(path: &Path) -> Result<PathStatus> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(PathStatus::Exists),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(PathStatus::NotExists),
        Err(err) => Err(InstallError::io("stat", path, err)),
    }
}

/// Replace the contents of `path` with `bytes`, creating it if needed.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    let mut file = options
        .open(path)
        .map_err(|err| InstallError::io("open", path, err))?;
    file.write_all(bytes)
        .map_err(|err| InstallError::io("write", path, err))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    write_bytes(path, text.as_bytes())
}

/// Read `path` as raw bytes; config files are not required to be UTF-8.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|err| InstallError::io("read", path, err))
}
