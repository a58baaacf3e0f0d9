//! Typed paths into the user's home directory.
//!
//! Both files the tool touches live directly under `$HOME`; keeping the
//! layout in one place lets tests root it at a temporary directory.
use crate::error::{InstallError, Result};
use std::path::PathBuf;

/// File name of the git highlighting definition.
pub const HIGHLIGHTING_FILE_NAME: &str = ".gitcommit.nanorc";

/// File name of nano's per-user configuration.
pub const NANORC_FILE_NAME: &str = ".nanorc";

/// Locations of the highlighting definition and the nano config.
#[derive(Debug, Clone)]
pub struct NanoPaths {
    home: PathBuf,
}

impl NanoPaths {
    /// Create a path helper rooted at an explicit home directory.
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    /// Resolve the current user's home directory.
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(InstallError::HomeDirUnavailable)?;
        tracing::debug!(home = %home.display(), "resolved home directory");
        Ok(Self::new(home))
    }

    /// Return the `~/.gitcommit.nanorc` path.
    pub fn highlighting_path(&self) -> PathBuf {
        self.home.join(HIGHLIGHTING_FILE_NAME)
    }

    /// Return the `~/.nanorc` path.
    pub fn nanorc_path(&self) -> PathBuf {
        self.home.join(NANORC_FILE_NAME)
    }
}
