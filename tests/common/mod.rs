//! Shared test infrastructure for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway home directory that `dev` runs against.
pub struct TestHome {
    dir: TempDir,
}

/// Captured result of one `dev` invocation.
#[derive(Debug)]
pub struct RunResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp home"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn highlighting_path(&self) -> PathBuf {
        self.path().join(".gitcommit.nanorc")
    }

    pub fn nanorc_path(&self) -> PathBuf {
        self.path().join(".nanorc")
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
    }

    /// Run the `dev` binary with `$HOME` pointed at this directory.
    pub fn run(&self, args: &[&str]) -> RunResult {
        Command::new(env!("CARGO_BIN_EXE_dev"))
            .args(args)
            .env("HOME", self.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("spawn dev")
            .into()
    }

    pub fn install(&self, force: bool) -> RunResult {
        let mut args = vec!["git-nano-highlight"];
        if force {
            args.push("--force");
        }
        self.run(&args)
    }

    /// The include line `dev` writes for this home.
    pub fn directive(&self) -> String {
        format!(
            "include \"{}\" # automatically added by dev",
            self.highlighting_path().display()
        )
    }
}
