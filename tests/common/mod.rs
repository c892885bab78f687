// tests/common/mod.rs
//! Shared fixtures for the binary-level tests.
#![allow(dead_code)]

use std::{
    fs,
    os::unix::fs::{PermissionsExt, symlink},
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

pub const RESET: &str = "\x1B[0m";
pub const BLUE: &str = "\x1B[34m";
pub const GREEN: &str = "\x1B[32m";

pub fn dirlist() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dirlist"))
}

/// Temporary directory with helpers for the entry kinds the listing colours.
#[derive(Debug)]
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap_or_else(|e| panic!("Failed to create temp dir: {e}")) }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_str(&self) -> &str {
        self.path().to_str().expect("temp paths are UTF-8")
    }

    pub fn file(&self, name: &str, contents: &str, mode: u32) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to create {path:?}: {e}"));
        fs::set_permissions(&path, fs::Permissions::from_mode(mode))
            .unwrap_or_else(|e| panic!("Failed to chmod {path:?}: {e}"));
        path
    }

    pub fn subdir(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::create_dir(&path).unwrap_or_else(|e| panic!("Failed to create {path:?}: {e}"));
        path
    }

    pub fn link(&self, name: &str, target: &str) -> PathBuf {
        let path = self.path().join(name);
        symlink(target, &path).unwrap_or_else(|e| panic!("Failed to link {path:?}: {e}"));
        path
    }
}

/// Output lines sorted, so assertions do not depend on directory order.
pub fn sorted_lines(stdout: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(stdout).lines().map(str::to_string).collect();
    lines.sort();
    lines
}
