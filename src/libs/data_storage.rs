//! Per-user data directory holding `punch.db` and `config.json`.
//!
//! | Platform | Location                                          |
//! |----------|---------------------------------------------------|
//! | Linux    | `$XDG_DATA_HOME/punch` or `~/.local/share/punch`  |
//! | macOS    | `~/Library/Application Support/punch`             |
//! | Windows  | `%LOCALAPPDATA%\punch`                            |
//!
//! `PUNCH_DATA_DIR` replaces the platform location entirely.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "punch";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "PUNCH_DATA_DIR";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        if let Some(dir) = var(DATA_DIR_ENV).ok().filter(|dir| !dir.trim().is_empty()) {
            return Self::at(dir);
        }

        let home = || var("HOME").unwrap_or_else(|_| ".".into());
        let root = match OS {
            "windows" => PathBuf::from(var("LOCALAPPDATA").unwrap_or_else(|_| ".".into())),
            "macos" => Path::new(&home()).join("Library/Application Support"),
            _ => match var("XDG_DATA_HOME") {
                Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
                _ => Path::new(&home()).join(".local/share"),
            },
        };

        Self::at(root.join(APP_NAME))
    }

    /// Storage rooted at an explicit directory.
    pub fn at<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory on demand.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
            tracing::debug!(path = %self.base_path.display(), "data directory created");
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_path_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = DataStorage::at(temp_dir.path().join("nested").join("punch"));

        let path = storage.get_path("punch.db").unwrap();

        assert!(storage.base_path().is_dir());
        assert_eq!(path, storage.base_path().join("punch.db"));
    }
}
