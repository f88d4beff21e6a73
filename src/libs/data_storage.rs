//! Platform data directory resolution.
//!
//! Configuration and the SQLite store live under one per-user directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\poolside\poolside`
//! - **macOS**: `~/Library/Application Support/poolside/poolside`
//! - **Linux**: `~/.local/share/poolside/poolside`
//!
//! `POOLSIDE_HOME` replaces the whole path when set.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::PathBuf;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const VENDOR_NAME: &str = APP_METADATA_OWNER;
pub const APP_NAME: &str = APP_METADATA_NAME;
pub const APP_VERSION: &str = APP_METADATA_VERSION;

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        match var("POOLSIDE_HOME") {
            Ok(home) if !home.trim().is_empty() => Self::at(home),
            _ => Self::at(platform_root().join(VENDOR_NAME).join(APP_NAME)),
        }
    }

    /// Storage rooted at an explicit directory instead of the user's.
    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Path of `file_name` inside the data directory, creating the
    /// directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

fn platform_root() -> PathBuf {
    let home = || PathBuf::from(var("HOME").unwrap_or_else(|_| ".".into()));
    match OS {
        "windows" => PathBuf::from(var("LOCALAPPDATA").unwrap_or_else(|_| ".".into())),
        "macos" => home().join("Library").join("Application Support"),
        _ => home().join(".local").join("share"),
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
