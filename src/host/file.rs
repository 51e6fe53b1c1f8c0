//! # File-backed Storage
//!
//! Default `DataStore` adapter persisting the settings payload at
//! `~/.config/notestamp/settings.toml`.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};

use super::DataStore;
use crate::constants::{STORE_DIR, STORE_FILENAME};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect the settings file to a temp
    /// directory without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect settings storage without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// File-backed settings slot at ~/.config/notestamp/settings.toml
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl FileStore {
    pub const fn new() -> Self {
        Self
    }

    /// Returns the path to the settings file (~/.config/notestamp/settings.toml)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(STORE_DIR).join(STORE_FILENAME));
        }
        dirs::home_dir().map(|home| home.join(".config").join(STORE_DIR).join(STORE_FILENAME))
    }
}

impl DataStore for FileStore {
    fn load_data(&self) -> Result<Option<String>> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        Ok(Some(content))
    }

    fn save_data(&self, data: &str) -> Result<()> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        fs::write(&path, data)
            .with_context(|| format!("Failed to write settings: {}", path.display()))
    }
}
