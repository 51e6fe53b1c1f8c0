//! # Test Harness
//!
//! Provides utilities for integration testing notestamp without affecting user configuration.
//! Uses thread-local storage instead of environment variables to avoid any interference
//! with the user's shell environment.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::PathBuf, sync::Mutex};

use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use notestamp::set_home_override;

/// Global lock to ensure tests that touch the settings file run sequentially.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment that manages a temporary home directory for the
/// file-backed settings store.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/notestamp)
    pub home_dir: TempDir,
    /// Guard for the test lock
    #[allow(dead_code)]
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with a temporary home directory.
    ///
    /// Uses thread-local storage to redirect the settings file (no env var
    /// modification).
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            test_guard,
        }
    }

    /// Returns the path where the settings file would be stored.
    pub fn settings_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("notestamp")
            .join("settings.toml")
    }

    /// Writes a persisted settings payload.
    #[allow(dead_code)]
    pub fn write_settings(&self, content: &str) {
        let path = self.settings_path();
        fs::create_dir_all(path.parent().expect("settings path has a parent"))
            .expect("Failed to create settings dir");
        fs::write(path, content).expect("Failed to write settings");
    }

    /// Reads the persisted settings payload.
    #[allow(dead_code)]
    pub fn read_settings(&self) -> String {
        fs::read_to_string(self.settings_path()).expect("Failed to read settings")
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

/// Builder for persisted settings payloads.
#[allow(dead_code)]
pub struct SettingsBuilder {
    uuid_format: Option<String>,
    last_format: Option<String>,
    new_line: Option<bool>,
    disabled_commands: Vec<String>,
}

#[allow(dead_code)]
impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            uuid_format: None,
            last_format: None,
            new_line: None,
            disabled_commands: Vec::new(),
        }
    }

    pub fn uuid_format(mut self, value: &str) -> Self {
        self.uuid_format = Some(value.to_string());
        self
    }

    pub fn last_format(mut self, value: &str) -> Self {
        self.last_format = Some(value.to_string());
        self
    }

    pub fn new_line(mut self, value: bool) -> Self {
        self.new_line = Some(value);
        self
    }

    pub fn disable(mut self, command_id: &str) -> Self {
        self.disabled_commands.push(command_id.to_string());
        self
    }

    /// Builds the TOML payload, leaving unset fields out so the load path
    /// has to fill them from defaults.
    pub fn build(&self) -> String {
        let mut out = String::new();
        if let Some(value) = &self.uuid_format {
            out.push_str(&format!("uuid_format = \"{value}\"\n"));
        }
        if let Some(value) = &self.last_format {
            out.push_str(&format!("last_format = \"{value}\"\n"));
        }
        if let Some(value) = self.new_line {
            out.push_str(&format!("new_line = {value}\n"));
        }
        if !self.disabled_commands.is_empty() {
            let ids: Vec<String> = self
                .disabled_commands
                .iter()
                .map(|id| format!("\"{id}\""))
                .collect();
            out.push_str(&format!("disabled_commands = [{}]\n", ids.join(", ")));
        }
        out
    }
}
