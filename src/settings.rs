//! # Settings
//!
//! The persisted preferences object: loaded once on plugin load by merging
//! the persisted payload over hard-coded defaults, mutated in place by the
//! settings tab and the format prompt, and saved wholesale on every change.
//!
//! Merging is shallow: every field carries a serde default, so a partial
//! payload fills gaps from the defaults and unknown keys are dropped on the
//! next save.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{constants::FORMAT_LONG, error::Result, host::DataStore};

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Format of the preconfigured stamp: "long", "short", or a %-token
    /// pattern. Also the fallback when the format prompt is submitted empty.
    #[serde(default = "default_uuid_format")]
    pub uuid_format: String,

    /// The last format string typed into the format prompt.
    #[serde(default)]
    pub last_format: String,

    /// Whether to append a line break after each inserted stamp.
    #[serde(default)]
    pub new_line: bool,

    /// Command ids removed from the set offered for palette registration.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_commands: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            uuid_format: FORMAT_LONG.to_string(),
            last_format: String::new(),
            new_line: false,
            disabled_commands: Vec::new(),
        }
    }
}

fn default_uuid_format() -> String {
    FORMAT_LONG.to_string()
}

/// One typed edit coming back from the settings tab or the format prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingChange {
    UuidFormat(String),
    LastFormat(String),
    NewLine(bool),
}

impl Settings {
    /// Loads settings from the host storage slot.
    ///
    /// An empty slot yields the defaults. A present but malformed payload is
    /// tolerated: defaults win and a warning is logged. Read failures from
    /// the store propagate.
    pub fn load(store: &dyn DataStore) -> Result<Self> {
        let Some(raw) = store.load_data()? else {
            debug!("no persisted settings, using defaults");
            return Ok(Self::default());
        };

        match toml::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!("malformed persisted settings, falling back to defaults: {err}");
                Ok(Self::default())
            }
        }
    }

    /// Writes the whole settings object to the host storage slot.
    pub fn save(&self, store: &dyn DataStore) -> Result<()> {
        let raw = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        store.save_data(&raw)?;
        debug!("settings saved");
        Ok(())
    }

    /// Applies one change, then saves. Values are trusted as-is.
    pub fn update(&mut self, store: &dyn DataStore, change: SettingChange) -> Result<()> {
        match change {
            SettingChange::UuidFormat(value) => self.uuid_format = value,
            SettingChange::LastFormat(value) => self.last_format = value,
            SettingChange::NewLine(value) => self.new_line = value,
        }
        self.save(store)
    }

    /// Whether a command id is offered for registration.
    pub fn is_command_enabled(&self, id: &str) -> bool {
        !self.disabled_commands.iter().any(|c| c == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemStore;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.uuid_format, "long");
        assert_eq!(settings.last_format, "");
        assert!(!settings.new_line);
        assert!(settings.disabled_commands.is_empty());
    }

    #[test]
    fn test_parse_partial_payload() {
        let settings: Settings = toml::from_str("new_line = true\n").unwrap();
        assert!(settings.new_line);
        assert_eq!(settings.uuid_format, "long"); // default fills the gap
        assert_eq!(settings.last_format, "");
    }

    #[test]
    fn test_load_empty_slot_yields_defaults() {
        let store = MemStore::new();
        let settings = Settings::load(&store).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_malformed_payload_yields_defaults() {
        let store = MemStore::with_data("{{{{ not toml");
        let settings = Settings::load(&store).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = MemStore::new();
        let settings = Settings {
            uuid_format: "short".to_string(),
            last_format: "note-%z".to_string(),
            new_line: true,
            disabled_commands: vec!["insert-cooking-header".to_string()],
        };

        settings.save(&store).unwrap();
        let reloaded = Settings::load(&store).unwrap();
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn test_update_persists() {
        let store = MemStore::new();
        let mut settings = Settings::default();

        settings
            .update(&store, SettingChange::NewLine(true))
            .unwrap();
        assert!(settings.new_line);

        let reloaded = Settings::load(&store).unwrap();
        assert!(reloaded.new_line);
    }

    #[test]
    fn test_update_propagates_write_failure() {
        let store = MemStore::new();
        store.set_simulate_write_error(true);

        let mut settings = Settings::default();
        let result = settings.update(&store, SettingChange::NewLine(true));
        assert!(result.is_err());
        // The in-memory value is still mutated; only persistence failed.
        assert!(settings.new_line);
    }

    #[test]
    fn test_command_enabled() {
        let mut settings = Settings::default();
        assert!(settings.is_command_enabled("insert-full-id"));

        settings.disabled_commands.push("insert-full-id".to_string());
        assert!(!settings.is_command_enabled("insert-full-id"));
    }
}
