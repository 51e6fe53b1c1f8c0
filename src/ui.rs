//! # Settings UI Boundary
//!
//! Descriptor types the host renders. The plugin never draws anything: it
//! hands out current values here and receives typed `SettingChange` edits
//! back through `StamperPlugin::apply_setting`.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

use crate::{constants::FORMAT_PLACEHOLDER, settings::Settings};

/// Field key for the uuid-format text field.
pub const FIELD_UUID_FORMAT: &str = "uuid_format";

/// Field key for the line-break toggle.
pub const FIELD_NEW_LINE: &str = "new_line";

/// One editable field in the host-rendered settings tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsField {
    Text {
        key: &'static str,
        name: &'static str,
        desc: &'static str,
        value: String,
    },
    Toggle {
        key: &'static str,
        name: &'static str,
        desc: &'static str,
        value: bool,
    },
}

/// The two settings-tab fields with their current values.
pub fn settings_fields(settings: &Settings) -> Vec<SettingsField> {
    vec![
        SettingsField::Text {
            key: FIELD_UUID_FORMAT,
            name: "UUID stamp format",
            desc: "Format for the preconfigured stamp: \"long\", \"short\", or a %-token pattern",
            value: settings.uuid_format.clone(),
        },
        SettingsField::Toggle {
            key: FIELD_NEW_LINE,
            name: "Insert line break",
            desc: "Add a line break after the inserted stamp",
            value: settings.new_line,
        },
    ]
}

/// Descriptor for the ad-hoc format prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPrompt {
    /// Label next to the input.
    pub label: &'static str,
    /// Example shown while the input is empty.
    pub placeholder: &'static str,
    /// Pre-filled value: the last format the user typed.
    pub initial: String,
}

/// The format prompt with the remembered last format pre-filled.
pub fn format_prompt(settings: &Settings) -> FormatPrompt {
    FormatPrompt {
        label: "Format string:",
        placeholder: FORMAT_PLACEHOLDER,
        initial: settings.last_format.clone(),
    }
}
