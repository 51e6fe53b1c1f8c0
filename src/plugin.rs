//! # Plugin Object
//!
//! The extension's top-level object: owns the settings value and the host
//! storage handle, dispatches palette commands, and glues the settings tab
//! and format prompt boundaries to the settings store.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

use tracing::{debug, info};

use crate::{
    commands::{self, Action, CommandSpec},
    error::{Error, Result},
    host::{DataStore, Editor, Notices, Workspace},
    settings::{SettingChange, Settings},
    ui::{self, FormatPrompt, SettingsField},
    VERSION,
};

/// What a successful command dispatch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The stamp went straight into the editor.
    Inserted,
    /// The host must collect a format string and call
    /// [`StamperPlugin::submit_format`] with it.
    NeedsFormat(FormatPrompt),
}

/// The extension object, generic over the host's storage slot.
pub struct StamperPlugin<S: DataStore> {
    settings: Settings,
    store: S,
}

impl<S: DataStore> StamperPlugin<S> {
    /// Loads persisted settings (merge-with-defaults) and builds the plugin.
    pub fn load(store: S) -> Result<Self> {
        info!("loading plugin v{VERSION}");
        let settings = Settings::load(&store)?;
        debug!(uuid_format = %settings.uuid_format, "settings loaded");
        Ok(Self { settings, store })
    }

    /// Current settings values.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Commands offered to the host for palette registration.
    pub fn commands(&self) -> Vec<&'static CommandSpec> {
        commands::enabled(&self.settings).collect()
    }

    /// Runs a palette command against the focused editor.
    pub fn run_command(
        &mut self,
        id: &str,
        editor: &mut dyn Editor,
        workspace: &dyn Workspace,
    ) -> Result<Outcome> {
        let spec = commands::find(id).ok_or_else(|| Error::UnknownCommand(id.to_string()))?;
        if !self.settings.is_command_enabled(spec.id) {
            return Err(Error::CommandDisabled(spec.id.to_string()));
        }

        debug!(command = spec.id, "dispatching command");
        match spec.action {
            Action::FullId => commands::stamp::full_id(editor, &self.settings),
            Action::ShortId => commands::stamp::short_id(editor, &self.settings),
            Action::EpochStamp => commands::stamp::epoch(editor, &self.settings),
            Action::SortableStamp => commands::stamp::sortable(editor, &self.settings),
            Action::FormattedStamp => {
                return Ok(Outcome::NeedsFormat(self.format_prompt()));
            }
            Action::NoteHeader => commands::header::note(editor, workspace, &self.settings)?,
            Action::CookingHeader => commands::header::cooking(editor, workspace, &self.settings)?,
        }
        Ok(Outcome::Inserted)
    }

    /// Like [`Self::run_command`], but routes failures to the host notice
    /// area instead of propagating them.
    pub fn dispatch(
        &mut self,
        id: &str,
        editor: &mut dyn Editor,
        workspace: &dyn Workspace,
        notices: &dyn Notices,
    ) -> Option<Outcome> {
        match self.run_command(id, editor, workspace) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                notices.notify(&err.to_string());
                None
            }
        }
    }

    /// Settings-tab field descriptors for the host to render.
    pub fn settings_fields(&self) -> Vec<SettingsField> {
        ui::settings_fields(&self.settings)
    }

    /// Applies one settings-tab edit, then persists.
    pub fn apply_setting(&mut self, change: SettingChange) -> Result<()> {
        self.settings.update(&self.store, change)
    }

    /// Descriptor for the format prompt.
    pub fn format_prompt(&self) -> FormatPrompt {
        ui::format_prompt(&self.settings)
    }

    /// Completes the format prompt: expands the typed pattern, inserts the
    /// stamp, and remembers the pattern for next time.
    pub fn submit_format(&mut self, editor: &mut dyn Editor, pattern: &str) -> Result<()> {
        commands::stamp::formatted(editor, &mut self.settings, &self.store, pattern)
    }

    /// Teardown. Nothing to release; the host drops the object.
    pub fn unload(&self) {
        info!("unloading plugin");
    }
}
