//! # Commands
//!
//! The palette command registry and the insertion dispatcher. Every
//! command produces a stamp string and leaves through [`insert`], the
//! single exit point to the host editor.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

pub mod header;
pub mod stamp;

use crate::{
    constants::{
        CMD_COOKING_HEADER, CMD_EPOCH_STAMP, CMD_FORMATTED_STAMP, CMD_FULL_ID, CMD_NOTE_HEADER,
        CMD_SHORT_ID, CMD_SORTABLE_STAMP,
    },
    host::Editor,
    settings::Settings,
};

/// What a command inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FullId,
    ShortId,
    EpochStamp,
    SortableStamp,
    FormattedStamp,
    NoteHeader,
    CookingHeader,
}

/// A palette command offered to the host for registration.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Stable id the host palette dispatches on.
    pub id: &'static str,
    /// Human-readable palette entry.
    pub name: &'static str,
    pub action: Action,
}

/// The full command inventory. Which entries the plugin offers for
/// registration is filtered by `Settings::disabled_commands`.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        id: CMD_FULL_ID,
        name: "Insert UUID stamp",
        action: Action::FullId,
    },
    CommandSpec {
        id: CMD_SHORT_ID,
        name: "Insert short UUID stamp",
        action: Action::ShortId,
    },
    CommandSpec {
        id: CMD_EPOCH_STAMP,
        name: "Insert zettelkasten timestamp",
        action: Action::EpochStamp,
    },
    CommandSpec {
        id: CMD_SORTABLE_STAMP,
        name: "Insert sortable timestamp",
        action: Action::SortableStamp,
    },
    CommandSpec {
        id: CMD_FORMATTED_STAMP,
        name: "Insert formatted stamp",
        action: Action::FormattedStamp,
    },
    CommandSpec {
        id: CMD_NOTE_HEADER,
        name: "Insert note header",
        action: Action::NoteHeader,
    },
    CommandSpec {
        id: CMD_COOKING_HEADER,
        name: "Insert cooking recipe header",
        action: Action::CookingHeader,
    },
];

/// Looks up a command by id.
pub fn find(id: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.id == id)
}

/// Commands the user has not switched off.
pub fn enabled(settings: &Settings) -> impl Iterator<Item = &'static CommandSpec> + '_ {
    COMMANDS
        .iter()
        .filter(|spec| settings.is_command_enabled(spec.id))
}

/// Appends the trailing line break when configured. No other behavior.
pub fn render(stamp: &str, new_line: bool) -> String {
    if new_line {
        format!("{stamp}\n")
    } else {
        stamp.to_string()
    }
}

/// Hands a rendered stamp to the host editor.
pub fn insert(editor: &mut dyn Editor, stamp: &str, new_line: bool) {
    editor.replace_selection(&render(stamp, new_line));
}
