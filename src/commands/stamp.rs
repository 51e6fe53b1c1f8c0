//! # Stamp Commands
//!
//! Handlers for the four plain stamp commands and the formatted path
//! behind the format prompt.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

use chrono::Local;
use tracing::debug;

use super::insert;
use crate::{
    error::Result,
    host::{DataStore, Editor, Range},
    settings::{SettingChange, Settings},
    stamp::{self, pattern},
};

/// Inserts a full v4 UUID.
pub fn full_id(editor: &mut dyn Editor, settings: &Settings) {
    insert(editor, &stamp::full_id(), settings.new_line);
}

/// Inserts an 8-character short UUID.
pub fn short_id(editor: &mut dyn Editor, settings: &Settings) {
    insert(editor, &stamp::short_id(), settings.new_line);
}

/// Inserts the Unix-epoch-seconds zettelkasten stamp for "now".
pub fn epoch(editor: &mut dyn Editor, settings: &Settings) {
    insert(editor, &stamp::epoch_stamp(Local::now()), settings.new_line);
}

/// Inserts the sortable `YYYYMMDDHHmmss` stamp for "now".
pub fn sortable(editor: &mut dyn Editor, settings: &Settings) {
    insert(
        editor,
        &stamp::sortable_stamp(Local::now()),
        settings.new_line,
    );
}

/// Completes the format prompt.
///
/// Expands the submitted pattern (an empty submission falls back to the
/// stored `uuid_format`), inserts the result, remembers the pattern in
/// `last_format`, persists the settings, and scrolls the cursor into view.
pub fn formatted(
    editor: &mut dyn Editor,
    settings: &mut Settings,
    store: &dyn DataStore,
    pat: &str,
) -> Result<()> {
    let now = Local::now();
    let stamp = if pat.is_empty() {
        pattern::resolve(&settings.uuid_format, now)
    } else {
        pattern::expand(pat, now)
    };
    insert(editor, &stamp, settings.new_line);
    debug!(format = pat, "formatted stamp inserted");

    settings.update(store, SettingChange::LastFormat(pat.to_string()))?;

    let caret = editor.cursor();
    editor.scroll_into_view(Range::caret(caret));
    Ok(())
}
