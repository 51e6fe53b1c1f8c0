//! # Header Commands
//!
//! Handlers for the two front-matter header commands. Both need a focused
//! document title and fail fast without one.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

use chrono::Local;

use super::insert;
use crate::{
    error::{Error, Result},
    header,
    host::{Editor, Workspace},
    settings::Settings,
};

/// Inserts a note front-matter header titled after the active document.
pub fn note(editor: &mut dyn Editor, workspace: &dyn Workspace, settings: &Settings) -> Result<()> {
    let title = active_title(workspace)?;
    insert(
        editor,
        &header::note_header(Local::now(), &title),
        settings.new_line,
    );
    Ok(())
}

/// Inserts a cooking-recipe front-matter header titled after the active
/// document.
pub fn cooking(
    editor: &mut dyn Editor,
    workspace: &dyn Workspace,
    settings: &Settings,
) -> Result<()> {
    let title = active_title(workspace)?;
    insert(
        editor,
        &header::cooking_header(Local::now(), &title),
        settings.new_line,
    );
    Ok(())
}

/// The focused document's title. A missing document and a document with an
/// empty base name are both preconditions failures.
fn active_title(workspace: &dyn Workspace) -> Result<String> {
    workspace
        .active_title()
        .filter(|title| !title.is_empty())
        .ok_or(Error::NoActiveDocument)
}
