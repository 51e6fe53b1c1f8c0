//! # Host Boundary
//!
//! Capability traits supplied by the hosting editor. The plugin holds these
//! as handles instead of subclassing host base classes: the host shim
//! implements them and passes references into the command dispatch.
//!
//! Adapter errors are arbitrary host failures, so the storage seam speaks
//! `anyhow::Result`.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

pub mod file;
pub mod memory;

use anyhow::Result;

pub use self::{
    file::{set_home_override, FileStore},
    memory::{MemEditor, MemNotices, MemStore, MemWorkspace},
};

/// A cursor position in the focused document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based character offset within the line.
    pub ch: usize,
}

/// A span between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub from: Position,
    pub to: Position,
}

impl Range {
    /// A zero-width range at a single position.
    pub const fn caret(at: Position) -> Self {
        Self { from: at, to: at }
    }
}

/// The focused text editor.
pub trait Editor {
    /// Replaces the current selection (or inserts at the cursor when the
    /// selection is empty) with `text`.
    fn replace_selection(&mut self, text: &str);

    /// Returns the current cursor position.
    fn cursor(&self) -> Position;

    /// Scrolls the given range into view.
    fn scroll_into_view(&mut self, range: Range);
}

/// The durable key-value slot the host scopes to this extension.
pub trait DataStore {
    /// Reads the persisted payload. `None` when nothing was ever saved.
    fn load_data(&self) -> Result<Option<String>>;

    /// Writes the payload wholesale, overwriting any previous value.
    fn save_data(&self, data: &str) -> Result<()>;
}

/// Accessor for the currently focused document.
pub trait Workspace {
    /// Returns the focused document's title (base file name without
    /// extension), or `None` when no document is focused.
    fn active_title(&self) -> Option<String>;
}

/// The host's notice area for visible, non-fatal user feedback.
pub trait Notices {
    fn notify(&self, message: &str);
}
