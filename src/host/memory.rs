//! # In-memory Host Adapters
//!
//! Memory twins of every host capability, for tests and for embedders that
//! bring their own persistence.
//!
//! `MemStore` and `MemNotices` use `RefCell` for interior mutability since
//! the plugin is single-threaded and their traits take `&self`.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

use std::cell::RefCell;

use anyhow::Result;

use super::{DataStore, Editor, Notices, Position, Range, Workspace};

/// In-memory editor: an append-at-cursor text buffer.
#[derive(Debug, Default)]
pub struct MemEditor {
    buffer: String,
    cursor: Position,
    scrolled_to: Option<Range>,
}

impl MemEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full buffer contents.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Returns the last range passed to `scroll_into_view`, if any.
    pub const fn scrolled_to(&self) -> Option<Range> {
        self.scrolled_to
    }
}

impl Editor for MemEditor {
    fn replace_selection(&mut self, text: &str) {
        self.buffer.push_str(text);
        for c in text.chars() {
            if c == '\n' {
                self.cursor.line += 1;
                self.cursor.ch = 0;
            } else {
                self.cursor.ch += 1;
            }
        }
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn scroll_into_view(&mut self, range: Range) {
        self.scrolled_to = Some(range);
    }
}

/// In-memory settings slot.
#[derive(Debug, Default)]
pub struct MemStore {
    slot: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a persisted payload.
    pub fn with_data(data: &str) -> Self {
        Self {
            slot: RefCell::new(Some(data.to_string())),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Returns a copy of the persisted payload, if any.
    pub fn data(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl DataStore for MemStore {
    fn load_data(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn save_data(&self, data: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            anyhow::bail!("Simulated write error");
        }
        *self.slot.borrow_mut() = Some(data.to_string());
        Ok(())
    }
}

/// In-memory workspace with an optional focused document.
#[derive(Debug, Default)]
pub struct MemWorkspace {
    title: Option<String>,
}

impl MemWorkspace {
    /// A workspace with no focused document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A workspace focused on a document with the given title.
    pub fn with_title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
        }
    }
}

impl Workspace for MemWorkspace {
    fn active_title(&self) -> Option<String> {
        self.title.clone()
    }
}

/// In-memory notice area collecting messages.
#[derive(Debug, Default)]
pub struct MemNotices {
    messages: RefCell<Vec<String>>,
}

impl MemNotices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all messages notified so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notices for MemNotices {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
