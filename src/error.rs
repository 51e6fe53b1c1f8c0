//! # Errors
//!
//! Typed errors for the command and settings layers. Host adapter failures
//! arrive as `anyhow::Error` at the storage seam and are wrapped here.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A header command needs a focused document title and none exists.
    #[error("No active document")]
    NoActiveDocument,

    /// The host asked for a command id that is not in the registry.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The host asked for a command the user has switched off.
    #[error("Command is disabled: {0}")]
    CommandDisabled(String),

    /// Host storage failure (read or write of the settings slot).
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
