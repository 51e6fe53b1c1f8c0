//! # notestamp
//!
//! Engine of an editor extension that inserts generated identifier and
//! timestamp stamps (UUIDs, short UUIDs, Unix-epoch zettelkasten stamps,
//! sortable timestamps, and YAML front-matter headers) at the cursor of a
//! host editor, and persists a small set of user preferences across
//! sessions.
//!
//! The crate has no entry point of its own. A host shim implements the
//! capability traits in [`host`] (editor, durable storage slot, active
//! document accessor, notice area) and embeds a [`plugin::StamperPlugin`],
//! which owns the settings value and dispatches palette commands.
//!
//! ## Features
//!
//! - **Stamp generators**: canonical v4 UUIDs, 8-char short ids,
//!   epoch-seconds and `YYYYMMDDHHmmss` timestamps
//! - **Format strings**: a small `%`-token pattern language for custom
//!   stamp shapes
//! - **Front-matter headers**: note and cooking-recipe templates
//! - **Persisted settings**: merge-with-defaults load, wholesale save
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod constants;
pub mod error;
pub mod header;
pub mod host;
pub mod plugin;
pub mod settings;
pub mod stamp;
pub mod ui;

pub use error::{Error, Result};
pub use host::set_home_override;
pub use plugin::{Outcome, StamperPlugin};
pub use settings::{SettingChange, Settings};

/// Crate version, logged on plugin load.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
