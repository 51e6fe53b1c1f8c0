//! # Constants
//!
//! Centralized constants for magic values used throughout notestamp.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Stamp Format
// =============================================================================

/// Format keyword for a full 36-character v4 UUID stamp.
pub const FORMAT_LONG: &str = "long";

/// Format keyword for an 8-character short UUID stamp.
pub const FORMAT_SHORT: &str = "short";

/// Length of a short id: the hex prefix of a full UUID before the first hyphen.
pub const SHORT_ID_LEN: usize = 8;

/// Chrono format string for the sortable `YYYYMMDDHHmmss` timestamp.
pub const SORTABLE_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Placeholder shown in the format prompt.
pub const FORMAT_PLACEHOLDER: &str = "e.g. %u or note-%z";

// =============================================================================
// Front-matter
// =============================================================================

/// YAML front-matter delimiter.
pub const FRONTMATTER_DELIMITER: &str = "---";

// =============================================================================
// Commands
// =============================================================================

/// Inserts a full v4 UUID.
pub const CMD_FULL_ID: &str = "insert-full-id";

/// Inserts an 8-character short UUID.
pub const CMD_SHORT_ID: &str = "insert-short-id";

/// Inserts a Unix-epoch-seconds zettelkasten stamp.
pub const CMD_EPOCH_STAMP: &str = "insert-epoch-stamp";

/// Inserts a sortable `YYYYMMDDHHmmss` timestamp.
pub const CMD_SORTABLE_STAMP: &str = "insert-sortable-stamp";

/// Prompts for a format string and inserts its expansion.
pub const CMD_FORMATTED_STAMP: &str = "insert-formatted-stamp";

/// Inserts a note front-matter header.
pub const CMD_NOTE_HEADER: &str = "insert-note-header";

/// Inserts a cooking-recipe front-matter header.
pub const CMD_COOKING_HEADER: &str = "insert-cooking-header";

// =============================================================================
// Storage
// =============================================================================

/// Settings directory name (inside the user's config directory).
pub const STORE_DIR: &str = "notestamp";

/// Settings file name (inside `STORE_DIR`).
pub const STORE_FILENAME: &str = "settings.toml";
