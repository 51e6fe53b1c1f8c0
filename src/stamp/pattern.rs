//! # Stamp Format Expansion
//!
//! Expands a stamp format string by literal substitution of a small fixed
//! token set. Not a template engine: no nesting, no conditionals.
//!
//! ## Tokens
//! - `%u`: full v4 UUID (36 chars)
//! - `%s`: short UUID (8 chars)
//! - `%x`: Unix-epoch seconds
//! - `%z`: sortable `YYYYMMDDHHmmss` local timestamp
//! - `%%`: literal percent sign
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

use chrono::{DateTime, Local};

use super::{epoch_stamp, full_id, short_id, sortable_stamp};
use crate::constants::{FORMAT_LONG, FORMAT_SHORT};

/// Resolves a stored format value to a stamp.
///
/// The keywords "long" (also the empty string) and "short" select the plain
/// generators; anything else is treated as a pattern and expanded.
pub fn resolve(format: &str, now: DateTime<Local>) -> String {
    match format {
        "" | FORMAT_LONG => full_id(),
        FORMAT_SHORT => short_id(),
        pattern => expand(pattern, now),
    }
}

/// Expands a pattern string.
///
/// Unknown tokens and all other characters pass through unchanged, so a
/// pattern without tokens inserts its literal text.
pub fn expand(pattern: &str, now: DateTime<Local>) -> String {
    let mut result = String::with_capacity(pattern.len() + 36);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.next() {
                Some('u') => result.push_str(&full_id()),
                Some('s') => result.push_str(&short_id()),
                Some('x') => result.push_str(&epoch_stamp(now)),
                Some('z') => result.push_str(&sortable_stamp(now)),
                Some('%') | None => result.push('%'),
                Some(other) => {
                    // Unknown token, keep as-is
                    result.push('%');
                    result.push(other);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}
