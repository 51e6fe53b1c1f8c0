//! # Front-matter Headers
//!
//! Hand-assembled YAML front-matter blocks. The key order and the blank
//! value-bearing keys are part of the output contract, so the blocks are
//! written as literal templates rather than serialized.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

use chrono::{DateTime, Local};

use crate::{constants::FRONTMATTER_DELIMITER, stamp};

/// Builds a note front-matter header.
///
/// `created` and `updated` share the instant, so they are always equal in a
/// single invocation. The id is a fresh full UUID. Trailing newline
/// included.
pub fn note_header(now: DateTime<Local>, title: &str) -> String {
    let created = stamp::epoch_stamp(now);
    format!(
        "{delim}\n\
         created: {created}\n\
         desc:\n\
         id: {id}\n\
         title: {title}\n\
         updated: {created}\n\
         {delim}\n",
        delim = FRONTMATTER_DELIMITER,
        created = created,
        id = stamp::full_id(),
        title = title,
    )
}

/// Builds a cooking-recipe front-matter header.
///
/// `title` and `recipe` both carry the supplied title; the other
/// value-bearing keys stay blank for manual completion.
pub fn cooking_header(now: DateTime<Local>, title: &str) -> String {
    format!(
        "{delim}\n\
         created: {created}\n\
         category:\n\
         cookingtime:\n\
         id: {id}\n\
         title: {title}\n\
         ingredients:\n\
         portions:\n\
         preparationtime:\n\
         recipe: {title}\n\
         servingsize:\n\
         tags:\n\
         totaltime:\n\
         {delim}\n",
        delim = FRONTMATTER_DELIMITER,
        created = stamp::epoch_stamp(now),
        id = stamp::full_id(),
        title = title,
    )
}
