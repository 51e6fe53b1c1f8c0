//! # Stamp Generators
//!
//! Pure generators for the four stamp shapes. Random-content generators
//! draw fresh randomness per call; time-based generators take the instant
//! as an argument so callers pin it and tests stay deterministic.
//!
//! Copyright (c) 2026 The notestamp authors. All rights reserved.
//! Licensed under the MIT License.

pub mod pattern;

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::constants::{SHORT_ID_LEN, SORTABLE_TIME_FORMAT};

/// Generates a canonical hyphenated v4 UUID string (36 characters).
pub fn full_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generates the first 8 characters of a fresh full id.
///
/// This truncates the hex string textually; collision probability is
/// governed by the truncation, not by a dedicated short-id scheme.
pub fn short_id() -> String {
    let mut id = full_id();
    id.truncate(SHORT_ID_LEN);
    id
}

/// Formats the instant as decimal seconds since the Unix epoch.
pub fn epoch_stamp(now: DateTime<Local>) -> String {
    now.timestamp().to_string()
}

/// Formats the instant as `YYYYMMDDHHmmss` in the local timezone.
pub fn sortable_stamp(now: DateTime<Local>) -> String {
    now.format(SORTABLE_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_full_id_shape() {
        let id = full_id();
        assert_eq!(id.len(), 36);

        let chars: Vec<char> = id.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            match i {
                8 | 13 | 18 | 23 => assert_eq!(*c, '-', "hyphen expected at {i}"),
                _ => assert!(c.is_ascii_hexdigit(), "hex digit expected at {i}"),
            }
        }

        // Version nibble is 4, variant nibble is one of 8, 9, a, b.
        assert_eq!(chars[14], '4');
        assert!(matches!(chars[19], '8' | '9' | 'a' | 'b'));
    }

    #[test]
    fn test_full_id_is_fresh_each_call() {
        assert_ne!(full_id(), full_id());
    }

    #[test]
    fn test_short_id_shape() {
        let id = short_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_epoch_stamp() {
        let now = Local.timestamp_opt(1_700_000_000, 0).unwrap();
        assert_eq!(epoch_stamp(now), "1700000000");
    }

    #[test]
    fn test_epoch_stamp_monotonic() {
        let earlier = Local.timestamp_opt(1_700_000_000, 0).unwrap();
        let later = Local.timestamp_opt(1_700_000_001, 0).unwrap();
        let a: i64 = epoch_stamp(earlier).parse().unwrap();
        let b: i64 = epoch_stamp(later).parse().unwrap();
        assert!(a <= b);
    }

    #[test]
    fn test_sortable_stamp_shape() {
        let now = Local.with_ymd_and_hms(2026, 8, 6, 9, 30, 5).unwrap();
        let stamp = sortable_stamp(now);
        assert_eq!(stamp, "20260806093005");
        assert_eq!(stamp.len(), 14);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
