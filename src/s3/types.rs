//! Listing data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single listed object: key plus last-modified timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub key: String,
    pub last_modified: Option<DateTime<Utc>>,
}

impl ObjectRecord {
    /// True when the object was last modified strictly before `cutoff`.
    /// Objects with no recorded timestamp are never considered older.
    pub fn is_older_than(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_modified.map(|t| t < cutoff).unwrap_or(false)
    }
}

/// One page of a bucket listing. `next_token` is present only when the store
/// reports more entries after this page.
#[derive(Debug, Clone, Default)]
pub struct ObjectPage {
    pub records: Vec<ObjectRecord>,
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(key: &str, last_modified: Option<DateTime<Utc>>) -> ObjectRecord {
        ObjectRecord {
            key: key.to_string(),
            last_modified,
        }
    }

    #[test]
    fn test_older_object_is_older_than_cutoff() {
        let cutoff = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let older = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        assert!(record("a", Some(older)).is_older_than(cutoff));
    }

    #[test]
    fn test_newer_object_is_not_older_than_cutoff() {
        let cutoff = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2024, 6, 20, 0, 0, 0).unwrap();
        assert!(!record("a", Some(newer)).is_older_than(cutoff));
    }

    #[test]
    fn test_object_at_exactly_the_cutoff_is_excluded() {
        // Strict inequality: equality is not "older".
        let cutoff = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        assert!(!record("a", Some(cutoff)).is_older_than(cutoff));
    }

    #[test]
    fn test_object_without_timestamp_is_excluded() {
        let cutoff = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        assert!(!record("a", None).is_older_than(cutoff));
    }
}
