//! Adscope Export Layer
//!
//! The two canonical serializations of a Classification Record:
//!
//! - **Canonical JSON**: pretty-printed, keys in schema order, original
//!   string/number/list typing preserved
//! - **Canonical CSV**: one fixed 43-column header row and exactly one data
//!   row, sub-score groups flattened with a per-group prefix
//!
//! Both forms are plain strings; writing them anywhere is the caller's
//! concern.

#![warn(missing_docs)]

pub mod csv;

use adscope_domain::ClassificationRecord;

pub use csv::{to_canonical_csv, CSV_HEADER};

/// Serialize a record to canonical JSON.
///
/// Key order follows the record's schema order; indentation is two spaces;
/// non-ASCII text is preserved as-is.
pub fn to_canonical_json(record: &ClassificationRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_json_is_pretty_and_ordered() {
        let record: ClassificationRecord =
            serde_json::from_value(json!({"ad_type": "game", "notes": ["가이드 적립"]})).unwrap();
        let text = to_canonical_json(&record).unwrap();

        assert!(text.contains("  \"ad_type\": \"game\""));
        // Non-ASCII survives untouched
        assert!(text.contains("가이드 적립"));
        assert!(text.find("\"ad_type\"").unwrap() < text.find("\"notes\"").unwrap());
    }
}
