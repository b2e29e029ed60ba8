//! Schema normalization for parsed model output

use adscope_domain::{AdMetadata, ClassificationRecord};
use serde_json::{Map, Value};

/// Convert a loosely-typed parsed object into a schema-complete record.
///
/// Total: a malformed or partially-populated object still yields a
/// schema-complete record. Missing fields take their schema defaults,
/// numeric strings coerce to numbers, non-coercible leaves retain their raw
/// value, and unknown extra keys are carried through. The echoed input
/// metadata is merged last, overwriting only the metadata keys.
pub fn normalize(parsed: Map<String, Value>, metadata: &AdMetadata) -> ClassificationRecord {
    // Every field of the record deserializes leniently, so this only falls
    // back when serde itself cannot walk the map.
    let mut record: ClassificationRecord =
        serde_json::from_value(Value::Object(parsed)).unwrap_or_default();

    record.apply_metadata(metadata);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use adscope_domain::SessionLength;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_sparse_object_yields_complete_record() {
        let parsed = as_map(json!({"ad_type": "game", "motivation": {"fun": 0.8}}));
        let record = normalize(parsed, &AdMetadata::default());

        assert_eq!(record.ad_type, "game");
        assert_eq!(record.motivation.fun.as_f64(), Some(0.8));
        // Unspecified leaves default rather than go missing
        assert_eq!(record.motivation.social.as_f64(), Some(0.0));
        assert_eq!(record.promo.fomo_sensitive.as_f64(), Some(0.0));
        assert_eq!(record.brand.nostalgia.as_f64(), Some(0.0));
        assert_eq!(record.commerce.recurring_payment.as_f64(), Some(0.0));
        assert_eq!(
            record.engagement.session_length_expectation,
            SessionLength::Short
        );
        assert!(record.ad_theme.is_empty());
        assert!(record.notes.is_empty());
    }

    #[test]
    fn test_every_numeric_leaf_is_numeric_or_retained() {
        let parsed = as_map(json!({
            "motivation": {"fun": "0.7", "social": 1, "rewards": "n/a"},
            "engagement": {"casual_score": "0.25"}
        }));
        let record = normalize(parsed, &AdMetadata::default());

        assert_eq!(record.motivation.fun.as_f64(), Some(0.7));
        assert_eq!(record.motivation.social.as_f64(), Some(1.0));
        // Non-coercible values are retained raw, not dropped
        assert!(!record.motivation.rewards.is_number());
        assert_eq!(record.motivation.rewards.to_cell(), "n/a");
        assert_eq!(record.engagement.casual_score.as_f64(), Some(0.25));
    }

    #[test]
    fn test_null_lists_become_empty_sequences() {
        let parsed = as_map(json!({"ad_theme": null, "notes": null, "ad_type_category": null}));
        let record = normalize(parsed, &AdMetadata::default());

        assert!(record.ad_theme.is_empty());
        assert!(record.notes.is_empty());
        assert!(record.ad_type_category.is_empty());
    }

    #[test]
    fn test_metadata_merge_overwrites_only_metadata() {
        let parsed = as_map(json!({
            "ad_type": "shopping",
            "ads_name": "hallucinated name",
            "ads_idx": "hallucinated idx"
        }));
        let metadata = AdMetadata {
            ads_idx: "77".to_string(),
            ads_name: "Mega Mall".to_string(),
            ads_sdate: "2025-06-01".to_string(),
            ..AdMetadata::default()
        };
        let record = normalize(parsed, &metadata);

        assert_eq!(record.ad_type, "shopping");
        assert_eq!(record.ads_idx, "77");
        assert_eq!(record.ads_name, "Mega Mall");
        assert_eq!(record.ads_sdate, "2025-06-01");
    }

    #[test]
    fn test_unknown_extra_keys_tolerated() {
        let parsed = as_map(json!({"ad_type": "app", "model_confidence": 0.93}));
        let record = normalize(parsed, &AdMetadata::default());

        assert_eq!(record.extra.get("model_confidence"), Some(&json!(0.93)));
    }
}
