//! Lenient deserializers for loosely-typed model output
//!
//! The upstream model is asked for a fixed schema but delivers whatever it
//! delivers. These helpers make every field of the record infallible to
//! deserialize: wrong shapes collapse to the schema default instead of
//! aborting the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize any JSON value into a string.
///
/// Strings pass through, null becomes empty, scalars are stringified, and
/// composite values are rendered as compact JSON.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(value))
}

/// Deserialize any JSON value into a list of strings.
///
/// Arrays map element-wise, null becomes the empty list, and a lone scalar
/// is wrapped as a single-element list.
pub fn string_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().map(value_to_string).collect(),
        scalar => vec![value_to_string(scalar)],
    })
}

/// Deserialize a nested score group, falling back to the group default when
/// the value is not an object.
///
/// The group structs themselves only contain infallible leaf types, so the
/// fallback fires exactly when the whole group has the wrong shape.
pub fn group<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        composite => composite.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    #[serde(default)]
    struct Holder {
        #[serde(deserialize_with = "string")]
        name: String,
        #[serde(deserialize_with = "string_list")]
        tags: Vec<String>,
    }

    #[test]
    fn test_string_coercions() {
        let h: Holder = serde_json::from_value(json!({"name": 12, "tags": null})).unwrap();
        assert_eq!(h.name, "12");
        assert!(h.tags.is_empty());
    }

    #[test]
    fn test_scalar_wrapped_as_list() {
        let h: Holder = serde_json::from_value(json!({"tags": "solo"})).unwrap();
        assert_eq!(h.tags, vec!["solo"]);
    }

    #[test]
    fn test_mixed_list_stringified() {
        let h: Holder = serde_json::from_value(json!({"tags": ["a", 2, true]})).unwrap();
        assert_eq!(h.tags, vec!["a", "2", "true"]);
    }
}
