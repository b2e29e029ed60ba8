//! Score module - lenient numeric leaves for model-supplied sub-scores

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

/// A single sub-score leaf in a Classification Record.
///
/// The upstream model is asked for numbers in [0, 1] but is not contractually
/// bound to that: it may send integers, floats, numeric strings, or something
/// stranger. A `Score` coerces what it unambiguously can and retains the raw
/// value otherwise, so no data is ever dropped on the way through
/// normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Score {
    /// A numeric value (possibly coerced from a numeric string)
    Number(Number),

    /// A value that could not be coerced to a number, kept as received
    Raw(Value),
}

impl Score {
    /// Build a score from an arbitrary JSON value.
    ///
    /// Numbers pass through, numeric strings are parsed, everything else is
    /// kept raw.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Number(n) => Score::Number(n),
            Value::String(s) => match s.trim().parse::<f64>().ok().and_then(Number::from_f64) {
                Some(n) => Score::Number(n),
                None => Score::Raw(Value::String(s)),
            },
            other => Score::Raw(other),
        }
    }

    /// The numeric value, if this score is (or was coerced to) a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Score::Number(n) => n.as_f64(),
            Score::Raw(_) => None,
        }
    }

    /// Whether this score carries a numeric value.
    pub fn is_number(&self) -> bool {
        matches!(self, Score::Number(_))
    }

    /// Render the score as a single export cell.
    ///
    /// Numbers print as JSON numbers; retained raw strings print bare, other
    /// raw values print as compact JSON.
    pub fn to_cell(&self) -> String {
        match self {
            Score::Number(n) => n.to_string(),
            Score::Raw(Value::String(s)) => s.clone(),
            Score::Raw(other) => other.to_string(),
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Score::Number(Number::from(0))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell())
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(n) => Score::Number(n),
            None => Score::Raw(Value::Null),
        }
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score::Number(Number::from(value))
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Score::Number(n) => n.serialize(serializer),
            Score::Raw(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Score::from_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_number_passes_through() {
        let score = Score::from_value(json!(0.8));
        assert_eq!(score.as_f64(), Some(0.8));
    }

    #[test]
    fn test_integer_stays_integer_in_json() {
        let score = Score::from_value(json!(1));
        assert_eq!(serde_json::to_string(&score).unwrap(), "1");
    }

    #[test]
    fn test_numeric_string_coerced() {
        let score = Score::from_value(json!("0.35"));
        assert_eq!(score.as_f64(), Some(0.35));
    }

    #[test]
    fn test_non_numeric_string_retained() {
        let score = Score::from_value(json!("high"));
        assert!(!score.is_number());
        assert_eq!(score.to_cell(), "high");
        assert_eq!(serde_json::to_string(&score).unwrap(), "\"high\"");
    }

    #[test]
    fn test_other_shapes_retained() {
        let score = Score::from_value(json!({"value": 0.5}));
        assert_eq!(score, Score::Raw(json!({"value": 0.5})));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Score::default().as_f64(), Some(0.0));
        assert_eq!(Score::default().to_cell(), "0");
    }

    #[test]
    fn test_deserialize_never_fails_on_json_values() {
        for v in [json!(null), json!(true), json!([1, 2]), json!("x"), json!(3)] {
            let score: Score = serde_json::from_value(v).unwrap();
            let _ = score.to_cell();
        }
    }

    proptest! {
        #[test]
        fn prop_finite_floats_round_trip(x in -1.0e6f64..1.0e6) {
            let score = Score::from(x);
            prop_assert_eq!(score.as_f64(), Some(x));
        }

        #[test]
        fn prop_numeric_strings_coerce(x in -1.0e6f64..1.0e6) {
            let score = Score::from_value(Value::String(x.to_string()));
            prop_assert!(score.is_number());
        }
    }
}
