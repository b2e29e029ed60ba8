//! Session length module - expected time-in-app category

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Expected session length for the advertised app or service.
///
/// The one categorical leaf inside the engagement group:
/// - Short: up to five minutes per session
/// - Medium: five to thirty minutes
/// - Long: thirty minutes and up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionLength {
    /// Brief, tool-like sessions
    #[default]
    Short,

    /// Mid-length sessions
    Medium,

    /// Extended, immersive sessions
    Long,
}

impl SessionLength {
    /// Get the session length name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionLength::Short => "short",
            SessionLength::Medium => "medium",
            SessionLength::Long => "long",
        }
    }

    /// Parse a session length from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "short" => Some(SessionLength::Short),
            "medium" => Some(SessionLength::Medium),
            "long" => Some(SessionLength::Long),
            _ => None,
        }
    }
}

impl std::str::FromStr for SessionLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid session length: {}", s))
    }
}

impl Serialize for SessionLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Unrecognized model output falls back to the schema default instead of
// failing normalization.
impl<'de> Deserialize<'de> for SessionLength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => SessionLength::parse(&s).unwrap_or_default(),
            _ => SessionLength::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for variant in [
            SessionLength::Short,
            SessionLength::Medium,
            SessionLength::Long,
        ] {
            assert_eq!(SessionLength::parse(variant.as_str()), Some(variant));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(SessionLength::parse("LONG"), Some(SessionLength::Long));
        assert_eq!(SessionLength::parse(" Medium "), Some(SessionLength::Medium));
    }

    #[test]
    fn test_unknown_input_defaults_to_short() {
        let parsed: SessionLength = serde_json::from_str("\"forever\"").unwrap();
        assert_eq!(parsed, SessionLength::Short);

        let parsed: SessionLength = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, SessionLength::Short);
    }

    #[test]
    fn test_serializes_as_lowercase_string() {
        assert_eq!(
            serde_json::to_string(&SessionLength::Medium).unwrap(),
            "\"medium\""
        );
    }
}
