//! Parse model output into a single JSON object

use crate::error::ClassifierError;
use serde_json::{Map, Value};

/// Maximum characters of cleaned text carried in a recovery error
const SNIPPET_LIMIT: usize = 500;

/// Recover exactly one JSON object from raw model output.
///
/// Generative output is not guaranteed to be bare JSON: it may be wrapped in
/// markdown code fences (with or without a language tag) or surrounded by
/// prose. Recovery is two-stage:
///
/// 1. Strip fence markers and attempt a direct parse.
/// 2. On failure, slice from the first `{` to the last `}` and parse that.
///
/// Anything else is a [`ClassifierError::JsonRecovery`] carrying a bounded
/// snippet of the cleaned text. A full tolerant-JSON repair grammar is
/// deliberately out of scope.
pub fn parse_model_response(response: &str) -> Result<Map<String, Value>, ClassifierError> {
    let cleaned = strip_code_fences(response.trim());

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(cleaned) {
        return Ok(map);
    }

    if let (Some(first), Some(last)) = (cleaned.find('{'), cleaned.rfind('}')) {
        if first < last {
            if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&cleaned[first..=last]) {
                return Ok(map);
            }
        }
    }

    Err(ClassifierError::JsonRecovery {
        snippet: snippet(cleaned),
    })
}

/// Strip markdown code-fence markers from the start and end of the text.
fn strip_code_fences(text: &str) -> &str {
    let mut t = text.trim();

    if let Some(rest) = t.strip_prefix("```") {
        // Optional language tag sits on the fence line
        t = rest.strip_prefix("json").unwrap_or(rest).trim_start();
    }
    if let Some(rest) = t.strip_suffix("```") {
        t = rest.trim_end();
    }

    t
}

fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_LIMIT).collect()
}
