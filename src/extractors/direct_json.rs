use log::debug;
use serde_json::Value;

use crate::extractors::sanitize::sanitize_candidate;
use crate::model::GeneratedRecipe;

/// First cascade stage: the reply is, or wraps, a well-formed JSON document.
///
/// Models asked for JSON frequently fence it in markdown code blocks, so the
/// fences are stripped before parsing. Accepted document shapes: a top-level
/// array of records, a mapping with a `cocktails` array, or a mapping that is
/// itself a single record.
pub fn extract(content: &str) -> Vec<GeneratedRecipe> {
    let stripped = strip_code_fences(content);
    let parsed: Value = match serde_json::from_str(stripped.trim()) {
        Ok(value) => value,
        Err(err) => {
            debug!("Direct JSON parse failed: {}", err);
            return Vec::new();
        }
    };

    candidates_from(&parsed)
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| sanitize_candidate(candidate, index))
        .collect()
}

/// Collect candidate record values from a parsed document.
pub fn candidates_from(parsed: &Value) -> Vec<Value> {
    match parsed {
        Value::Array(items) => items.clone(),
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("cocktails") {
                items.clone()
            } else if map.contains_key("name")
                && (map.contains_key("ingredients") || map.contains_key("instructions"))
            {
                vec![parsed.clone()]
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}

fn strip_code_fences(content: &str) -> String {
    content.replace("```json", "").replace("```", "")
}
