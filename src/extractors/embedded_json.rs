use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde_json::Value;

use crate::extractors::sanitize::sanitize_candidate;
use crate::model::GeneratedRecipe;

lazy_static! {
    // A JSON-array-of-objects shape buried inside surrounding prose.
    static ref EMBEDDED_ARRAY: Regex =
        Regex::new(r"(?s)\[\s*\{.*\}\s*\]").expect("embedded array pattern should be valid");
}

/// Second cascade stage: the reply is prose with a JSON array buried in it
/// ("Sure! Here are your cocktails: [...]"). Only the bracketed substring is
/// parsed; everything around it is ignored.
pub fn extract(content: &str) -> Vec<GeneratedRecipe> {
    let found = match EMBEDDED_ARRAY.find(content) {
        Some(found) => found,
        None => return Vec::new(),
    };

    let items = match serde_json::from_str::<Value>(found.as_str()) {
        Ok(Value::Array(items)) => items,
        Ok(_) => return Vec::new(),
        Err(err) => {
            debug!("Embedded JSON parse failed: {}", err);
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| sanitize_candidate(candidate, index))
        .collect()
}
