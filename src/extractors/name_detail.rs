use lazy_static::lazy_static;
use regex::Regex;

use crate::extractors::sanitize::SEE_INSTRUCTIONS;
use crate::format::split_steps;
use crate::model::{image_url_for, GeneratedRecipe};

const MIN_NAME_LEN: usize = 3;
const MIN_DETAIL_LEN: usize = 10;

lazy_static! {
    // "Capitalized Phrase: free text" or "Capitalized Phrase - free text".
    static ref NAME_DETAIL: Regex =
        Regex::new(r"(?m)^\s*([A-Z][A-Za-z0-9' ]{2,60}?)\s*[:\-]\s*(.+)$")
            .expect("name-detail pattern should be valid");
}

// Lines whose "name" is really a section label, not a drink.
const LABEL_WORDS: &[&str] = &[
    "ingredients",
    "instructions",
    "directions",
    "method",
    "preparation",
    "steps",
    "note",
    "tip",
    "garnish",
    "glassware",
];

/// Last-resort cascade stage: scan for repeated "Name: details" prose lines.
/// Too-short names and details are discarded as noise.
pub fn extract(content: &str) -> Vec<GeneratedRecipe> {
    NAME_DETAIL
        .captures_iter(content)
        .filter_map(|caps| {
            let name = caps[1].trim().to_string();
            let detail = caps[2].trim().to_string();
            if name.chars().count() <= MIN_NAME_LEN || detail.chars().count() <= MIN_DETAIL_LEN {
                return None;
            }
            if LABEL_WORDS.contains(&name.to_lowercase().as_str()) {
                return None;
            }
            Some((name, detail))
        })
        .enumerate()
        .map(|(index, (name, detail))| {
            let steps = split_steps(&detail);
            GeneratedRecipe {
                id: format!("custom-{}", index + 1),
                image: image_url_for(&name),
                name,
                ingredients: vec![SEE_INSTRUCTIONS.to_string()],
                instructions: if steps.is_empty() { vec![detail] } else { steps },
                youtube_videos: Vec::new(),
                is_custom: true,
            }
        })
        .collect()
}
