use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

/// Placeholder emitted when a record carries no usable instructions.
pub const NO_INSTRUCTIONS: &str = "Instructions not available";

lazy_static! {
    // Step boundaries: "1.", "2 ." or "Step 3" anywhere in the text.
    static ref STEP_MARKER: Regex =
        Regex::new(r"(?i)\d+\s*\.|step\s*\d+").expect("step marker pattern should be valid");
    // Leading marker stripped from each produced step.
    static ref LEADING_MARKER: Regex =
        Regex::new(r"(?i)^(?:\d+\s*\.\s*|step\s*\d+\s*[:.]?\s*)").expect("leading marker pattern should be valid");
    // Residual labels left behind by sloppy model output.
    static ref SECTION_LABEL: Regex =
        Regex::new(r#"(?i)"?instructions"?\s*:|directions\s*:|method\s*:|preparation\s*:|steps\s*:"#)
            .expect("section label pattern should be valid");
    static ref SENTENCE_BREAK: Regex =
        Regex::new(r"\.\s+").expect("sentence break pattern should be valid");
}

/// Normalize an instructions field of either supported shape (one string or a
/// sequence of step strings) into an ordered list of cleaned steps.
pub fn format_instructions(value: Option<&Value>) -> Vec<String> {
    let steps = match value {
        Some(Value::String(text)) => split_steps(text),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(clean_step)
            .filter(|step| !step.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    if steps.is_empty() {
        vec![NO_INSTRUCTIONS.to_string()]
    } else {
        steps
    }
}

/// Split one free-form instructions blob into discrete steps.
///
/// Explicit "1." / "Step N" markers win; otherwise sentences; otherwise the
/// whole blob is a single step.
pub fn split_steps(text: &str) -> Vec<String> {
    let cleaned = clean_text(text);
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut pieces: Vec<String> = Vec::new();
    if STEP_MARKER.is_match(&cleaned) {
        let starts: Vec<usize> = STEP_MARKER.find_iter(&cleaned).map(|m| m.start()).collect();
        let mut boundaries = Vec::with_capacity(starts.len() + 1);
        if starts.first() != Some(&0) {
            boundaries.push(0);
        }
        boundaries.extend(starts);
        for (i, &start) in boundaries.iter().enumerate() {
            let end = boundaries.get(i + 1).copied().unwrap_or(cleaned.len());
            pieces.push(cleaned[start..end].to_string());
        }
    } else if cleaned.contains('.') {
        pieces = SENTENCE_BREAK
            .split(&cleaned)
            .filter(|piece| !piece.trim().is_empty())
            .map(|piece| {
                let piece = piece.trim();
                if piece.ends_with('.') {
                    piece.to_string()
                } else {
                    format!("{}.", piece)
                }
            })
            .collect();
    } else {
        pieces.push(cleaned);
    }

    pieces
        .iter()
        .map(|piece| clean_step(piece))
        .filter(|step| !step.is_empty())
        .collect()
}

/// Strip escape artifacts and structural punctuation out of a raw
/// instructions blob. Literal "\n" sequences become real line breaks first so
/// step markers at encoded line starts still line up.
fn clean_text(text: &str) -> String {
    let text = text
        .replace("\\n", "\n")
        .replace("\\r", "")
        .replace('\r', "")
        .replace("\\t", " ")
        .replace('\t', " ")
        .replace("\\'", "'")
        .replace("\\\"", "\"");
    let text = SECTION_LABEL.replace_all(&text, "");
    let text: String = text
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '[' | ']' | '"' | '`'))
        .collect();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    text.trim().trim_end_matches(',').trim().to_string()
}

fn clean_step(piece: &str) -> String {
    LEADING_MARKER.replace(piece.trim(), "").trim().to_string()
}
