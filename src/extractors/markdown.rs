use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::extractors::sanitize::SEE_INSTRUCTIONS;
use crate::format::units::convert_oz_to_ml;
use crate::format::split_steps;
use crate::model::{image_url_for, GeneratedRecipe};
use crate::vocab::VocabularyFilter;

const MIN_NAME_LEN: usize = 3;

lazy_static! {
    // Markdown headings open a recipe section.
    static ref HEADING: Regex =
        Regex::new(r"(?m)^#+\s*(.+?)\s*$").expect("heading pattern should be valid");
    // Fallback boundaries when the reply has no headings: ordered-list
    // lines that look like titles.
    static ref LIST_TITLE: Regex =
        Regex::new(r"(?m)^\d+\.\s*(\w[\w '&-]*?)\s*$").expect("list title pattern should be valid");
    // "Ingredients:" section up to the start of the instructions section.
    static ref INGREDIENTS_SECTION: Regex =
        Regex::new(r"(?is)(?:ingredients|you'll need|you will need):(.*?)(?:instructions|directions|method|preparation|steps)")
            .expect("ingredients section pattern should be valid");
    // "Ingredients" header followed directly by bullet lines.
    static ref INGREDIENTS_BULLETS: Regex =
        Regex::new(r"(?i)(?:ingredients|you'll need|you will need)[^\n]*((?:\n\s*[-*\u{2022}].*)+)")
            .expect("ingredients bullets pattern should be valid");
    // Any bulleted or numbered line, for bodies without an explicit header.
    static ref ANY_LIST_LINE: Regex =
        Regex::new(r"(?m)^\s*(?:[-*\u{2022}]|\d+\.)\s+(.+)$").expect("list line pattern should be valid");
    static ref INSTRUCTIONS_SECTION: Regex =
        Regex::new(r"(?is)(?:instructions|directions|method|preparation|steps):(.*?)(?:\n\s*\n|$)")
            .expect("instructions section pattern should be valid");
    static ref INSTRUCTIONS_NUMBERED: Regex =
        Regex::new(r"(?i)(?:instructions|directions|method|preparation|steps)[^\n]*((?:\n\s*\d+\..*)+)")
            .expect("instructions numbered pattern should be valid");
    static ref LIST_MARKER_PREFIX: Regex =
        Regex::new(r"^\s*(?:[-*\u{2022}]|\d+\.)\s*").expect("marker prefix pattern should be valid");
}

/// Third cascade stage: the reply is structured prose, with markdown headings or
/// list markers delimiting one recipe per section.
pub fn extract(content: &str, filter: &VocabularyFilter) -> Vec<GeneratedRecipe> {
    let boundaries = find_boundaries(content);
    if boundaries.is_empty() {
        return Vec::new();
    }
    debug!("Found {} section boundaries", boundaries.len());

    let mut recipes = Vec::new();
    for (i, boundary) in boundaries.iter().enumerate() {
        let name = boundary.name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            continue;
        }
        let end = boundaries
            .get(i + 1)
            .map(|next| next.start)
            .unwrap_or(content.len());
        let body = content[boundary.body_start..end].trim();

        let raw_ingredients = extract_ingredient_lines(body);
        let ingredients: Vec<String> = raw_ingredients
            .iter()
            .filter_map(|line| filter.clean(line))
            .map(|line| convert_oz_to_ml(&line))
            .collect();

        let instructions = extract_instruction_text(body, &raw_ingredients);
        let steps = split_steps(&instructions);

        recipes.push(GeneratedRecipe {
            id: format!("custom-{}", recipes.len() + 1),
            image: image_url_for(name),
            name: name.to_string(),
            ingredients: if ingredients.is_empty() {
                vec![SEE_INSTRUCTIONS.to_string()]
            } else {
                ingredients
            },
            instructions: if steps.is_empty() {
                vec![SEE_INSTRUCTIONS.to_string()]
            } else {
                steps
            },
            youtube_videos: Vec::new(),
            is_custom: true,
        });
    }
    recipes
}

struct Boundary {
    name: String,
    start: usize,
    body_start: usize,
}

fn find_boundaries(content: &str) -> Vec<Boundary> {
    let boundaries = boundaries_for(&HEADING, content);
    if boundaries.is_empty() {
        boundaries_for(&LIST_TITLE, content)
    } else {
        boundaries
    }
}

fn boundaries_for(pattern: &Regex, content: &str) -> Vec<Boundary> {
    pattern
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(Boundary {
                name: name.as_str().to_string(),
                start: whole.start(),
                body_start: whole.end(),
            })
        })
        .collect()
}

/// Pull raw ingredient lines out of a section body: explicit section first,
/// bullets under the header second, any list line in the body last.
fn extract_ingredient_lines(body: &str) -> Vec<String> {
    let captured = INGREDIENTS_SECTION
        .captures(body)
        .or_else(|| INGREDIENTS_BULLETS.captures(body))
        .map(|caps| caps[1].to_string());

    if let Some(block) = captured {
        return block
            .lines()
            .map(|line| LIST_MARKER_PREFIX.replace(line, "").trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
    }

    ANY_LIST_LINE
        .captures_iter(body)
        .map(|caps| caps[1].trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Locate the instructions text for a section body. When no labeled section
/// exists, the body itself is used with the ingredient lines removed.
fn extract_instruction_text(body: &str, raw_ingredients: &[String]) -> String {
    if let Some(caps) = INSTRUCTIONS_SECTION
        .captures(body)
        .or_else(|| INSTRUCTIONS_NUMBERED.captures(body))
    {
        return caps[1].trim().to_string();
    }

    let mut remainder = String::new();
    for line in body.lines() {
        let bare = LIST_MARKER_PREFIX.replace(line, "").trim().to_string();
        if raw_ingredients.iter().any(|ing| *ing == bare) {
            continue;
        }
        if !bare.is_empty() {
            remainder.push_str(line.trim());
            remainder.push('\n');
        }
    }
    remainder.trim().to_string()
}
