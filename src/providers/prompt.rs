use crate::config::ExtractionProfile;

/// The system prompt used for cocktail suggestion requests.
///
/// The prompt asks for markdown with labeled ingredient and instruction
/// sections, which the most reliable extraction stages understand. It is
/// loaded from `prompt.txt` at compile time using the `include_str!` macro,
/// making it easy to edit without dealing with Rust string syntax.
pub const BARTENDER_PROMPT: &str = include_str!("prompt.txt");

/// Build the system prompt for a given extraction profile.
pub fn build_suggestion_prompt(profile: ExtractionProfile) -> String {
    match profile {
        ExtractionProfile::Standard => BARTENDER_PROMPT.to_string(),
        ExtractionProfile::BrandEmphasis => format!(
            "{}\n\nWhen an ingredient is a branded product, keep the full brand name intact in the ingredient list instead of substituting a generic category.",
            BARTENDER_PROMPT
        ),
    }
}

/// Build the user message listing the available ingredients.
pub fn build_user_message(ingredients: &[String]) -> String {
    format!(
        "I have these ingredients available: {}. What cocktails can I make? Please provide detailed recipes with measurements and instructions.",
        ingredients.join(", ")
    )
}
