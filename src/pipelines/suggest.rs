use log::info;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::error::SuggestError;
use crate::extractors::ResponseExtractor;
use crate::model::{GeneratedRecipe, MatchResult};
use crate::providers::{FallbackProvider, SuggestionProvider};

/// The combined answer for one ingredient list: ranked catalog matches plus
/// model-generated custom recipes.
#[derive(Debug, Clone)]
pub struct Suggestions {
    pub matches: Vec<MatchResult>,
    pub custom: Vec<GeneratedRecipe>,
    /// False when the model reply could not be parsed and `custom` holds
    /// only the placeholder recipe.
    pub parsed: bool,
}

/// Ask the configured provider chain for custom recipes and rank the stock
/// catalog against the same ingredients.
pub async fn process(
    ingredients: &[String],
    config: &AppConfig,
) -> Result<Suggestions, SuggestError> {
    if ingredients.is_empty() {
        return Err(SuggestError::InvalidInput(
            "ingredients must be a non-empty list".to_string(),
        ));
    }

    let catalog = Catalog::bundled()?;
    let matches = catalog.find_cocktails(ingredients)?;
    info!(
        "Matched {} catalog recipes against {} ingredients",
        matches.len(),
        ingredients.len()
    );

    let provider = FallbackProvider::new(config)
        .map_err(|e| SuggestError::ProviderError(e.to_string()))?;
    let reply = provider
        .suggest(ingredients)
        .await
        .map_err(|e| SuggestError::ProviderError(e.to_string()))?;

    let extractor = ResponseExtractor::new(config.filter.clone());
    let extraction = extractor.extract(&reply);

    Ok(Suggestions {
        matches,
        custom: extraction.recipes,
        parsed: extraction.parsed,
    })
}
