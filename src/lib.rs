pub mod catalog;
pub mod config;
pub mod error;
pub mod extractors;
pub mod format;
pub mod model;
pub mod pipelines;
pub mod providers;
pub mod vocab;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::error::SuggestError;
use crate::extractors::{Extraction, ResponseExtractor};
use crate::model::MatchResult;
use crate::pipelines::Suggestions;

/// Rank the bundled cocktail catalog against an ingredient list.
pub fn match_catalog(ingredients: &[String]) -> Result<Vec<MatchResult>, SuggestError> {
    let catalog = Catalog::bundled()?;
    catalog.find_cocktails(ingredients)
}

/// Parse a raw model reply into structured recipes using the default
/// vocabulary filter.
pub fn extract_suggestions(reply: &str) -> Extraction {
    ResponseExtractor::default().extract(reply)
}

/// Full suggestion flow: catalog matches plus provider-generated custom
/// recipes for one ingredient list. Configuration comes from `config.toml`
/// and `COCKTAIL__`-prefixed environment variables.
pub async fn suggest(ingredients: &[String]) -> Result<Suggestions, SuggestError> {
    let config = AppConfig::load()?;
    pipelines::suggest::process(ingredients, &config).await
}
