mod anthropic;
mod factory;
mod fallback;
mod groq;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use fallback::FallbackProvider;
pub use groq::GroqProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_suggestion_prompt, build_user_message, BARTENDER_PROMPT};

use async_trait::async_trait;
use std::error::Error;

/// Unified trait for all model providers
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Get the provider name (e.g., "groq", "openai")
    fn provider_name(&self) -> &str;

    /// Ask the model for cocktail suggestions built from the given
    /// ingredient list, returning the raw reply text.
    async fn suggest(&self, ingredients: &[String]) -> Result<String, Box<dyn Error>>;
}
