use crate::config::{AppConfig, ExtractionProfile, ProviderConfig};
use crate::providers::{AnthropicProvider, GroqProvider, OpenAIProvider, SuggestionProvider};
use std::error::Error;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        profile: ExtractionProfile,
    ) -> Result<Box<dyn SuggestionProvider>, Box<dyn Error>> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )
            .into());
        }

        match provider_name {
            "groq" => Ok(Box::new(GroqProvider::new(config, profile)?)),
            "openai" => Ok(Box::new(OpenAIProvider::new(config, profile)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config, profile)?)),
            _ => Err(format!("Unknown provider: {}", provider_name).into()),
        }
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(
        config: &AppConfig,
    ) -> Result<Box<dyn SuggestionProvider>, Box<dyn Error>> {
        let provider_name = &config.default_provider;
        let provider_config = config.providers.get(provider_name).ok_or_else(|| {
            format!(
                "Default provider '{}' not found in configuration",
                provider_name
            )
        })?;

        Self::create(provider_name, provider_config, config.extraction_profile)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["groq", "openai", "anthropic"]
    }
}
