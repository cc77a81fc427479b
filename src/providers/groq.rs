use crate::config::{ExtractionProfile, ProviderConfig};
use crate::providers::{build_suggestion_prompt, build_user_message, SuggestionProvider};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;

pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    system_prompt: String,
}

impl GroqProvider {
    /// Create a new Groq provider from configuration
    pub fn new(config: &ProviderConfig, profile: ExtractionProfile) -> Result<Self, Box<dyn Error>> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
            .ok_or("GROQ_API_KEY not found in config or environment")?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.groq.com/openai".to_string());

        Ok(GroqProvider {
            client: Client::new(),
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            system_prompt: build_suggestion_prompt(profile),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GroqProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 1024,
            system_prompt: build_suggestion_prompt(ExtractionProfile::Standard),
        }
    }
}

#[async_trait]
impl SuggestionProvider for GroqProvider {
    fn provider_name(&self) -> &str {
        "groq"
    }

    async fn suggest(&self, ingredients: &[String]) -> Result<String, Box<dyn Error>> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": self.system_prompt},
                    {"role": "user", "content": build_user_message(ingredients)}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let reply = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or("Failed to extract content from Groq response")?
            .to_string();

        Ok(reply)
    }
}
