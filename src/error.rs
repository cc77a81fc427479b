use thiserror::Error;

/// Errors that can occur during catalog matching and suggestion generation
#[derive(Error, Debug)]
pub enum SuggestError {
    /// The user ingredient set was empty when an operation requires at
    /// least one entry
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A catalog recipe loaded with zero ingredients; fatal at load time
    #[error("Malformed catalog entry: recipe '{recipe}' has no ingredients")]
    MalformedCatalogEntry { recipe: String },

    /// The catalog data file could not be parsed
    #[error("Failed to parse catalog data: {0}")]
    CatalogData(#[from] serde_json::Error),

    /// Failed to read the catalog data file
    #[error("Failed to read catalog file: {0}")]
    CatalogIo(#[from] std::io::Error),

    /// Every configured provider failed to produce a completion
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Failed to reach a provider endpoint
    #[error("Failed to fetch: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
