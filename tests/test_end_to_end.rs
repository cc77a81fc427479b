use std::collections::HashMap;

use mockito::Server;

use cocktail_vision::config::{AppConfig, ProviderConfig};
use cocktail_vision::pipelines;

fn config_with_mock_provider(base_url: String) -> AppConfig {
    let mut providers = HashMap::new();
    providers.insert(
        "groq".to_string(),
        ProviderConfig {
            enabled: true,
            model: "test-model".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            api_key: Some("test-key".to_string()),
            base_url: Some(base_url),
        },
    );

    AppConfig {
        default_provider: "groq".to_string(),
        providers,
        ..AppConfig::default()
    }
}

fn chat_completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{"message": {"content": content}}]
    })
    .to_string()
}

#[tokio::test]
async fn test_suggest_pipeline_markdown_reply() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_completion_body(
            "# Gin Fizz\nIngredients:\n- 2 oz gin\n- 1 oz lemon juice\n- 1/2 oz simple syrup\nInstructions:\n1. Shake with ice\n2. Strain and top with soda",
        ))
        .create_async()
        .await;

    let config = config_with_mock_provider(server.url());
    let ingredients = vec![
        "Gin".to_string(),
        "Tonic water".to_string(),
        "Lime".to_string(),
    ];

    let suggestions = pipelines::suggest::process(&ingredients, &config)
        .await
        .unwrap();

    // Catalog side: Gin and Tonic is fully covered
    assert_eq!(suggestions.matches[0].recipe.name, "Gin and Tonic");
    assert!(suggestions.matches[0].can_make);

    // Model side: the markdown reply was parsed into a custom recipe
    assert!(suggestions.parsed);
    assert_eq!(suggestions.custom.len(), 1);
    let custom = &suggestions.custom[0];
    assert_eq!(custom.name, "Gin Fizz");
    assert_eq!(
        custom.ingredients,
        vec!["60 ml gin", "30 ml lemon juice", "15 ml simple syrup"]
    );
    assert_eq!(
        custom.instructions,
        vec!["Shake with ice", "Strain and top with soda"]
    );
    assert!(custom.is_custom);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_suggest_pipeline_unparseable_reply() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_completion_body(
            "sorry, nothing comes to mind for those",
        ))
        .create_async()
        .await;

    let config = config_with_mock_provider(server.url());
    let suggestions = pipelines::suggest::process(&["gin".to_string()], &config)
        .await
        .unwrap();

    // Catalog matches still come back even when the model reply is useless
    assert!(!suggestions.matches.is_empty());
    assert!(!suggestions.parsed);
    assert_eq!(suggestions.custom.len(), 1);
    assert_eq!(suggestions.custom[0].name, "Default Cocktail");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_vision_pipeline_feeds_catalog_matching() {
    let config = AppConfig::default();
    let detected = pipelines::vision::process(
        "gin, tonic water, lime, that's all I can identify here",
        &config,
    );
    assert_eq!(detected, vec!["gin", "tonic water", "lime"]);

    let matches = cocktail_vision::match_catalog(&detected).unwrap();
    assert_eq!(matches[0].recipe.name, "Gin and Tonic");
    assert!(matches[0].can_make);
}
