use serde::{Deserialize, Serialize};

/// A catalog ingredient. Shared by id across recipes; the same physical
/// ingredient (e.g. "Lime") carries the same id everywhere it appears.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: String,
}

/// A recipe from the fixed in-memory catalog. Immutable after load.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub image: String,
    pub ingredients: Vec<Ingredient>,
}

/// One catalog recipe scored against a user ingredient set. Recomputed on
/// every call, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub recipe: Recipe,
    #[serde(rename = "missingIngredients")]
    pub missing_ingredients: Vec<String>,
    #[serde(rename = "canMake")]
    pub can_make: bool,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
}

/// A video reference attached to a generated recipe by some model replies.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VideoRef {
    pub id: String,
    pub title: String,
}

/// A structured recipe reconstructed from an unstructured model reply.
/// Created fresh per extraction pass and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedRecipe {
    pub id: String,
    pub name: String,
    /// Fully formatted "<amount> <unit> <name>" display lines.
    pub ingredients: Vec<String>,
    /// One entry per step, markers stripped.
    pub instructions: Vec<String>,
    #[serde(rename = "youtubeVideos")]
    pub youtube_videos: Vec<VideoRef>,
    pub image: String,
    #[serde(rename = "isCustom")]
    pub is_custom: bool,
}

/// Name given to the single placeholder record emitted when every extraction
/// stage comes up empty.
pub const SENTINEL_NAME: &str = "Default Cocktail";

/// Name substituted when a candidate record carries no usable name field.
pub const UNKNOWN_NAME: &str = "Unknown Cocktail";

impl GeneratedRecipe {
    /// The fixed placeholder emitted when the model reply was unparseable.
    /// Callers should prefer `Extraction::parsed` over sniffing this name.
    pub fn sentinel() -> Self {
        GeneratedRecipe {
            id: "custom-default".to_string(),
            name: SENTINEL_NAME.to_string(),
            ingredients: vec!["Use the ingredients you have available".to_string()],
            instructions: vec![
                "Mix all ingredients together".to_string(),
                "We couldn't parse the AI response properly".to_string(),
            ],
            youtube_videos: Vec::new(),
            image: image_url_for(SENTINEL_NAME),
            is_custom: true,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.name == SENTINEL_NAME
    }
}

/// Stock photo search URL derived from the recipe name, matching the display
/// layer's expectations.
pub fn image_url_for(name: &str) -> String {
    let compact: String = name.split_whitespace().collect::<Vec<_>>().join("");
    format!("https://source.unsplash.com/random/?cocktail,{}", compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_shape() {
        let sentinel = GeneratedRecipe::sentinel();
        assert!(sentinel.is_sentinel());
        assert_eq!(sentinel.name, "Default Cocktail");
        assert!(!sentinel.ingredients.is_empty());
        assert!(!sentinel.instructions.is_empty());
        assert!(sentinel.is_custom);
    }

    #[test]
    fn test_image_url_compacts_name() {
        assert_eq!(
            image_url_for("Gin Basil Smash"),
            "https://source.unsplash.com/random/?cocktail,GinBasilSmash"
        );
    }
}
