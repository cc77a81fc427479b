use serde_json::Value;

use crate::format::{format_ingredient, format_instructions};
use crate::model::{image_url_for, GeneratedRecipe, VideoRef, UNKNOWN_NAME};

/// Placeholder ingredient line for records whose ingredients could not be
/// located in the surrounding text.
pub const SEE_INSTRUCTIONS: &str = "See instructions for details";

/// Most model replies attach at most a couple of useful video references;
/// anything past two is filler.
const MAX_VIDEOS: usize = 2;

/// Turn one candidate JSON record into a GeneratedRecipe, tolerating every
/// field being missing or the wrong shape. Only a non-object candidate is
/// rejected outright.
pub fn sanitize_candidate(value: &Value, index: usize) -> Option<GeneratedRecipe> {
    let map = value.as_object()?;

    let name = match map.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => UNKNOWN_NAME.to_string(),
    };

    let ingredients: Vec<String> = match map.get("ingredients") {
        Some(Value::Array(items)) => items
            .iter()
            .map(format_ingredient)
            .filter(|line| !line.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    let instructions = format_instructions(map.get("instructions"));

    let youtube_videos = map
        .get("youtubeVideos")
        .and_then(Value::as_array)
        .map(|videos| sanitize_videos(videos))
        .unwrap_or_default();

    Some(GeneratedRecipe {
        id: format!("custom-{}", index + 1),
        image: image_url_for(&name),
        name,
        ingredients,
        instructions,
        youtube_videos,
        is_custom: true,
    })
}

/// Clean video references: quote/brace/comma noise stripped, short ids
/// discarded as not-a-real-video-id, at most two entries kept.
fn sanitize_videos(videos: &[Value]) -> Vec<VideoRef> {
    videos
        .iter()
        .take(MAX_VIDEOS)
        .filter_map(|video| {
            let map = video.as_object()?;
            let id = clean_video_field(map.get("id"));
            if id.len() <= 3 {
                return None;
            }
            let title = clean_video_field(map.get("title"));
            Some(VideoRef { id, title })
        })
        .collect()
}

fn clean_video_field(value: Option<&Value>) -> String {
    let raw = match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    raw.chars()
        .filter(|c| !matches!(c, '"' | '\'' | '{' | '}' | ','))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_record() {
        let value = json!({
            "name": "Spicy Margarita",
            "ingredients": ["2 oz Tequila", {"name": "Lime juice", "amount": "1", "unit": "oz"}],
            "instructions": "1. Shake 2. Strain"
        });
        let recipe = sanitize_candidate(&value, 0).unwrap();
        assert_eq!(recipe.id, "custom-1");
        assert_eq!(recipe.name, "Spicy Margarita");
        assert_eq!(recipe.ingredients, vec!["60 ml Tequila", "30 ml Lime juice"]);
        assert_eq!(recipe.instructions, vec!["Shake", "Strain"]);
        assert!(recipe.is_custom);
    }

    #[test]
    fn test_missing_name_defaults() {
        let recipe = sanitize_candidate(&json!({"ingredients": ["gin"]}), 2).unwrap();
        assert_eq!(recipe.name, "Unknown Cocktail");
        assert_eq!(recipe.id, "custom-3");
    }

    #[test]
    fn test_non_string_name_defaults() {
        let recipe = sanitize_candidate(&json!({"name": 7}), 0).unwrap();
        assert_eq!(recipe.name, "Unknown Cocktail");
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(sanitize_candidate(&json!("just a string"), 0).is_none());
        assert!(sanitize_candidate(&json!(["array"]), 0).is_none());
    }

    #[test]
    fn test_videos_truncated_and_cleaned() {
        let value = json!({
            "name": "Mojito Twist",
            "youtubeVideos": [
                {"id": "\"abc12345\",", "title": "{How to}"},
                {"id": "xy", "title": "too short"},
                {"id": "longenough1", "title": "Third"},
            ]
        });
        let recipe = sanitize_candidate(&value, 0).unwrap();
        // Truncation to two happens before the short-id discard
        assert_eq!(recipe.youtube_videos.len(), 1);
        assert_eq!(recipe.youtube_videos[0].id, "abc12345");
        assert_eq!(recipe.youtube_videos[0].title, "How to");
    }

    #[test]
    fn test_instruction_sequence_passthrough() {
        let value = json!({
            "name": "Collins",
            "instructions": ["Build in glass", "Top with soda"]
        });
        let recipe = sanitize_candidate(&value, 0).unwrap();
        assert_eq!(recipe.instructions, vec!["Build in glass", "Top with soda"]);
    }
}
