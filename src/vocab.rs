use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

lazy_static! {
    // Leading bullet markers and numbered-list prefixes on detected lines.
    // The numbered form requires trailing whitespace so measures like
    // "2 oz gin" and "1.5 oz bourbon" survive intact.
    static ref LINE_PREFIX: Regex =
        Regex::new(r"^[\s\u{2022}\-\u{2013}\u{2014}*]+|^[0-9]+\.\s+").expect("line prefix pattern should be valid");
    // First bracketed array in a reply, in case the model produced JSON.
    static ref JSON_ARRAY: Regex =
        Regex::new(r"(?s)\[.*\]").expect("json array pattern should be valid");
}

/// Tuning for the ingredient/noise classifier. The token cap and exemplar
/// list were tuned against observed vendor replies and are deliberately
/// configuration, not code, because the exemplar list is known to be incomplete.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Conversational phrases that mark a line as chatter, not an ingredient.
    #[serde(default = "default_deny_phrases")]
    pub deny_phrases: Vec<String>,
    /// Lines with more whitespace-separated tokens than this are rejected,
    /// unless a brand exemplar appears.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    /// Multi-word brand names that legitimately exceed the token cap.
    #[serde(default = "default_brand_exemplars")]
    pub brand_exemplars: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            deny_phrases: default_deny_phrases(),
            max_tokens: default_max_tokens(),
            brand_exemplars: default_brand_exemplars(),
        }
    }
}

fn default_deny_phrases() -> Vec<String> {
    [
        "i don't see",
        "cannot identify",
        "i can help",
        "i can see",
        "here are",
        "the ingredients",
        "please let me",
        "based on",
        "following ingredients",
        "let me know",
        "need more",
        "visible in the image",
        "that's all",
        "that i can",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_max_tokens() -> usize {
    4
}

fn default_brand_exemplars() -> Vec<String> {
    [
        "tito's",
        "fever-tree",
        "grey goose",
        "maker's mark",
        "jack daniel's",
        "captain morgan",
        "angostura",
        "st-germain",
        "elderflower",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Classifies lines of model output as real ingredients vs. conversational
/// noise, and cleans the lines it keeps.
#[derive(Debug, Clone, Default)]
pub struct VocabularyFilter {
    config: FilterConfig,
}

impl VocabularyFilter {
    pub fn new(config: FilterConfig) -> Self {
        VocabularyFilter { config }
    }

    /// Clean one candidate line and decide whether to keep it.
    /// Returns `None` for noise, `Some(cleaned)` for a kept ingredient.
    pub fn clean(&self, line: &str) -> Option<String> {
        let cleaned = strip_line(line);
        if cleaned.is_empty() {
            return None;
        }

        let lowered = cleaned.to_lowercase();
        if self
            .config
            .deny_phrases
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str()))
        {
            debug!("Discarding conversational line: {}", cleaned);
            return None;
        }

        let tokens = cleaned.split_whitespace().count();
        if tokens > self.config.max_tokens
            && !self
                .config
                .brand_exemplars
                .iter()
                .any(|brand| lowered.contains(brand.as_str()))
        {
            debug!("Discarding over-long line ({} tokens): {}", tokens, cleaned);
            return None;
        }

        Some(cleaned)
    }

    /// Parse a vision-model reply into a list of detected ingredient names.
    ///
    /// Replies are usually comma- or newline-separated prose, but some models
    /// hand back a JSON array; that shape is preferred when present.
    pub fn parse_detected(&self, content: &str) -> Vec<String> {
        if let Some(found) = JSON_ARRAY.find(content) {
            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(found.as_str()) {
                let parsed: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.as_str())
                    .filter_map(|item| self.clean(item))
                    .collect();
                if !parsed.is_empty() {
                    return parsed;
                }
            }
        }

        content
            .split(|c| c == ',' || c == '\n')
            .filter_map(|item| self.clean(item))
            .collect()
    }
}

/// Strip bullet markers, numeric prefixes, surrounding quotes and trailing
/// periods from a kept line.
fn strip_line(line: &str) -> String {
    let line = line.trim();
    let line = LINE_PREFIX.replace(line, "");
    line.trim_matches(|c| c == '"' || c == '\'')
        .trim_end_matches('.')
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversational_lines_discarded() {
        let filter = VocabularyFilter::default();
        assert_eq!(filter.clean("I don't see any other ingredients"), None);
        assert_eq!(filter.clean("Here are the items I found"), None);
        assert_eq!(filter.clean("Based on the image, vodka"), None);
    }

    #[test]
    fn test_brand_names_kept() {
        let filter = VocabularyFilter::default();
        assert_eq!(filter.clean("Tito's Vodka"), Some("Tito's Vodka".to_string()));
    }

    #[test]
    fn test_long_sentence_without_exemplar_discarded() {
        let filter = VocabularyFilter::default();
        assert_eq!(filter.clean("a bottle that might be gin maybe"), None);
    }

    #[test]
    fn test_long_line_with_exemplar_kept() {
        let filter = VocabularyFilter::default();
        assert_eq!(
            filter.clean("Fever-Tree Premium Indian Tonic Water"),
            Some("Fever-Tree Premium Indian Tonic Water".to_string())
        );
    }

    #[test]
    fn test_markers_and_quotes_stripped() {
        let filter = VocabularyFilter::default();
        assert_eq!(filter.clean("- lime"), Some("lime".to_string()));
        assert_eq!(filter.clean("2. \"Gin\""), Some("Gin".to_string()));
        assert_eq!(filter.clean("• soda water."), Some("soda water".to_string()));
    }

    #[test]
    fn test_measures_survive_prefix_stripping() {
        let filter = VocabularyFilter::default();
        assert_eq!(filter.clean("2 oz gin"), Some("2 oz gin".to_string()));
        assert_eq!(
            filter.clean("1.5 oz bourbon"),
            Some("1.5 oz bourbon".to_string())
        );
        assert_eq!(filter.clean("1. Gin"), Some("Gin".to_string()));
    }

    #[test]
    fn test_parse_detected_comma_separated() {
        let filter = VocabularyFilter::default();
        let detected =
            filter.parse_detected("lime, mint leaves, white rum, I don't see anything else");
        assert_eq!(detected, vec!["lime", "mint leaves", "white rum"]);
    }

    #[test]
    fn test_parse_detected_json_array() {
        let filter = VocabularyFilter::default();
        let detected = filter.parse_detected(r#"["vodka", "lime juice", "ginger beer"]"#);
        assert_eq!(detected, vec!["vodka", "lime juice", "ginger beer"]);
    }

    #[test]
    fn test_parse_detected_newline_separated() {
        let filter = VocabularyFilter::default();
        let detected = filter.parse_detected("- gin\n- tonic water\n- lime");
        assert_eq!(detected, vec!["gin", "tonic water", "lime"]);
    }

    #[test]
    fn test_custom_config_honored() {
        let config = FilterConfig {
            deny_phrases: vec!["nothing here".to_string()],
            max_tokens: 2,
            brand_exemplars: vec!["house brand".to_string()],
        };
        let filter = VocabularyFilter::new(config);
        assert_eq!(filter.clean("fresh lime juice"), None);
        assert_eq!(
            filter.clean("house brand triple sec"),
            Some("house brand triple sec".to_string())
        );
        assert_eq!(filter.clean("nothing here"), None);
        assert_eq!(filter.clean("lime"), Some("lime".to_string()));
    }
}
