//! Turning a free-form model reply into structured recipe records.
//!
//! Replies arrive in wildly different shapes depending on the model and the
//! prompt: clean JSON, JSON buried in prose, markdown sections, or plain
//! paragraphs. The extractor runs a cascade of stages from most to least
//! structured and stops at the first stage that yields at least one record.
//! A stage that fails to parse never aborts the cascade; it simply yields
//! nothing and the next stage runs.

mod direct_json;
mod embedded_json;
mod markdown;
mod name_detail;
mod sanitize;

pub use sanitize::SEE_INSTRUCTIONS;

use log::{debug, info, warn};

use crate::model::GeneratedRecipe;
use crate::vocab::{FilterConfig, VocabularyFilter};

/// The outcome of running the cascade over one reply.
///
/// `recipes` is never empty: when no stage produces a record, a single
/// placeholder recipe is returned and `parsed` is false so callers can tell
/// a real extraction from the fallback.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub recipes: Vec<GeneratedRecipe>,
    pub parsed: bool,
}

/// Advisory hint about how a reply was produced, used for logging only.
/// Every reply runs the same cascade regardless of the hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseHint {
    Json,
    FreeText,
}

/// Runs the stage cascade over raw model replies.
pub struct ResponseExtractor {
    filter: VocabularyFilter,
}

impl Default for ResponseExtractor {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl ResponseExtractor {
    pub fn new(filter_config: FilterConfig) -> Self {
        Self {
            filter: VocabularyFilter::new(filter_config),
        }
    }

    /// Run the cascade over a reply. Never fails and never returns an empty
    /// recipe list.
    pub fn extract(&self, content: &str) -> Extraction {
        if content.trim().is_empty() {
            warn!("Empty model reply, returning placeholder recipe");
            return Extraction {
                recipes: vec![GeneratedRecipe::sentinel()],
                parsed: false,
            };
        }

        let stages: [(&str, fn(&Self, &str) -> Vec<GeneratedRecipe>); 4] = [
            ("direct json", |_, c| direct_json::extract(c)),
            ("embedded json", |_, c| embedded_json::extract(c)),
            ("markdown sections", |s, c| markdown::extract(c, &s.filter)),
            ("name-detail lines", |_, c| name_detail::extract(c)),
        ];

        for (label, stage) in stages {
            let recipes = stage(self, content);
            if !recipes.is_empty() {
                info!("Extracted {} recipe(s) via {} stage", recipes.len(), label);
                return Extraction {
                    recipes,
                    parsed: true,
                };
            }
            debug!("Stage yielded nothing: {}", label);
        }

        warn!("No extraction stage matched the reply, returning placeholder recipe");
        Extraction {
            recipes: vec![GeneratedRecipe::sentinel()],
            parsed: false,
        }
    }

    /// Like [`extract`](Self::extract), with an advisory hint about the
    /// reply's expected shape. The hint only affects logging.
    pub fn extract_with_hint(&self, content: &str, hint: ResponseHint) -> Extraction {
        debug!("Extracting with hint {:?}", hint);
        let extraction = self.extract(content);
        if hint == ResponseHint::Json && !extraction.parsed {
            warn!("Reply was hinted as JSON but no stage could parse it");
        }
        extraction
    }
}
