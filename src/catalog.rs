use std::collections::HashSet;
use std::path::Path;

use log::{debug, info};

use crate::error::SuggestError;
use crate::model::{MatchResult, Recipe};

/// The stock recipes bundled with the crate, embedded at compile time.
const BUNDLED_CATALOG: &str = include_str!("../data/cocktails.json");

/// The fixed, immutable recipe catalog. Constructed once at startup and
/// shared read-only; matching never mutates it.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog, rejecting any recipe with zero ingredients. A recipe
    /// without ingredients would make match scoring meaningless, so the whole
    /// batch is refused rather than silently repaired.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, SuggestError> {
        for recipe in &recipes {
            if recipe.ingredients.is_empty() {
                return Err(SuggestError::MalformedCatalogEntry {
                    recipe: recipe.name.clone(),
                });
            }
        }
        info!("Loaded catalog with {} recipes", recipes.len());
        Ok(Catalog { recipes })
    }

    /// Parse a catalog from a JSON document (an array of recipe records).
    pub fn from_json(json: &str) -> Result<Self, SuggestError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Catalog::new(recipes)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_file(path: &Path) -> Result<Self, SuggestError> {
        let json = std::fs::read_to_string(path)?;
        Catalog::from_json(&json)
    }

    /// The ten stock cocktails shipped with the crate.
    pub fn bundled() -> Result<Self, SuggestError> {
        Catalog::from_json(BUNDLED_CATALOG)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// All distinct ingredient names across the catalog, sorted.
    pub fn all_ingredients(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .recipes
            .iter()
            .flat_map(|recipe| recipe.ingredients.iter().map(|ing| ing.name.clone()))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        names.sort();
        names
    }

    /// Score every catalog recipe against the user's ingredient set.
    ///
    /// Matching is exact, case-insensitive and trimmed; no fuzzy matching.
    /// Results are ordered makeable-first, then by descending match
    /// percentage, with catalog order breaking ties (stable sort).
    pub fn find_cocktails(&self, user_ingredients: &[String]) -> Result<Vec<MatchResult>, SuggestError> {
        if user_ingredients.is_empty() {
            return Err(SuggestError::InvalidInput(
                "ingredients must be a non-empty list".to_string(),
            ));
        }

        let user_set: HashSet<String> = user_ingredients
            .iter()
            .map(|ing| ing.trim().to_lowercase())
            .collect();

        let mut results: Vec<MatchResult> = self
            .recipes
            .iter()
            .map(|recipe| {
                let missing: Vec<String> = recipe
                    .ingredients
                    .iter()
                    .filter(|ing| !user_set.contains(&ing.name.to_lowercase()))
                    .map(|ing| ing.name.clone())
                    .collect();
                let total = recipe.ingredients.len();
                let matched = total - missing.len();
                let percentage = ((matched as f64 / total as f64) * 100.0).round() as u8;
                debug!(
                    "{}: {}/{} ingredients matched ({}%)",
                    recipe.name, matched, total, percentage
                );
                MatchResult {
                    recipe: recipe.clone(),
                    can_make: missing.is_empty(),
                    missing_ingredients: missing,
                    match_percentage: percentage,
                }
            })
            .collect();

        // Vec::sort_by is stable, so catalog order survives as the tie-break.
        results.sort_by(|a, b| {
            b.can_make
                .cmp(&a.can_make)
                .then(b.match_percentage.cmp(&a.match_percentage))
        });

        Ok(results)
    }
}
