//! # Recipe Bank
//!
//! Everything shared between the form, the server and the command line:
//! - [`recipes`]: the recipe record and its closed option lists
//! - [`preferences`]: meal type, dietary and cooking time selections
//! - [`matcher`]: the filter deciding which recipes fit
//! - [`remote`]: client for `POST /api/recipes`
//!
//! ## Storage
//! The bank is a plain JSON array of recipes. Without a bank file the four
//! built-in [`samples`] are used.
use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub mod error;
pub mod matcher;
pub mod preferences;
pub mod recipes;
pub mod remote;
pub mod samples;

pub use error::{BankError, ClientError};
pub use preferences::Preferences;
pub use recipes::{CookingTime, DietaryTag, MealType, Recipe};

/// Body of `POST /api/recipes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeBank {
    recipes: Vec<Recipe>,
}

impl RecipeBank {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn sample() -> Self {
        Self::new(samples::sample_recipes())
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

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn find_matches<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        preferences: &Preferences,
    ) -> Vec<&Recipe> {
        matcher::find_matches(&self.recipes, ingredients, preferences)
    }

    /// True when every id is non-zero and no two recipes share one.
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.recipes.len());

        self.recipes
            .iter()
            .all(|recipe| recipe.id != 0 && seen.insert(recipe.id))
    }

    /// Reassigns ids as 1..=n in collection order.
    pub fn renumber(&mut self) {
        for (recipe, id) in self.recipes.iter_mut().zip(1..) {
            recipe.id = id;
        }
    }
}

pub fn load_bank(path: &Path) -> Result<RecipeBank, BankError> {
    let data = fs::read(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bank: RecipeBank = serde_json::from_slice(&data)?;

    if !bank.has_unique_ids() {
        warn!("Recipe ids in {} are missing or repeated, renumbering", path.display());
        bank.renumber();
    }

    info!("Loaded {} recipes from {}", bank.len(), path.display());

    Ok(bank)
}

pub fn write_bank(bank: &RecipeBank, path: &Path) -> Result<(), BankError> {
    let data = serde_json::to_vec_pretty(bank)?;

    fs::write(path, data).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_sample_bank() {
        let bank = RecipeBank::sample();

        assert_eq!(bank.len(), 4);
        assert!(bank.has_unique_ids());
        assert_eq!(bank.get(3).map(|recipe| recipe.title.as_str()), Some("Mediterranean Quinoa Bowl"));
        assert!(bank.get(5).is_none());
    }

    #[test]
    fn test_write_then_load() {
        let file = NamedTempFile::new().unwrap();
        let bank = RecipeBank::sample();

        write_bank(&bank, file.path()).unwrap();
        let loaded = load_bank(file.path()).unwrap();

        assert_eq!(loaded, bank);
    }

    #[test]
    fn test_load_renumbers_missing_ids() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"title": "Porridge", "cookingTime": "Fast", "mealType": "Breakfast", "emoji": "🥣"}},
                {{"title": "Stew", "cookingTime": "Long", "mealType": "Dinner", "dietaryPreference": "Keto"}}
            ]"#
        )
        .unwrap();

        let bank = load_bank(file.path()).unwrap();

        let ids: Vec<u32> = bank.recipes().iter().map(|recipe| recipe.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(bank.recipes()[0].image, "🥣");
    }

    #[test]
    fn test_repeated_ids_are_not_unique() {
        let mut bank = RecipeBank::sample();
        let mut copy = bank.recipes()[0].clone();
        copy.title = "Second Pasta".to_string();
        bank.recipes.push(copy);

        assert!(!bank.has_unique_ids());
        bank.renumber();
        assert!(bank.has_unique_ids());
        assert_eq!(bank.get(5).map(|recipe| recipe.title.as_str()), Some("Second Pasta"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_bank(&dir.path().join("absent.json")).unwrap_err();

        assert!(matches!(err, BankError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not a list").unwrap();

        let err = load_bank(file.path()).unwrap_err();
        assert!(matches!(err, BankError::Malformed(_)));
    }

    #[test]
    fn test_request_defaults() {
        let request: RecipeRequest = serde_json::from_str("{}").unwrap();

        assert!(request.ingredients.is_empty());
        assert!(request.preferences.is_empty());
    }
}
