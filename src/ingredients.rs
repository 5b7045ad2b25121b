//! # Ingredient Capture
//!
//! Free-text ingredient entry with suggestions.
//!
//! - Entries are trimmed, blanks are ignored, duplicates are ignored
//! - Removing takes the exact entry out
//! - Suggestions come from [`COMMON_INGREDIENTS`] by case-insensitive
//!   substring, skip what was already added, and stop at [`MAX_SUGGESTIONS`]

pub const COMMON_INGREDIENTS: [&str; 35] = [
    "chicken", "beef", "pork", "fish", "eggs", "milk", "cheese", "butter", "rice", "pasta",
    "bread", "flour", "potatoes", "onions", "garlic", "tomatoes", "carrots", "peppers",
    "mushrooms", "spinach", "broccoli", "lettuce", "apples", "bananas", "lemons", "oranges",
    "berries", "avocado", "olive oil", "salt", "pepper", "herbs", "spices", "honey", "sugar",
];

pub const MAX_SUGGESTIONS: usize = 5;

/// Ordered ingredient set, unique on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    /// Returns false when `raw` was blank or already present.
    pub fn add(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();

        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }

        self.items.push(trimmed.to_string());
        true
    }

    pub fn remove(&mut self, ingredient: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != ingredient);

        self.items.len() != before
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.iter().any(|item| item == ingredient)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn suggest(input: &str, existing: &IngredientList) -> Vec<&'static str> {
    if input.is_empty() {
        return Vec::new();
    }

    let needle = input.to_lowercase();

    COMMON_INGREDIENTS
        .iter()
        .copied()
        .filter(|candidate| candidate.to_lowercase().contains(&needle) && !existing.contains(candidate))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// The ingredient field: pending text, its suggestions and the list so far.
#[derive(Debug, Clone, Default)]
pub struct IngredientInput {
    list: IngredientList,
    current: String,
    suggestions: Vec<&'static str>,
}

impl IngredientInput {
    pub fn list(&self) -> &IngredientList {
        &self.list
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    pub fn set_current(&mut self, value: impl Into<String>) {
        self.current = value.into();
        self.suggestions = suggest(&self.current, &self.list);
    }

    /// Adds the pending text. The field is only cleared when it was accepted.
    pub fn add_current(&mut self) -> bool {
        let added = self.list.add(&self.current);

        if added {
            self.clear_pending();
        }

        added
    }

    pub fn add_suggestion(&mut self, suggestion: &str) {
        self.list.add(suggestion);
        self.clear_pending();
    }

    pub fn remove(&mut self, ingredient: &str) -> bool {
        self.list.remove(ingredient)
    }

    fn clear_pending(&mut self) {
        self.current.clear();
        self.suggestions.clear();
    }
}
