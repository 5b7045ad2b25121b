//! # Matcher
//!
//! Filters a recipe collection down to what the user can cook.
//!
//! A recipe is kept only when every active criterion holds:
//! - **Ingredients**: none entered, or at least one entered ingredient is a
//!   case-insensitive substring of at least one recipe ingredient
//! - **Meal type**: unset, or equal to the recipe's
//! - **Dietary preference**: empty, or shares a tag with the recipe
//! - **Cooking time**: unset, or equal to the recipe's
//!
//! Collection order is preserved.
use crate::{preferences::Preferences, recipes::Recipe};

pub fn find_matches<'a, S: AsRef<str>>(
    recipes: &'a [Recipe],
    ingredients: &[S],
    preferences: &Preferences,
) -> Vec<&'a Recipe> {
    let needles: Vec<String> = ingredients
        .iter()
        .map(|ingredient| ingredient.as_ref().to_lowercase())
        .collect();

    recipes
        .iter()
        .filter(|recipe| is_match(recipe, &needles, preferences))
        .collect()
}

/// `needles` must already be lowercase.
fn is_match(recipe: &Recipe, needles: &[String], preferences: &Preferences) -> bool {
    has_ingredient(recipe, needles)
        && preferences
            .meal_type
            .is_none_or(|meal_type| meal_type == recipe.meal_type)
        && (preferences.dietary_preference.is_empty()
            || !preferences
                .dietary_preference
                .is_disjoint(&recipe.dietary_preference))
        && preferences
            .cooking_time
            .is_none_or(|cooking_time| cooking_time == recipe.cooking_time)
}

fn has_ingredient(recipe: &Recipe, needles: &[String]) -> bool {
    needles.is_empty()
        || needles.iter().any(|needle| {
            recipe
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(needle.as_str()))
        })
}
