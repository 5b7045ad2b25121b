//! # Recipes
//!
//! Shape of a recipe as it travels between the bank, the server and the form.
//!
//! ## Wire Format
//! - camelCase JSON keys (`cookingTime`, `mealType`, `dietaryPreference`)
//! - Enum values are their display names, `"Gluten-Free"` rather than `GlutenFree`
//! - Parsing of enum values ignores case and surrounding whitespace
//!
//! ## Lenient Decoding
//! Recipe lists are not always produced by us. When decoding:
//! - `dietaryPreference` may be a single string instead of an array
//! - Unknown dietary tags are dropped with a warning, the rest of the recipe is kept
//! - `image` may be missing, in which case an `emoji` field is used instead
//! - `id` may be missing, see [`crate::RecipeBank::renumber`]
use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value:?}")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

fn parse_option<T: Copy>(
    kind: &'static str,
    options: &[T],
    name: impl Fn(&T) -> &'static str,
    input: &str,
) -> Result<T, ParseOptionError> {
    let trimmed = input.trim();

    options
        .iter()
        .find(|option| name(option).eq_ignore_ascii_case(trimmed))
        .copied()
        .ok_or_else(|| ParseOptionError {
            kind,
            value: input.to_string(),
        })
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
pub enum CookingTime {
    Fast,
    Medium,
    Long,
}

impl CookingTime {
    pub const ALL: [Self; 3] = [Self::Fast, Self::Medium, Self::Long];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "Fast",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fast => "⚡ Fast (Under 30 min)",
            Self::Medium => "⏱️ Medium (30-60 min)",
            Self::Long => "🕐 Long (Over 1 hour)",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
}

impl MealType {
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Dessert];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Dessert => "Dessert",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "🌅 Breakfast",
            Self::Lunch => "🥗 Lunch",
            Self::Dinner => "🍽️ Dinner",
            Self::Dessert => "🍰 Dessert",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr,
)]
pub enum DietaryTag {
    Vegan,
    Vegetarian,
    GlutenFree,
    DairyFree,
    LowCarb,
    Keto,
}

impl DietaryTag {
    pub const ALL: [Self; 6] = [
        Self::Vegan,
        Self::Vegetarian,
        Self::GlutenFree,
        Self::DairyFree,
        Self::LowCarb,
        Self::Keto,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegan => "Vegan",
            Self::Vegetarian => "Vegetarian",
            Self::GlutenFree => "Gluten-Free",
            Self::DairyFree => "Dairy-Free",
            Self::LowCarb => "Low-Carb",
            Self::Keto => "Keto",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Vegan => "🌱 Vegan",
            Self::Vegetarian => "🥬 Vegetarian",
            Self::GlutenFree => "🌾 Gluten-Free",
            Self::DairyFree => "🥛 Dairy-Free",
            Self::LowCarb => "🥩 Low-Carb",
            Self::Keto => "🥑 Keto",
        }
    }
}

macro_rules! impl_text {
    ($type:ty, $kind:literal) => {
        impl Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $type {
            type Err = ParseOptionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_option($kind, &Self::ALL, Self::as_str, s)
            }
        }
    };
}

impl_text!(CookingTime, "cooking time");
impl_text!(MealType, "meal type");
impl_text!(DietaryTag, "dietary preference");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawRecipe")]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub ingredients: Vec<String>,
    pub cooking_time: CookingTime,
    pub meal_type: MealType,
    pub dietary_preference: BTreeSet<DietaryTag>,
    pub description: String,
    pub image: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecipe {
    #[serde(default)]
    id: u32,
    title: String,
    #[serde(default)]
    ingredients: Vec<String>,
    cooking_time: CookingTime,
    meal_type: MealType,
    #[serde(default)]
    dietary_preference: OneOrMany<String>,
    #[serde(default)]
    description: String,
    image: Option<String>,
    emoji: Option<String>,
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        let tags = match raw.dietary_preference {
            OneOrMany::One(tag) => vec![tag],
            OneOrMany::Many(tags) => tags,
        };

        let dietary_preference = tags
            .iter()
            .filter_map(|tag| match tag.parse::<DietaryTag>() {
                Ok(tag) => Some(tag),
                Err(e) => {
                    warn!("Dropping tag from {:?}: {e}", raw.title);
                    None
                }
            })
            .collect();

        Self {
            id: raw.id,
            title: raw.title,
            ingredients: raw.ingredients,
            cooking_time: raw.cooking_time,
            meal_type: raw.meal_type,
            dietary_preference,
            description: raw.description,
            image: raw.image.or(raw.emoji).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!("fast".parse(), Ok(CookingTime::Fast));
        assert_eq!("  Dinner ".parse(), Ok(MealType::Dinner));
        assert_eq!("gluten-free".parse(), Ok(DietaryTag::GlutenFree));
        assert_eq!("LOW-CARB".parse(), Ok(DietaryTag::LowCarb));
    }

    #[test]
    fn test_parse_unknown_option() {
        let err = "Brunch".parse::<MealType>().unwrap_err();

        assert_eq!(err.kind, "meal type");
        assert_eq!(err.to_string(), r#"Unknown meal type: "Brunch""#);
    }

    #[test]
    fn test_display_uses_wire_names() {
        assert_eq!(DietaryTag::DairyFree.to_string(), "Dairy-Free");
        assert_eq!(CookingTime::Long.to_string(), "Long");
    }

    #[test]
    fn test_recipe_json_keys() {
        let recipe = Recipe {
            id: 7,
            title: "Toast".to_string(),
            ingredients: vec!["bread".to_string()],
            cooking_time: CookingTime::Fast,
            meal_type: MealType::Breakfast,
            dietary_preference: BTreeSet::from([DietaryTag::Vegan, DietaryTag::Vegetarian]),
            description: "Crunchy".to_string(),
            image: "🍞".to_string(),
        };

        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "title": "Toast",
                "ingredients": ["bread"],
                "cookingTime": "Fast",
                "mealType": "Breakfast",
                "dietaryPreference": ["Vegan", "Vegetarian"],
                "description": "Crunchy",
                "image": "🍞"
            })
        );
    }

    #[test]
    fn test_single_dietary_string_and_emoji_fallback() {
        let recipe: Recipe = serde_json::from_value(json!({
            "title": "Keto Eggs",
            "ingredients": ["eggs", "butter"],
            "cookingTime": "fast",
            "mealType": "Breakfast",
            "dietaryPreference": "Keto",
            "description": "Eggs in butter",
            "emoji": "🍳"
        }))
        .unwrap();

        assert_eq!(recipe.id, 0);
        assert_eq!(recipe.dietary_preference, BTreeSet::from([DietaryTag::Keto]));
        assert_eq!(recipe.image, "🍳");
    }

    #[test]
    fn test_image_wins_over_emoji() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": 1,
            "title": "Soup",
            "cookingTime": "Long",
            "mealType": "Dinner",
            "image": "🍲",
            "emoji": "🥣"
        }))
        .unwrap();

        assert_eq!(recipe.image, "🍲");
        assert!(recipe.dietary_preference.is_empty());
    }

    #[test]
    fn test_unknown_tag_is_dropped() {
        let recipe: Recipe = serde_json::from_value(json!({
            "title": "Mystery",
            "cookingTime": "Fast",
            "mealType": "Lunch",
            "dietaryPreference": ["High-Protein", "vegan"]
        }))
        .unwrap();

        assert_eq!(recipe.dietary_preference, BTreeSet::from([DietaryTag::Vegan]));
    }

    #[test]
    fn test_unknown_tag_keeps_the_list() {
        let recipes: Vec<Recipe> = serde_json::from_value(json!([
            {
                "id": 1,
                "title": "Steak",
                "cookingTime": "Medium",
                "mealType": "Dinner",
                "dietaryPreference": "High-Protein"
            },
            {
                "id": 2,
                "title": "Salad",
                "cookingTime": "Fast",
                "mealType": "Lunch",
                "dietaryPreference": ["Vegan"]
            }
        ]))
        .unwrap();

        assert_eq!(recipes.len(), 2);
        assert!(recipes[0].dietary_preference.is_empty());
        assert_eq!(recipes[1].dietary_preference, BTreeSet::from([DietaryTag::Vegan]));
    }

    #[test]
    fn test_unknown_meal_type_is_rejected() {
        let result = serde_json::from_value::<Recipe>(json!({
            "title": "Mystery",
            "cookingTime": "Fast",
            "mealType": "Brunch"
        }));

        assert!(result.is_err());
    }
}
