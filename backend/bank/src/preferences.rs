//! # Preferences
//!
//! What the user asked for beyond ingredients.
//!
//! - Meal type and cooking time are single selects with toggle semantics:
//!   picking the active value again clears it
//! - Dietary preference is a checkbox set
//!
//! On the wire an unset single select is an empty string, matching what the
//! form has always sent. `null` and a missing key are accepted as unset too.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::recipes::{CookingTime, DietaryTag, MealType};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default, with = "blank_as_none")]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub dietary_preference: BTreeSet<DietaryTag>,
    #[serde(default, with = "blank_as_none")]
    pub cooking_time: Option<CookingTime>,
}

impl Preferences {
    pub fn toggle_meal_type(&mut self, meal_type: MealType) {
        self.meal_type = toggled(self.meal_type, meal_type);
    }

    pub fn toggle_cooking_time(&mut self, cooking_time: CookingTime) {
        self.cooking_time = toggled(self.cooking_time, cooking_time);
    }

    pub fn set_dietary(&mut self, tag: DietaryTag, checked: bool) {
        if checked {
            self.dietary_preference.insert(tag);
        } else {
            self.dietary_preference.remove(&tag);
        }
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.meal_type.is_none() && self.cooking_time.is_none() && self.dietary_preference.is_empty()
    }
}

fn toggled<T: PartialEq>(current: Option<T>, selected: T) -> Option<T> {
    match current {
        Some(active) if active == selected => None,
        _ => Some(selected),
    }
}

mod blank_as_none {
    use std::{fmt::Display, str::FromStr};

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;

        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some).map_err(de::Error::custom),
        }
    }
}
