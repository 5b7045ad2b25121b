use std::collections::BTreeSet;

use crate::recipes::{
    CookingTime::{Fast, Medium},
    DietaryTag::{GlutenFree, Vegan, Vegetarian},
    MealType::{Breakfast, Dessert, Dinner, Lunch},
    Recipe,
};

/// Built-in recipes served when no bank file is configured.
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Creamy Mushroom Pasta".to_string(),
            ingredients: strings(&["pasta", "mushrooms", "cream", "garlic", "onion"]),
            cooking_time: Medium,
            meal_type: Dinner,
            dietary_preference: BTreeSet::from([Vegetarian]),
            description: "A rich and creamy pasta dish with sautéed mushrooms".to_string(),
            image: "🍝".to_string(),
        },
        Recipe {
            id: 2,
            title: "Chocolate Avocado Mousse".to_string(),
            ingredients: strings(&["avocado", "cocoa powder", "maple syrup", "vanilla"]),
            cooking_time: Fast,
            meal_type: Dessert,
            dietary_preference: BTreeSet::from([Vegan, GlutenFree]),
            description: "A healthy, decadent chocolate dessert".to_string(),
            image: "🍫".to_string(),
        },
        Recipe {
            id: 3,
            title: "Mediterranean Quinoa Bowl".to_string(),
            ingredients: strings(&["quinoa", "tomatoes", "cucumber", "olives", "feta"]),
            cooking_time: Medium,
            meal_type: Lunch,
            dietary_preference: BTreeSet::from([Vegetarian, GlutenFree]),
            description: "Fresh and healthy Mediterranean-inspired bowl".to_string(),
            image: "🥗".to_string(),
        },
        Recipe {
            id: 4,
            title: "Banana Oat Pancakes".to_string(),
            ingredients: strings(&["banana", "oats", "eggs", "milk", "cinnamon"]),
            cooking_time: Fast,
            meal_type: Breakfast,
            dietary_preference: BTreeSet::from([Vegetarian]),
            description: "Fluffy, healthy pancakes perfect for morning".to_string(),
            image: "🥞".to_string(),
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
