use std::path::PathBuf;

use bank::{CookingTime, DietaryTag, MealType, remote::DEFAULT_API_URL};
use clap::Args;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Ingredient you have, repeat or separate with commas
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    #[arg(short, long)]
    pub meal_type: Option<MealType>,

    /// Dietary preference, repeat for several
    #[arg(short, long = "diet")]
    pub dietary: Vec<DietaryTag>,

    #[arg(short, long)]
    pub cooking_time: Option<CookingTime>,

    /// Recipe bank file, defaults to the built-in recipes
    #[arg(long, conflicts_with = "remote")]
    pub bank: Option<PathBuf>,

    /// Ask the recipe API instead of matching locally
    #[arg(long)]
    pub remote: bool,

    #[arg(long, env = "RECIPE_API_URL", default_value = DEFAULT_API_URL)]
    pub url: String,

    /// Print matches as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SuggestArgs {
    pub input: String,

    /// Ingredient already added, left out of suggestions
    #[arg(long = "have")]
    pub have: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    pub id: u32,

    #[arg(long)]
    pub bank: Option<PathBuf>,
}
