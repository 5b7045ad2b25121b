//! # Form Session
//!
//! State of one recipe search, from the first keystroke to the detail view.
//!
//! ## Flow
//! - Ingredient and preference edits only change the form
//! - [`FormAction::Submit`] runs the matcher once over the bank
//! - Results stay as they are until the next submit, even if the form changes
//! - Selecting a found recipe opens its detail, [`FormAction::Back`] returns
//!
//! All changes go through [`FormSession::apply`].
use bank::{CookingTime, DietaryTag, MealType, Preferences, Recipe, RecipeBank, RecipeRequest};
use tracing::{debug, info};

use crate::{detail::DetailView, ingredients::IngredientInput};

pub const NO_RESULTS_HINT: &str = "Try adjusting your ingredients or preferences to find more recipes.";
pub const INGREDIENT_TIP: &str =
    r#"Tip: Start with common ingredients like "chicken", "pasta", or "tomatoes""#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    InputChanged(String),
    AddIngredient,
    AddSuggestion(String),
    RemoveIngredient(String),
    ToggleMealType(MealType),
    SetDietary(DietaryTag, bool),
    ToggleCookingTime(CookingTime),
    Submit,
    SelectRecipe(u32),
    Back,
}

#[derive(Debug, Clone)]
pub struct FormSession<'a> {
    bank: &'a RecipeBank,
    ingredients: IngredientInput,
    preferences: Preferences,
    found: Option<Vec<&'a Recipe>>,
    selected: Option<&'a Recipe>,
}

impl<'a> FormSession<'a> {
    pub fn new(bank: &'a RecipeBank) -> Self {
        Self {
            bank,
            ingredients: IngredientInput::default(),
            preferences: Preferences::default(),
            found: None,
            selected: None,
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::InputChanged(value) => self.ingredients.set_current(value),
            FormAction::AddIngredient => {
                self.ingredients.add_current();
            }
            FormAction::AddSuggestion(suggestion) => self.ingredients.add_suggestion(&suggestion),
            FormAction::RemoveIngredient(ingredient) => {
                self.ingredients.remove(&ingredient);
            }
            FormAction::ToggleMealType(meal_type) => self.preferences.toggle_meal_type(meal_type),
            FormAction::SetDietary(tag, checked) => self.preferences.set_dietary(tag, checked),
            FormAction::ToggleCookingTime(cooking_time) => {
                self.preferences.toggle_cooking_time(cooking_time)
            }
            FormAction::Submit => self.submit(),
            FormAction::SelectRecipe(id) => self.select(id),
            FormAction::Back => self.selected = None,
        }
    }

    fn submit(&mut self) {
        let ingredients = self.ingredients.list().as_slice();

        info!("Searching for recipes with ingredients: {ingredients:?}");
        info!("Preferences: {:?}", self.preferences);

        let bank = self.bank;
        let found = bank.find_matches(ingredients, &self.preferences);
        debug!("Matched {} of {} recipes", found.len(), bank.len());

        self.found = Some(found);
        self.selected = None;
    }

    fn select(&mut self, id: u32) {
        let recipe = self
            .found()
            .iter()
            .copied()
            .find(|recipe| recipe.id == id);

        if recipe.is_none() {
            debug!("Recipe {id} is not among the results, ignoring selection");
        }

        self.selected = recipe;
    }

    pub fn ingredients(&self) -> &IngredientInput {
        &self.ingredients
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn has_searched(&self) -> bool {
        self.found.is_some()
    }

    pub fn found(&self) -> &[&'a Recipe] {
        self.found.as_deref().unwrap_or_default()
    }

    /// What the remote API expects for the current form.
    pub fn request(&self) -> RecipeRequest {
        RecipeRequest {
            ingredients: self.ingredients.list().as_slice().to_vec(),
            preferences: self.preferences.clone(),
        }
    }

    pub fn heading(&self) -> Option<String> {
        self.found.as_ref().map(|found| results_heading(found.len()))
    }

    pub fn hint(&self) -> Option<[&'static str; 2]> {
        match &self.found {
            Some(found) if found.is_empty() => Some([NO_RESULTS_HINT, INGREDIENT_TIP]),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<DetailView<'a>> {
        self.selected.map(DetailView)
    }
}

pub fn results_heading(count: usize) -> String {
    match count {
        0 => "No recipes found with those criteria".to_string(),
        1 => "Found 1 recipe for you!".to_string(),
        n => format!("Found {n} recipes for you!"),
    }
}
