//! # Finder
//!
//! Command line front for the recipe finder.
//!
//! ## Commands
//! - `search`: fill the form from flags, submit, print the result cards
//! - `suggest`: print ingredient suggestions for partial input
//! - `show`: print the detail view of one recipe
//! - `export`: write the built-in recipes as a bank file for the server
//!
//! ## Examples
//! ```sh
//! finder search -i tomatoes
//! finder search --diet vegan
//! finder search -c fast --remote --url http://localhost:8000/api
//! finder suggest pep --have peppers
//! finder show 3
//! finder export recipes.json
//! ```
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, anyhow};
use bank::{Recipe, RecipeBank, load_bank, remote::RecipeClient, write_bank};
use indicatif::{ProgressBar, ProgressStyle};
use recipe_finder::{
    FormAction, FormSession,
    detail::{DetailView, RecipeCard},
    ingredients::{IngredientList, suggest},
    session::{INGREDIENT_TIP, NO_RESULTS_HINT, results_heading},
};
use tracing::info;

pub mod models;
pub mod utils;

use models::{SearchArgs, ShowArgs, SuggestArgs};
use utils::split_ingredients;

pub async fn search(args: SearchArgs) -> Result<()> {
    let bank = open_bank(args.bank.as_deref())?;
    let mut session = build_session(&bank, &args);

    if args.remote {
        let found = fetch_remote(&args.url, &session).await?;
        let found: Vec<&Recipe> = found.iter().collect();

        return print_results(&found, args.json);
    }

    session.apply(FormAction::Submit);
    print_results(session.found(), args.json)
}

/// Fills the form from flags the same way a user would, without submitting.
pub fn build_session<'a>(bank: &'a RecipeBank, args: &SearchArgs) -> FormSession<'a> {
    let mut session = FormSession::new(bank);

    for ingredient in split_ingredients(&args.ingredients) {
        session.apply(FormAction::InputChanged(ingredient));
        session.apply(FormAction::AddIngredient);
    }

    if let Some(meal_type) = args.meal_type {
        session.apply(FormAction::ToggleMealType(meal_type));
    }

    for &tag in &args.dietary {
        session.apply(FormAction::SetDietary(tag, true));
    }

    if let Some(cooking_time) = args.cooking_time {
        session.apply(FormAction::ToggleCookingTime(cooking_time));
    }

    session
}

async fn fetch_remote(url: &str, session: &FormSession<'_>) -> Result<Vec<Recipe>> {
    let client = RecipeClient::new(url);
    let request = session.request();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Asking {}", client.base_url()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client
        .find_recipes(&request.ingredients, &request.preferences)
        .await;
    spinner.finish_and_clear();

    result.with_context(|| format!("Recipe API at {url} failed"))
}

fn print_results(found: &[&Recipe], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(found)?);
        return Ok(());
    }

    println!("{}\n", results_heading(found.len()));

    if found.is_empty() {
        println!("{NO_RESULTS_HINT}");
        println!("{INGREDIENT_TIP}");
    }

    for recipe in found {
        println!("{}\n", RecipeCard(recipe));
    }

    Ok(())
}

pub fn suggestions(args: SuggestArgs) {
    let mut have = IngredientList::default();
    for ingredient in split_ingredients(&args.have) {
        have.add(&ingredient);
    }

    for suggestion in suggest(&args.input, &have) {
        println!("{suggestion}");
    }
}

pub fn show(args: ShowArgs) -> Result<()> {
    let bank = open_bank(args.bank.as_deref())?;
    print!("{}", render_detail(&bank, args.id)?);

    Ok(())
}

fn render_detail(bank: &RecipeBank, id: u32) -> Result<String> {
    let recipe = bank
        .get(id)
        .ok_or_else(|| anyhow!("No recipe with id {id}"))?;

    Ok(DetailView(recipe).to_string())
}

pub fn export(path: PathBuf) -> Result<()> {
    let bank = RecipeBank::sample();
    write_bank(&bank, &path)?;

    info!("Wrote {} recipes to {}", bank.len(), path.display());
    println!("Wrote {} recipes to {}", bank.len(), path.display());

    Ok(())
}

fn open_bank(path: Option<&Path>) -> Result<RecipeBank> {
    match path {
        Some(path) => Ok(load_bank(path)?),
        None => Ok(RecipeBank::sample()),
    }
}
