use std::{error::Error, fs};

use bank::{CookingTime, DietaryTag, RecipeRequest};

const REQUEST_PATH: &str = "../request.json";

/// Writes a request body for poking the server by hand:
/// `curl -X POST localhost:8000/api/recipes -H 'Content-Type: application/json' -d @request.json`
fn main() -> Result<(), Box<dyn Error>> {
    let mut request = RecipeRequest {
        ingredients: vec!["banana".to_string(), "avocado".to_string()],
        ..RecipeRequest::default()
    };
    request.preferences.toggle_cooking_time(CookingTime::Fast);
    request.preferences.set_dietary(DietaryTag::Vegetarian, true);

    let body = serde_json::to_string_pretty(&request)?;
    println!("{body}");

    fs::write(REQUEST_PATH, body)?;

    Ok(())
}
