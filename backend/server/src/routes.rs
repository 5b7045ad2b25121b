use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use bank::Recipe;
use serde::Serialize;
use tracing::{debug, info};

use crate::{error::AppError, state::AppState, utils::get_request};

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
}

pub async fn health_handler() -> Json<Health> {
    Json(Health {
        status: "ok",
        message: "Recipe API is running",
    })
}

pub async fn recipes_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let request = get_request(body)?;

    info!("Searching for recipes with ingredients: {:?}", request.ingredients);
    debug!("Preferences: {:?}", request.preferences);

    let found: Vec<Recipe> = state
        .bank
        .find_matches(&request.ingredients, &request.preferences)
        .into_iter()
        .cloned()
        .collect();

    info!("Found {} of {} recipes", found.len(), state.bank.len());

    Ok(Json(found))
}

pub async fn recipe_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Recipe>, AppError> {
    state
        .bank
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(AppError::RecipeNotFound(id))
}
