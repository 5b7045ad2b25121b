use axum::body::Bytes;
use bank::RecipeRequest;
use tracing::warn;

use crate::error::AppError;

pub fn get_request(body: Bytes) -> Result<RecipeRequest, AppError> {
    let mut request: RecipeRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected recipe request: {e}");
        AppError::MalformedPayload
    })?;

    request.ingredients = sanitize_ingredients(request.ingredients);

    Ok(request)
}

/// Same rules as the form: trimmed, no blanks, first occurrence wins.
pub fn sanitize_ingredients(ingredients: Vec<String>) -> Vec<String> {
    let mut sanitized: Vec<String> = Vec::with_capacity(ingredients.len());

    for ingredient in ingredients {
        let trimmed = ingredient.trim();

        if trimmed.is_empty() || sanitized.iter().any(|kept| kept == trimmed) {
            continue;
        }

        sanitized.push(trimmed.to_string());
    }

    sanitized
}
