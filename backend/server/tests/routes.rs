use std::error::Error;

use axum::{
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use bank::{Recipe, RecipeBank};
use serde_json::{Value, json};
use server::{config::Config, router, state::AppState};
use tower::ServiceExt;

type TestResult = Result<(), Box<dyn Error>>;

fn app() -> axum::Router {
    router(AppState::with_bank(RecipeBank::sample(), Config::default()))
}

fn post_recipes(body: Value) -> Result<Request<Body>, axum::http::Error> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/recipes")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
}

async fn titles(response: axum::response::Response) -> Result<Vec<String>, Box<dyn Error>> {
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let recipes: Vec<Recipe> = serde_json::from_slice(&body)?;

    Ok(recipes.into_iter().map(|recipe| recipe.title).collect())
}

#[tokio::test]
async fn test_health() -> TestResult {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let value: Value = serde_json::from_slice(&body)?;
    assert_eq!(value, json!({ "status": "ok", "message": "Recipe API is running" }));

    Ok(())
}

#[tokio::test]
async fn test_tomatoes_request() -> TestResult {
    let request = post_recipes(json!({
        "ingredients": ["tomatoes"],
        "preferences": { "mealType": "", "dietaryPreference": [], "cookingTime": "" }
    }))?;

    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(titles(response).await?, vec!["Mediterranean Quinoa Bowl"]);

    Ok(())
}

#[tokio::test]
async fn test_vegan_request() -> TestResult {
    let request = post_recipes(json!({
        "ingredients": [],
        "preferences": { "dietaryPreference": ["Vegan"] }
    }))?;

    let response = app().oneshot(request).await?;
    assert_eq!(titles(response).await?, vec!["Chocolate Avocado Mousse"]);

    Ok(())
}

#[tokio::test]
async fn test_fast_request_ignores_missing_ingredients() -> TestResult {
    let request = post_recipes(json!({ "preferences": { "cookingTime": "Fast" } }))?;

    let response = app().oneshot(request).await?;
    assert_eq!(
        titles(response).await?,
        vec!["Chocolate Avocado Mousse", "Banana Oat Pancakes"]
    );

    Ok(())
}

#[tokio::test]
async fn test_no_match_is_empty_array() -> TestResult {
    let request = post_recipes(json!({ "ingredients": ["chicken"] }))?;

    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(titles(response).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_malformed_payload() -> TestResult {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/recipes")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"ingredients\": 42}"))?;

    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(&body[..], b"Malformed payload");

    Ok(())
}

#[tokio::test]
async fn test_recipe_by_id() -> TestResult {
    let response = app()
        .oneshot(Request::builder().uri("/api/recipes/4").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let recipe: Recipe = serde_json::from_slice(&body)?;
    assert_eq!(recipe.title, "Banana Oat Pancakes");

    Ok(())
}

#[tokio::test]
async fn test_unknown_recipe_id() -> TestResult {
    let response = app()
        .oneshot(Request::builder().uri("/api/recipes/99").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() -> TestResult {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/recipes")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(Body::empty())?;

    let response = app().oneshot(request).await?;

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|value| value.as_bytes()),
        Some(&b"*"[..])
    );

    Ok(())
}
