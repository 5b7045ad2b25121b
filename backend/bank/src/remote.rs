use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error};

use crate::{error::ClientError, preferences::Preferences, recipes::Recipe};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Serialize)]
struct Query<'a> {
    ingredients: &'a [String],
    preferences: &'a Preferences,
}

/// Client for the recipe API. Requests are sent once, without retries.
#[derive(Debug, Clone)]
pub struct RecipeClient {
    http_client: Client,
    base_url: String,
}

impl Default for RecipeClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl RecipeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn find_recipes(
        &self,
        ingredients: &[String],
        preferences: &Preferences,
    ) -> Result<Vec<Recipe>, ClientError> {
        let result = self.post_query(ingredients, preferences).await;

        if let Err(e) = &result {
            error!("Error fetching recipes: {e}");
        }

        result
    }

    async fn post_query(
        &self,
        ingredients: &[String],
        preferences: &Preferences,
    ) -> Result<Vec<Recipe>, ClientError> {
        let url = format!("{}/recipes", self.base_url);
        debug!("POST {url}");

        let response = self
            .http_client
            .post(&url)
            .json(&Query {
                ingredients,
                preferences,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        Ok(response.json().await?)
    }
}
