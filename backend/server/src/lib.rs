//! Documentation of the recipe finder backend.
//!
//!
//!
//! # General Infrastructure
//! - The form collects ingredients and preferences, then posts them to `/api/recipes`
//! - The server filters its recipe bank with the same matcher the form uses locally
//! - The bank is loaded once at startup and only read afterwards
//! - Handlers share the bank through an `Arc`, no locking needed
//!
//!
//!
//! # Endpoints
//!
//! | Method | Path                | Body                                | Response          |
//! |--------|---------------------|-------------------------------------|-------------------|
//! | GET    | `/`                 |                                     | health status     |
//! | POST   | `/api/recipes`      | `{ingredients, preferences}`        | array of recipes  |
//! | GET    | `/api/recipes/:id`  |                                     | single recipe     |
//!
//! A body that is not a valid request gets `400 Malformed payload`.
//! An unknown id gets `404`.
//!
//!
//!
//! # Configuration
//!
//! | Variable            | Default | Meaning                                   |
//! |---------------------|---------|-------------------------------------------|
//! | `RUST_PORT`         | `8000`  | Listening port                            |
//! | `RECIPES_PATH`      | unset   | JSON recipe bank replacing the samples    |
//! | `CORS_MAX_AGE_SECS` | `3600`  | Preflight cache lifetime                  |
//! | `RUST_LOG`          | unset   | `tracing` filter, e.g. `server=debug`     |
//!
//!
//!
//! # Setup
//!
//! Start the server.
//! ```sh
//! RUST_LOG=info cargo run --bin recipe-server
//! ```
//!
//! Query it.
//! ```sh
//! curl -X POST localhost:8000/api/recipes \
//!     -H 'Content-Type: application/json' \
//!     -d '{"ingredients": ["tomatoes"], "preferences": {"mealType": "", "dietaryPreference": [], "cookingTime": ""}}'
//! ```
//!
//! Serve a custom bank, exported first with the command line tool.
//! ```sh
//! cargo run --bin finder -- export recipes.json
//! RECIPES_PATH=recipes.json cargo run --bin recipe-server
//! ```
use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::ctrl_c;
#[cfg(unix)]
use signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use error::ServerError;
use routes::{health_handler, recipe_handler, recipes_handler};
use state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(state.config.cors_max_age);

    Router::new()
        .route("/", get(health_handler))
        .route("/api/recipes", post(recipes_handler))
        .route("/api/recipes/:id", get(recipe_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> Result<(), ServerError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config)?;
    info!("Serving {} recipes", state.bank.len());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
