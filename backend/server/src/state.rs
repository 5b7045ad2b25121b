use std::sync::Arc;

use bank::{RecipeBank, load_bank};
use tracing::info;

use super::{config::Config, error::ConfigError};

pub struct AppState {
    pub bank: RecipeBank,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, ConfigError> {
        let bank = match &config.recipes_path {
            Some(path) => load_bank(path)?,
            None => {
                info!("RECIPES_PATH not set, serving built-in recipes");
                RecipeBank::sample()
            }
        };

        Ok(Self::with_bank(bank, config))
    }

    pub fn with_bank(bank: RecipeBank, config: Config) -> Arc<Self> {
        Arc::new(Self { bank, config })
    }
}
