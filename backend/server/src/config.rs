use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::{info, warn};

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub recipes_path: Option<PathBuf>,
    pub cors_max_age: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            recipes_path: None,
            cors_max_age: Duration::from_secs(60 * 60),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("RUST_PORT", "8000")?,
            recipes_path: var("RECIPES_PATH").map(PathBuf::from),
            cors_max_age: Duration::from_secs(try_load("CORS_MAX_AGE_SECS", "3600")?),
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse(key, &value)
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    value.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");

        ConfigError::Invalid {
            key: key.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse::<u16>("RUST_PORT", " 8080 ").unwrap(), 8080);
    }

    #[test]
    fn test_parse_invalid_port() {
        let err = parse::<u16>("RUST_PORT", "eighty").unwrap_err();

        match err {
            ConfigError::Invalid { key, value, .. } => {
                assert_eq!(key, "RUST_PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_out_of_range_port() {
        assert!(parse::<u16>("RUST_PORT", "70000").is_err());
    }
}
