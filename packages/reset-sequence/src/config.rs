use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Tool configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Path to a TOML model manifest. When absent, tables are resolved
    /// against the live database catalog.
    pub model_registry: Option<PathBuf>,
}

impl Config {
    /// Load configuration, preferring explicit values over the environment
    pub fn load(database_url: Option<String>, model_registry: Option<PathBuf>) -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let database_url = match database_url {
            Some(url) => url,
            None => env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
        };

        let model_registry = model_registry.or_else(|| {
            env::var("MODEL_REGISTRY")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        });

        Ok(Self {
            database_url,
            model_registry,
        })
    }
}
