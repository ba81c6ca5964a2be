//! Configuration management for the Training Diary client
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: TD__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host part of the API, without the `/api/v1` prefix
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
            },
        }
    }
}

impl ClientConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with TD__ prefix
    ///    e.g., TD__API__BASE_URL=https://diary.example.com
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&ClientConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(config::Environment::with_prefix("TD").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Build a configuration pointing at the given host
    ///
    /// Mostly useful for tests and embedding, where the hierarchical
    /// loading above is unwanted.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV").map(|v| v == "production").unwrap_or(false)
    }
}
