use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_BATCH_SIZE: usize = 5000;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Skill taxonomy JSON. The bundled taxonomy is used when unset.
    pub taxonomy_path: Option<PathBuf>,
    pub max_batch_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            taxonomy_path: optional_env("TAXONOMY_PATH").map(PathBuf::from),
            max_batch_size: match optional_env("MAX_BATCH_SIZE") {
                Some(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("MAX_BATCH_SIZE must be a positive integer, got '{raw}'"))?,
                None => DEFAULT_MAX_BATCH_SIZE,
            },
        };
        anyhow::ensure!(config.max_batch_size > 0, "MAX_BATCH_SIZE must be greater than zero");

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            taxonomy_path: None,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
