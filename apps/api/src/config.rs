use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON job catalog to seed from instead of the embedded dataset.
    pub catalog_path: Option<PathBuf>,
    /// Fixed delay applied to every API request, in milliseconds.
    pub simulated_latency_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            catalog_path: None,
            simulated_latency_ms: 0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match var("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: var("RUST_LOG").unwrap_or(defaults.rust_log),
            catalog_path: var("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            simulated_latency_ms: match var("SIMULATED_LATENCY_MS") {
                Some(ms) => ms
                    .parse::<u64>()
                    .context("SIMULATED_LATENCY_MS must be a whole number of milliseconds")?,
                None => defaults.simulated_latency_ms,
            },
        })
    }
}
