use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    /// Drop and recreate every table before serving. Destroys all data.
    pub reset_schema: bool,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:8080"),
            database_url: var("DATABASE_URL", "sqlite://attendance.db"),
            reset_schema: var("RESET_SCHEMA", "false")
                .parse()
                .context("RESET_SCHEMA must be `true` or `false`")?,
            log_dir: var("LOG_DIR", "logs"),
        })
    }
}
