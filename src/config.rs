//! Application configuration
//!
//! Configuration comes from the process environment, optionally seeded from
//! a `.env` file in the working directory. Real environment variables win
//! over `.env` entries.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Environment variable holding the server bind address.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
/// Environment variable holding the data file path.
pub const ENV_DATA_FILE_PATH: &str = "DATA_FILE_PATH";
/// Environment variable holding the deployment environment name.
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";
/// Environment variable holding the comma-separated CORS origin list.
pub const ENV_CORS_ORIGINS: &str = "CORS_ORIGINS";

/// Configuration validation errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Bind address does not parse as host:port
    #[error("invalid bind address '{addr}': {reason}")]
    InvalidBindAddr { addr: String, reason: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to (default: "0.0.0.0:8080")
    pub bind_addr: String,

    /// Path of the JSON file holding the product collection (default: "data.json")
    pub data_file: PathBuf,

    /// Deployment environment name (default: "local")
    pub environment: String,

    /// CORS allowed origins; empty means any origin is accepted
    pub cors_origins: Vec<String>,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data.json")
}

fn default_environment() -> String {
    "local".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            data_file: default_data_file(),
            environment: default_environment(),
            cors_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset or empty.
    pub fn from_env() -> Self {
        // Missing .env files are fine; variables already in the
        // environment are never overridden.
        let _ = dotenv::dotenv();

        let mut config = Self::default();
        if let Some(addr) = read_var(ENV_BIND_ADDR) {
            config.bind_addr = addr;
        }
        if let Some(path) = read_var(ENV_DATA_FILE_PATH) {
            config.data_file = PathBuf::from(path);
        }
        if let Some(env_name) = read_var(ENV_ENVIRONMENT) {
            config.environment = env_name;
        }
        if let Some(origins) = read_var(ENV_CORS_ORIGINS) {
            config.cors_origins = parse_origins(&origins);
        }
        config
    }

    /// Validate settings that can fail at startup rather than mid-request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr {
                addr: self.bind_addr.clone(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    /// Default tracing filter for this environment. `RUST_LOG` overrides.
    pub fn default_log_filter(&self) -> &'static str {
        if self.environment == "local" {
            "debug"
        } else {
            "info"
        }
    }
}

fn read_var(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
