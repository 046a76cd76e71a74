//! # API Configuration Module
//!
//! Settings come from environment variables, with defaults for everything:
//!
//! - `API_HOST`: Host address to bind to (default: "0.0.0.0")
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `DATABASE_URL`: SQLite connection string (default: "sqlite://store.db?mode=rwc")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `SEED_FILE`: JSON file read by the `seed` binary (default: "appointments.json")

use eyre::{Result, WrapErr};
use std::{env, path::PathBuf};
use tracing::Level;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://store.db?mode=rwc";
pub const DEFAULT_SEED_FILE: &str = "appointments.json";

/// Configuration for the fitslot API server
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use fitslot_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,

    pub port: u16,

    /// SQLite database connection string
    pub database_url: String,

    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Appointments imported by the `seed` binary
    pub seed_file: PathBuf,
}

impl ApiConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `API_PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        // Logging settings
        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(30);

        let seed_file = lookup("SEED_FILE")
            .unwrap_or_else(|| DEFAULT_SEED_FILE.to_string())
            .into();

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            seed_file,
        })
    }

    /// Returns the server address as a string, e.g. "0.0.0.0:8080"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
