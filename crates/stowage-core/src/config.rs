//! Configuration module
//!
//! Settings are read once at startup (environment plus an optional `.env` file)
//! and handed to the storage backend and HTTP layer explicitly.

use std::env;
use std::path::PathBuf;

use crate::storage_types::StorageBackend;

const SERVER_PORT: u16 = 4000;
const STORAGE_ROOT: &str = "./static";
const STATIC_URL_PREFIX: &str = "/static";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub storage_backend: StorageBackend,
    /// Directory holding the destination tree (`<root>/files/...`)
    pub storage_root: PathBuf,
    /// Public path under which the storage root is served (e.g. `/static`)
    pub static_url_prefix: String,
    /// Prefix prepended verbatim to generated file URLs (`PATH_DOWNLOAD`)
    pub download_base_url: String,
    /// `json` for JSON log lines, anything else for human-readable output
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: SERVER_PORT,
            environment: "development".to_string(),
            cors_origins: vec!["*".to_string()],
            storage_backend: StorageBackend::Local,
            storage_root: PathBuf::from(STORAGE_ROOT),
            static_url_prefix: STATIC_URL_PREFIX.to_string(),
            download_base_url: String::new(),
            log_format: "pretty".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::Local,
        };

        let config = Config {
            server_port: lookup("PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            storage_backend,
            storage_root: lookup("STORAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(STORAGE_ROOT)),
            static_url_prefix: lookup("STATIC_URL_PREFIX")
                .unwrap_or_else(|| STATIC_URL_PREFIX.to_string()),
            download_base_url: lookup("PATH_DOWNLOAD").unwrap_or_default(),
            log_format: lookup("LOG_FORMAT")
                .unwrap_or_else(|| "pretty".to_string())
                .to_lowercase(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.storage_root.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("STORAGE_ROOT must not be empty"));
        }

        if !self.static_url_prefix.starts_with('/') {
            return Err(anyhow::anyhow!(
                "STATIC_URL_PREFIX must start with '/' (got {:?})",
                self.static_url_prefix
            ));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production; list explicit origins"
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}
