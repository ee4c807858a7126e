//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.
//! The sandbox and content API settings are injected into their clients at
//! construction; nothing reads the environment at call time.

use std::env;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    CONTENT_API_TIMEOUT_SECS, DEFAULT_CONTENT_API_URL, DEFAULT_DATABASE_MAX_CONNECTIONS,
    DEFAULT_EXECUTION_DEADLINE_SECS, DEFAULT_JUDGE0_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub judge0: Judge0Config,
    pub content: ContentConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Judge0 sandbox configuration
#[derive(Debug, Clone)]
pub struct Judge0Config {
    /// Base URL of the Judge0 instance
    pub base_url: String,
    /// API key sent as `X-RapidAPI-Key`; empty means no auth header
    pub api_key: String,
    /// Wall-clock deadline for a single execution
    pub execution_deadline: Duration,
}

/// Content API configuration (exercises and test cases, read-only)
#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            judge0: Judge0Config::from_env()?,
            content: ContentConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl Judge0Config {
    fn from_env() -> Result<Self, ConfigError> {
        let deadline_secs: u64 = env::var("JUDGE0_EXECUTION_DEADLINE_SECS")
            .unwrap_or_else(|_| DEFAULT_EXECUTION_DEADLINE_SECS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("JUDGE0_EXECUTION_DEADLINE_SECS".to_string()))?;

        Ok(Self {
            base_url: env::var("JUDGE0_API_URL").unwrap_or_else(|_| DEFAULT_JUDGE0_URL.to_string()),
            api_key: env::var("JUDGE0_API_KEY").unwrap_or_default(),
            execution_deadline: Duration::from_secs(deadline_secs),
        })
    }
}

impl ContentConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::var("CONTENT_API_URL")
                .unwrap_or_else(|_| DEFAULT_CONTENT_API_URL.to_string()),
            timeout: Duration::from_secs(CONTENT_API_TIMEOUT_SECS),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_judge0_deadline_default() {
        assert_eq!(
            Duration::from_secs(DEFAULT_EXECUTION_DEADLINE_SECS),
            Duration::from_secs(30)
        );
    }
}
