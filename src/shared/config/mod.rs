//! Application configuration module
//!
//! Provides [`AppConfig`], built either programmatically through
//! [`AppConfig::builder`] or from the process environment through
//! [`AppConfig::from_env`].
//!
//! # Sources
//!
//! Values are resolved in this order, later sources winning:
//!
//! 1. Built-in defaults
//! 2. A TOML file named by `POKEDEX_CONFIG` (optional)
//! 3. Environment variables
//!
//! | Field | Environment variable |
//! |---|---|
//! | `database_url` | `DATABASE_URL` |
//! | `jwt_secret` | `JWT_SECRET` |
//! | `token_ttl_minutes` | `ACCESS_TOKEN_EXPIRE_MINUTES` |
//! | `host` | `SERVER_HOST` |
//! | `port` | `SERVER_PORT` |
//! | `max_connections` | `DATABASE_MAX_CONNECTIONS` |

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://pokedex.db";

/// Default access token lifetime in minutes
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default size of the SQLite connection pool
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Signing secret used when none is configured. Only fit for local development.
pub const DEVELOPMENT_JWT_SECRET: &str = "pokedex-development-secret-change-me";

/// Environment variable naming an optional TOML config file
pub const CONFIG_FILE_ENV: &str = "POKEDEX_CONFIG";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// sqlx connection URL for the SQLite file
    pub database_url: String,
    /// HMAC secret used to sign access tokens
    pub jwt_secret: String,
    /// Access token lifetime in minutes
    pub token_ttl_minutes: i64,
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Maximum pooled SQLite connections
    pub max_connections: u32,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the optional TOML file and the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = match lookup(CONFIG_FILE_ENV) {
            Some(path) => FileConfig::load(PathBuf::from(path))?.into_builder(),
            None => AppConfigBuilder::default(),
        };

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(raw) = lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            builder = builder.token_ttl_minutes(parse_value("ACCESS_TOKEN_EXPIRE_MINUTES", &raw)?);
        }
        if let Some(host) = lookup("SERVER_HOST") {
            builder = builder.host(host);
        }
        if let Some(raw) = lookup("SERVER_PORT") {
            builder = builder.port(parse_value("SERVER_PORT", &raw)?);
        }
        if let Some(raw) = lookup("DATABASE_MAX_CONNECTIONS") {
            builder = builder.max_connections(parse_value("DATABASE_MAX_CONNECTIONS", &raw)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("database_url"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if self.token_ttl_minutes <= 0 {
            return Err(ConfigError::Invalid(format!(
                "token_ttl_minutes must be positive, got {}",
                self.token_ttl_minutes
            )));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Access token lifetime
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.token_ttl_minutes)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_minutes: Option<i64>,
    host: Option<String>,
    port: Option<u16>,
    max_connections: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime in minutes
    pub fn token_ttl_minutes(mut self, minutes: i64) -> Self {
        self.token_ttl_minutes = Some(minutes);
        self
    }

    /// Set the listen host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the pool size
    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    /// Build the configuration, filling defaults and validating the result
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let jwt_secret = self.jwt_secret.unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set, using the development signing secret");
            DEVELOPMENT_JWT_SECRET.to_string()
        });

        let config = AppConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            token_ttl_minutes: self.token_ttl_minutes.unwrap_or(DEFAULT_TOKEN_TTL_MINUTES),
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            max_connections: self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
        };
        config.validate()?;
        Ok(config)
    }
}

/// On-disk shape of the optional TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_minutes: Option<i64>,
    host: Option<String>,
    port: Option<u16>,
    max_connections: Option<u32>,
}

impl FileConfig {
    fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    fn into_builder(self) -> AppConfigBuilder {
        AppConfigBuilder {
            database_url: self.database_url,
            jwt_secret: self.jwt_secret,
            token_ttl_minutes: self.token_ttl_minutes,
            host: self.host,
            port: self.port,
            max_connections: self.max_connections,
        }
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.token_ttl_minutes, 30);
        assert_eq!(config.port, 8000);
        assert_eq!(config.jwt_secret, DEVELOPMENT_JWT_SECRET);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_env_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://other.db"),
            ("JWT_SECRET", "s3cret"),
            ("ACCESS_TOKEN_EXPIRE_MINUTES", "5"),
            ("SERVER_PORT", "9090"),
            ("SERVER_HOST", "127.0.0.1"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.token_ttl(), chrono::Duration::minutes(5));
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_ne!(config.jwt_secret, DEVELOPMENT_JWT_SECRET);
    }

    #[test]
    fn test_unparseable_port_is_an_error() {
        let result = AppConfig::from_lookup(lookup(&[("SERVER_PORT", "eighty")]));
        assert_matches!(result, Err(ConfigError::InvalidValue { key: "SERVER_PORT", .. }));
    }

    #[test]
    fn test_non_positive_ttl_is_rejected() {
        let result = AppConfig::builder().token_ttl_minutes(0).build();
        assert_matches!(result, Err(ConfigError::Invalid(_)));
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let result = AppConfig::builder().jwt_secret("").build();
        assert_matches!(result, Err(ConfigError::MissingValue("jwt_secret")));
    }

    #[test]
    fn test_zero_connections_is_rejected() {
        let result = AppConfig::builder().max_connections(0).build();
        assert_matches!(result, Err(ConfigError::Invalid(_)));
    }

    #[test]
    #[serial]
    fn test_file_then_env_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "token_ttl_minutes = 45\nport = 7000"
        )
        .unwrap();

        std::env::set_var(CONFIG_FILE_ENV, file.path());
        std::env::set_var("SERVER_PORT", "7001");
        let config = AppConfig::from_env();
        std::env::remove_var(CONFIG_FILE_ENV);
        std::env::remove_var("SERVER_PORT");

        let config = config.unwrap();
        assert_eq!(config.token_ttl_minutes, 45);
        assert_eq!(config.port, 7001);
    }

    #[test]
    fn test_unknown_file_key_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour = \"blue\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let result = AppConfig::from_lookup(lookup(&[(CONFIG_FILE_ENV, path.as_str())]));
        assert_matches!(result, Err(ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = AppConfig::from_lookup(lookup(&[(CONFIG_FILE_ENV, "/nonexistent/pokedex.toml")]));
        assert_matches!(result, Err(ConfigError::Io { .. }));
    }
}
