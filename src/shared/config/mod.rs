//! Application configuration module
//!
//! `AppConfig` is built once at startup and shared read-only by the token
//! service, the store loader and the GitHub proxy.
//!
//! # Sources
//!
//! Later sources override earlier ones:
//!
//! 1. Built-in defaults
//! 2. `.env` file (loaded into the process environment with `dotenv`)
//! 3. TOML file at `$DEVCONNECT_CONFIG`, default `config/default.toml`
//! 4. Environment variables
//!
//! There is no default signing secret: `JWT_SECRET` (or `jwt_secret` in the
//! file) must be set.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default token lifetime in seconds
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 360_000;
/// Largest accepted token lifetime; `exp` must stay a valid timestamp
pub const MAX_TOKEN_TTL_SECS: u64 = i64::MAX as u64;
/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;
/// Default upstream for the repository proxy
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
/// Default listening port
pub const DEFAULT_SERVER_PORT: u16 = 5000;
/// Config file used when `DEVCONNECT_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HS256 signing secret for auth tokens
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: u64,
    /// bcrypt cost used when hashing new passwords
    pub bcrypt_cost: u32,
    /// PostgreSQL URL; the in-memory store is used when absent
    pub database_url: Option<String>,
    pub github_client_id: Option<String>,
    pub github_client_secret: Option<String>,
    /// Base URL of the GitHub REST API
    pub github_api_url: String,
    pub server_port: u16,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from `.env`, the config file and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed, a
    /// value has the wrong type, or the signing secret is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let path = std::env::var("DEVCONNECT_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        Self::load(Some(&path))
    }

    /// Load from an optional TOML file, then overlay environment variables
    ///
    /// A missing file is skipped; an unreadable or invalid one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();

        if let Some(path) = path.filter(|p| p.exists()) {
            tracing::debug!("Loading configuration from {}", path.display());
            builder = builder.merge_file(FileConfig::read(path)?);
        }

        builder.merge_env()?.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: self.token_ttl_secs.to_string(),
            });
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if !self.github_api_url.starts_with("http://") && !self.github_api_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidUrl(self.github_api_url.clone()));
        }
        Ok(())
    }
}

/// Shape of the TOML config file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    jwt_secret: Option<String>,
    token_ttl_secs: Option<u64>,
    bcrypt_cost: Option<u32>,
    database_url: Option<String>,
    github_client_id: Option<String>,
    github_client_secret: Option<String>,
    github_api_url: Option<String>,
    server_port: Option<u16>,
}

impl FileConfig {
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    token_ttl_secs: Option<u64>,
    bcrypt_cost: Option<u32>,
    database_url: Option<String>,
    github_client_id: Option<String>,
    github_client_secret: Option<String>,
    github_api_url: Option<String>,
    server_port: Option<u16>,
}

impl AppConfigBuilder {
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_secs(mut self, secs: u64) -> Self {
        self.token_ttl_secs = Some(secs);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn github_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.github_client_id = Some(client_id.into());
        self.github_client_secret = Some(client_secret.into());
        self
    }

    pub fn github_api_url(mut self, url: impl Into<String>) -> Self {
        self.github_api_url = Some(url.into());
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    fn merge_file(mut self, file: FileConfig) -> Self {
        self.jwt_secret = file.jwt_secret.or(self.jwt_secret);
        self.token_ttl_secs = file.token_ttl_secs.or(self.token_ttl_secs);
        self.bcrypt_cost = file.bcrypt_cost.or(self.bcrypt_cost);
        self.database_url = file.database_url.or(self.database_url);
        self.github_client_id = file.github_client_id.or(self.github_client_id);
        self.github_client_secret = file.github_client_secret.or(self.github_client_secret);
        self.github_api_url = file.github_api_url.or(self.github_api_url);
        self.server_port = file.server_port.or(self.server_port);
        self
    }

    fn merge_env(mut self) -> Result<Self, ConfigError> {
        if let Some(v) = env_string("JWT_SECRET") {
            self.jwt_secret = Some(v);
        }
        if let Some(v) = env_parsed("TOKEN_TTL_SECS")? {
            self.token_ttl_secs = Some(v);
        }
        if let Some(v) = env_parsed("BCRYPT_COST")? {
            self.bcrypt_cost = Some(v);
        }
        if let Some(v) = env_string("DATABASE_URL") {
            self.database_url = Some(v);
        }
        if let Some(v) = env_string("GITHUB_CLIENT_ID") {
            self.github_client_id = Some(v);
        }
        if let Some(v) = env_string("GITHUB_CLIENT_SECRET") {
            self.github_client_secret = Some(v);
        }
        if let Some(v) = env_string("GITHUB_API_URL") {
            self.github_api_url = Some(v);
        }
        if let Some(v) = env_parsed("SERVER_PORT")? {
            self.server_port = Some(v);
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl_secs: self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            database_url: self.database_url,
            github_client_id: self.github_client_id,
            github_client_secret: self.github_client_secret,
            github_api_url: self
                .github_api_url
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            server_port: self.server_port.unwrap_or(DEFAULT_SERVER_PORT),
        };
        config.validate()?;
        Ok(config)
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parsed<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env_string(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_builder_defaults() {
        let config = AppConfig::builder().jwt_secret("s3cret").build().unwrap();
        assert_eq!(config.token_ttl_secs, DEFAULT_TOKEN_TTL_SECS);
        assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST);
        assert_eq!(config.github_api_url, DEFAULT_GITHUB_API_URL);
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_secret_is_required() {
        assert_matches!(
            AppConfig::builder().build(),
            Err(ConfigError::MissingValue("JWT_SECRET"))
        );
        assert_matches!(
            AppConfig::builder().jwt_secret("  ").build(),
            Err(ConfigError::MissingValue("JWT_SECRET"))
        );
    }

    #[test]
    fn test_token_ttl_bounds() {
        assert_matches!(
            AppConfig::builder().jwt_secret("x").token_ttl_secs(u64::MAX).build(),
            Err(ConfigError::InvalidValue { key: "TOKEN_TTL_SECS", .. })
        );
        assert!(AppConfig::builder()
            .jwt_secret("x")
            .token_ttl_secs(MAX_TOKEN_TTL_SECS)
            .build()
            .is_ok());
    }

    #[test]
    fn test_bcrypt_cost_bounds() {
        assert_matches!(
            AppConfig::builder().jwt_secret("x").bcrypt_cost(2).build(),
            Err(ConfigError::InvalidValue { key: "BCRYPT_COST", .. })
        );
    }

    #[test]
    fn test_github_url_must_be_http() {
        assert_matches!(
            AppConfig::builder()
                .jwt_secret("x")
                .github_api_url("ftp://github")
                .build(),
            Err(ConfigError::InvalidUrl(_))
        );
    }

    #[test]
    fn test_file_values_override_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            jwt_secret = "from-file"
            token_ttl_secs = 60
            server_port = 8080
            "#,
        )
        .unwrap();
        let config = AppConfig::builder().merge_file(file).build().unwrap();
        assert_eq!(config.jwt_secret, "from-file");
        assert_eq!(config.token_ttl_secs, 60);
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_unknown_file_key_rejected() {
        let parsed: Result<FileConfig, _> = toml::from_str("jwt_secrte = \"typo\"");
        assert!(parsed.is_err());
    }
}
