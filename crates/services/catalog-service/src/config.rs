//! Catalog service configuration.

use std::env;

use chrono::Duration;
use thiserror::Error;

use domain::{DEFAULT_JWT_EXPIRES_IN_SECONDS, MIN_JWT_SECRET_LENGTH};

/// Default database URL (file-backed SQLite, created on first run)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://catalog.db?mode=rwc";

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Secret used by debug builds when `JWT_SECRET` is unset
const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JWT_SECRET environment variable must be set")]
    MissingJwtSecret,

    #[error("JWT_SECRET must be at least {} characters long", MIN_JWT_SECRET_LENGTH)]
    JwtSecretTooShort,

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Catalog service configuration.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Database connection URL
    pub database_url: String,
    /// Secret for signing tokens (min 32 characters)
    jwt_secret: String,
    /// Token lifetime in seconds
    pub jwt_expires_in: i64,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expires_in", &self.jwt_expires_in)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables (and `.env`).
    ///
    /// Release builds refuse to start without `JWT_SECRET`; debug builds fall
    /// back to a development secret and log a warning.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => return Err(ConfigError::MissingJwtSecret),
        };

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            jwt_expires_in: parse_var("JWT_EXPIRES_IN", DEFAULT_JWT_EXPIRES_IN_SECONDS)?,
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
        };
        config.validate()?;

        Ok(config)
    }

    /// Build a configuration directly (tests, embedding).
    pub fn new(
        database_url: impl Into<String>,
        jwt_secret: impl Into<String>,
        jwt_expires_in: i64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            database_url: database_url.into(),
            jwt_secret: jwt_secret.into(),
            jwt_expires_in,
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::JwtSecretTooShort);
        }
        if self.jwt_expires_in <= 0 {
            return Err(ConfigError::Invalid {
                name: "JWT_EXPIRES_IN",
                value: self.jwt_expires_in.to_string(),
            });
        }
        Ok(())
    }

    /// Get JWT secret as bytes.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Token lifetime as a duration.
    pub fn token_lifetime(&self) -> Duration {
        Duration::seconds(self.jwt_expires_in)
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
