//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! The server builds one [`Config`] at startup and hands it to everything that
//! needs it (application state, the token service). Request-time code never
//! reads the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | `sqlite:data/ledger.db` |
//! | `JWT_SECRET` | required, at least 32 characters |
//! | `JWT_EXPIRATION_HOURS` | `24` (1 to 720) |
//! | `HOST` / `PORT` | `127.0.0.1` / `8080` |
//! | `ENVIRONMENT` | `development` |
//! | `CORS_ALLOWED_ORIGINS` | `http://localhost:3000` (comma-separated) |
//! | `LOG_LEVEL` | `info` |

use lib_utils::{get_env, get_env_or, get_env_parse_or};

const MIN_SECRET_LEN: usize = 32;
const MAX_EXPIRATION_HOURS: i64 = 720;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for JWT token signing and verification
    ///
    /// **Must be at least 32 characters long** for security.
    pub jwt_secret: String,

    /// JWT token validity period in hours
    ///
    /// Valid range: 1-720 hours (1 hour to 30 days)
    pub jwt_expiration_hours: i64,

    pub host: String,
    pub port: u16,

    /// Deployment label (development, staging, production, ...)
    pub environment: String,

    pub cors_allowed_origins: Vec<String>,

    /// Default tracing level when `RUST_LOG` is not set
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = get_env("JWT_SECRET").map_err(|e| e.to_string())?;

        let jwt_expiration_hours =
            get_env_parse_or("JWT_EXPIRATION_HOURS", 24).map_err(|e| e.to_string())?;

        let port = get_env_parse_or("PORT", 8080).map_err(|e| e.to_string())?;

        let cors_allowed_origins = get_env_or("CORS_ALLOWED_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            database_url: get_env_or("DATABASE_URL", "sqlite:data/ledger.db"),
            jwt_secret,
            jwt_expiration_hours,
            host: get_env_or("HOST", "127.0.0.1"),
            port,
            environment: get_env_or("ENVIRONMENT", "development"),
            cors_allowed_origins,
            log_level: get_env_or("LOG_LEVEL", "info").to_lowercase(),
        })
    }

    /// Validate configuration values against security and business rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.chars().count() < MIN_SECRET_LEN {
            return Err(format!(
                "JWT_SECRET must be at least {MIN_SECRET_LEN} characters long"
            ));
        }

        if self.jwt_expiration_hours < 1 || self.jwt_expiration_hours > MAX_EXPIRATION_HOURS {
            return Err(format!(
                "JWT_EXPIRATION_HOURS must be between 1 and {MAX_EXPIRATION_HOURS} (30 days)"
            ));
        }

        if self.database_url.trim().is_empty() {
            return Err("DATABASE_URL cannot be empty".to_string());
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(format!(
                "LOG_LEVEL must be one of: {}",
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }

    /// Load and validate in one step.
    pub fn load() -> Result<Self, String> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// `host:port` address the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("log_level", &self.log_level)
            .finish()
    }
}
