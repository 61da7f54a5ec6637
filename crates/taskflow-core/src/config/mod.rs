//! Configuration for the TaskFlow server.
//!
//! Sources are layered with the `config` crate, later ones winning:
//! `config/default.toml`, `config/{env}.toml`, then `TASKFLOW__*`
//! environment variables (e.g. `TASKFLOW__AUTH__JWT_SECRET`).

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{
    AuthConfig, MAX_ACCESS_TTL_MINUTES, MAX_REFRESH_TTL_DAYS, MIN_SECRET_BYTES, PLACEHOLDER_SECRETS,
};
pub use self::database::{DatabaseConfig, MEMORY_URL};
pub use self::logging::{LogFormat, LoggingConfig};

use crate::error::AppError;

/// Root configuration. Only `database.url` has no default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load and check the layered configuration for environment `env`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config: Self = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix("TASKFLOW")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.check()?;
        Ok(config)
    }

    /// Reject values the server cannot run with.
    ///
    /// Placeholder and short signing secrets are tolerated only on the
    /// in-memory store, which never outlives the process.
    pub fn check(&self) -> Result<(), AppError> {
        let secret = self.auth.jwt_secret.trim();
        if secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        if !self.database.is_in_memory() {
            if PLACEHOLDER_SECRETS.contains(&secret) {
                return Err(AppError::configuration(
                    "auth.jwt_secret is a published placeholder; set TASKFLOW__AUTH__JWT_SECRET",
                ));
            }
            if secret.len() < MIN_SECRET_BYTES {
                return Err(AppError::configuration(format!(
                    "auth.jwt_secret must be at least {MIN_SECRET_BYTES} bytes"
                )));
            }
        }
        if !(1..=MAX_ACCESS_TTL_MINUTES).contains(&self.auth.jwt_access_ttl_minutes) {
            return Err(AppError::configuration(format!(
                "auth.jwt_access_ttl_minutes must be between 1 and {MAX_ACCESS_TTL_MINUTES}"
            )));
        }
        if !(1..=MAX_REFRESH_TTL_DAYS).contains(&self.auth.refresh_ttl_days) {
            return Err(AppError::configuration(format!(
                "auth.refresh_ttl_days must be between 1 and {MAX_REFRESH_TTL_DAYS}"
            )));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::configuration(
                "database.min_connections exceeds max_connections",
            ));
        }
        Ok(())
    }
}
