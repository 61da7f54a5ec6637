//! TaskFlow server: multi-tenant task tracking.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use taskflow_api::AppState;
use taskflow_core::config::{AppConfig, LogFormat, MIN_SECRET_BYTES};
use taskflow_core::error::AppError;
use taskflow_database::{DatabasePool, MemoryStore, Stores};

#[tokio::main]
async fn main() {
    let env = std::env::var("TASKFLOW_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(%env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TaskFlow v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.jwt_secret.len() < MIN_SECRET_BYTES {
        tracing::warn!("Weak JWT secret accepted for the in-memory store only");
    }

    let (stores, database) = if config.database.is_in_memory() {
        tracing::warn!("Using the in-memory store; data is lost on shutdown");
        (Stores::memory(MemoryStore::new()), None)
    } else {
        let database = DatabasePool::connect(&config.database).await?;
        if config.database.run_migrations {
            taskflow_database::migration::run_migrations(database.pool()).await?;
        }
        (database.stores(), Some(database))
    };

    let state = AppState::new(config, stores, database.clone());
    let result = taskflow_api::serve(state).await;

    if let Some(database) = database {
        database.close().await;
    }

    tracing::info!("TaskFlow server stopped");
    result
}
