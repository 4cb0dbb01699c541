//! CLI subcommands.

pub mod migrate;
pub mod seed;

use course_shop_api::config::{ApiConfig, ConfigError};
use course_shop_api::db;
use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The built-in demo data set is inconsistent.
    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}

/// Connect to the shop database named by the environment.
async fn connect() -> Result<PgPool, CommandError> {
    let config = ApiConfig::from_env()?;

    tracing::info!("Connecting to shop database...");
    Ok(db::create_pool(&config.database_url).await?)
}
