//! Database migration command.
//!
//! Migrations live in `crates/api/migrations/` and are embedded into the
//! binary at compile time.

use super::{CommandError, connect};

/// Apply all pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running shop migrations...");
    sqlx::migrate!("../api/migrations").run(&pool).await?;

    tracing::info!("Shop migrations complete!");
    Ok(())
}
