//! Database access for the shop `PostgreSQL` store.
//!
//! # Tables
//!
//! - `users` - Clients who place orders
//! - `categories` - Product categories
//! - `products` / `product_categories` - Catalogue referenced by order items
//! - `orders` - Orders, one client each
//! - `order_items` - Order lines, one product each
//!
//! Every table gets a repository implementing the generic [`Repository`]
//! contract. Only reads are exposed; rows are written by `shop-cli seed`
//! or by other systems sharing the database.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p course-shop-cli -- migrate
//! ```

pub mod categories;
#[cfg(test)]
pub mod memory;
pub mod order_items;
pub mod orders;
pub mod repository;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use categories::CategoryRepository;
#[cfg(test)]
pub use memory::MemoryRepository;
pub use order_items::OrderItemRepository;
pub use orders::OrderRepository;
pub use repository::Repository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
