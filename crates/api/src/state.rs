//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{CategoryRepository, OrderRepository};
use crate::services::{CategoryService, OrderService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and holds nothing mutable:
/// one service per HTTP resource and the pool for health checks.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    categories: CategoryService,
    orders: OrderService,
}

impl AppState {
    /// Create the application state, wiring `PostgreSQL` repositories into
    /// their services.
    ///
    /// # Arguments
    ///
    /// * `pool` - `PostgreSQL` connection pool
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let categories = CategoryService::new(CategoryRepository::new(pool.clone()));
        let orders = OrderService::new(OrderRepository::new(pool.clone()));
        Self::with_services(pool, categories, orders)
    }

    /// Create the application state from already built services.
    #[must_use]
    pub fn with_services(pool: PgPool, categories: CategoryService, orders: OrderService) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pool,
                categories,
                orders,
            }),
        }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the category service.
    #[must_use]
    pub fn categories(&self) -> &CategoryService {
        &self.inner.categories
    }

    /// Get a reference to the order service.
    #[must_use]
    pub fn orders(&self) -> &OrderService {
        &self.inner.orders
    }
}
