//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings the database)
//!
//! # Categories
//! GET  /Categories             - All categories (JSON array)
//! GET  /Categories/{id}        - One category (JSON object, 404 if absent)
//!
//! # Orders
//! GET  /Orders                 - All orders (JSON array)
//! GET  /Orders/{id}            - One order (JSON object, 404 if absent)
//! ```

pub mod categories;
pub mod health;
pub mod orders;

use axum::{
    Router,
    extract::{Path, Request, rejection::PathRejection},
    middleware::from_fn,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::error::{AppError, Result};
use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/Categories", get(categories::index))
        .route("/Categories/{id}", get(categories::show))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/Orders", get(orders::index))
        .route("/Orders/{id}", get(orders::show))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(category_routes())
        .merge(order_routes())
}

/// Build the full application: routes, state, request id and tracing layers.
pub fn app(state: AppState) -> Router {
    routes()
        .with_state(state)
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
}

/// Unwrap an id path parameter, turning a malformed id into a 400.
pub(crate) fn path_id<T>(path: std::result::Result<Path<T>, PathRejection>) -> Result<T> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
