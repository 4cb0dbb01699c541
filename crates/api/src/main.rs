//! Course Shop API - read-only category and order endpoints.
//!
//! This binary serves the HTTP API on `SHOP_HOST:SHOP_PORT` (default
//! 127.0.0.1:8080).
//!
//! # Architecture
//!
//! - Axum web framework, JSON responses only
//! - `PostgreSQL` via sqlx, one repository per table
//! - Sentry error tracking when `SENTRY_DSN` is set
//!
//! Migrations are NOT run on startup. Run them explicitly via:
//! `cargo run -p course-shop-cli -- migrate`

#![cfg_attr(not(test), forbid(unsafe_code))]

use course_shop_api::config::ApiConfig;
use course_shop_api::state::AppState;
use course_shop_api::{db, routes, telemetry};

#[tokio::main]
async fn main() {
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = telemetry::init_sentry(&config.sentry);
    telemetry::init_tracing(config.log_json);

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    let state = AppState::new(pool);

    let app = routes::app(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    tracing::info!("course-shop-api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
