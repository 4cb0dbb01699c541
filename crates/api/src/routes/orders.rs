//! Order route handlers.
//!
//! Orders are returned with their client and items embedded.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use course_shop_core::{Order, OrderId};

use super::path_id;
use crate::error::Result;
use crate::state::AppState;

/// List every order.
///
/// # Errors
///
/// Returns a 500 if the store fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.orders().find_all().await?))
}

/// Show one order.
///
/// # Errors
///
/// Returns a 400 for a non-numeric id, a 404 if the order does not exist,
/// and a 500 if the store fails.
pub async fn show(
    State(state): State<AppState>,
    id: std::result::Result<Path<OrderId>, PathRejection>,
) -> Result<Json<Order>> {
    let id = path_id(id)?;
    Ok(Json(state.orders().find_by_id(id).await?))
}
