//! Category route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use course_shop_core::{Category, CategoryId};

use super::path_id;
use crate::error::Result;
use crate::state::AppState;

/// List every category.
///
/// # Errors
///
/// Returns a 500 if the store fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    Ok(Json(state.categories().find_all().await?))
}

/// Show one category.
///
/// # Errors
///
/// Returns a 400 for a non-numeric id, a 404 if the category does not
/// exist, and a 500 if the store fails.
pub async fn show(
    State(state): State<AppState>,
    id: std::result::Result<Path<CategoryId>, PathRejection>,
) -> Result<Json<Category>> {
    let id = path_id(id)?;
    Ok(Json(state.categories().find_by_id(id).await?))
}
