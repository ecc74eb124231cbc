//! Public category handlers

use axum::{extract::State, Json};

use crate::error::AppError;
use crate::services::CategoryService;
use crate::AppState;
use shared::models::Category;

/// List all categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let service = CategoryService::new(state.db.clone());
    let categories = service.list().await?;

    Ok(Json(categories))
}
