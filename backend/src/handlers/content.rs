//! Public content handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppError;
use crate::services::ContentService;
use crate::AppState;
use shared::models::{PageContent, SiteSetting};

/// Fetch a published content page by slug
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageContent>, AppError> {
    let service = ContentService::new(state.db.clone());
    let page = service.get_page(&slug).await?;

    Ok(Json(page))
}

/// List all site settings
pub async fn list_settings(
    State(state): State<AppState>,
) -> Result<Json<Vec<SiteSetting>>, AppError> {
    let service = ContentService::new(state.db.clone());
    let settings = service.list_settings().await?;

    Ok(Json(settings))
}
