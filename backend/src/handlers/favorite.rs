//! Favorite handlers
//!
//! Favorites resolve through the business service so the response carries
//! the same redaction as any other listing.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::services::{BusinessService, FavoriteService};
use crate::AppState;
use shared::models::BusinessView;

/// List the caller's favorite businesses, newest-favorited first
pub async fn list_favorites(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<BusinessView>>, AppError> {
    let favorites = FavoriteService::new(state.db.clone());
    let ids = favorites.business_ids_for_user(user.user_id).await?;

    let businesses = BusinessService::new(state.db.clone())
        .list_active_by_ids(&ids, Some(user.user_id))
        .await?;

    Ok(Json(businesses))
}

/// Add a business to the caller's favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(business_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let service = FavoriteService::new(state.db.clone());
    service.add(user.user_id, business_id).await?;

    Ok(StatusCode::CREATED)
}

/// Remove a business from the caller's favorites
pub async fn remove_favorite(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(business_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let service = FavoriteService::new(state.db.clone());
    service.remove(user.user_id, business_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
