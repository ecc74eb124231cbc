//! Profile handlers for the caller's own account

use axum::{extract::State, Json};

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::services::ProfileService;
use crate::AppState;
use shared::models::{Profile, UpdateProfileInput};

/// Fetch the caller's profile
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Profile>, AppError> {
    let service = ProfileService::new(state.db.clone());
    let profile = service.get_profile(user.user_id).await?;

    Ok(Json(profile))
}

/// Update the caller's profile
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<UpdateProfileInput>,
) -> Result<Json<Profile>, AppError> {
    let service = ProfileService::new(state.db.clone());
    let profile = service.update_profile(user.user_id, body).await?;

    Ok(Json(profile))
}
