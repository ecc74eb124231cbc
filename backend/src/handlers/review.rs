//! Review handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::services::ReviewService;
use crate::AppState;
use shared::models::{CreateReviewInput, Review};

/// Reviews of an active business (public)
pub async fn list_business_reviews(
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<Vec<Review>>, AppError> {
    let service = ReviewService::new(state.db.clone());
    let reviews = service.list_for_business(business_id).await?;

    Ok(Json(reviews))
}

/// Leave a review on an active business
pub async fn create_review(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateReviewInput>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let service = ReviewService::new(state.db.clone());
    let review = service.create(user.user_id, body).await?;

    Ok((StatusCode::CREATED, Json(review)))
}
