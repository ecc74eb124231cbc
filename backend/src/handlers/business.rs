//! Business listing and lifecycle handlers
//!
//! Public reads accept an optional bearer token: the viewer identity only
//! widens what the response contains, it never gates the route itself.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::{CurrentUser, OptionalViewer};
use crate::services::business::{BusinessFilters, CreateBusinessInput, UpdateBusinessInput};
use crate::services::BusinessService;
use crate::AppState;
use shared::models::BusinessView;

/// List active businesses, redacted for the viewer
pub async fn list_businesses(
    State(state): State<AppState>,
    OptionalViewer(viewer_id): OptionalViewer,
    Query(filters): Query<BusinessFilters>,
) -> Result<Json<Vec<BusinessView>>, AppError> {
    let service = BusinessService::new(state.db.clone());
    let businesses = service.list_active(filters, viewer_id).await?;

    Ok(Json(businesses))
}

/// Business detail endpoint handler
pub async fn get_business(
    State(state): State<AppState>,
    OptionalViewer(viewer_id): OptionalViewer,
    Path(business_id): Path<Uuid>,
) -> Result<Json<BusinessView>, AppError> {
    let service = BusinessService::new(state.db.clone());
    let business = service.get_detail(business_id, viewer_id).await?;

    Ok(Json(business))
}

/// Submit a new business listing (enters moderation as pending)
pub async fn submit_business(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateBusinessInput>,
) -> Result<(StatusCode, Json<BusinessView>), AppError> {
    let service = BusinessService::new(state.db.clone());
    let business = service.submit(user.user_id, body).await?;

    Ok((StatusCode::CREATED, Json(business)))
}

/// Update a business (owner or admin)
pub async fn update_business(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(business_id): Path<Uuid>,
    Json(body): Json<UpdateBusinessInput>,
) -> Result<Json<BusinessView>, AppError> {
    let service = BusinessService::new(state.db.clone());
    let business = service.update(business_id, user.user_id, body).await?;

    Ok(Json(business))
}
