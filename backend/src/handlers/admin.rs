//! Admin panel handlers
//!
//! Every handler here re-checks the admin role against the store before
//! doing anything; the JWT alone never grants admin access. Mutations that
//! touch moderation or roles land in the security audit log.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::services::admin::{AdminUserView, AuditEntry, DirectoryStats};
use crate::services::featured::{AddFeaturedInput, FeaturedEntry, UpdateFeaturedInput};
use crate::services::{
    AccessService, AdminService, BusinessService, CategoryService, ContentService,
    FeaturedService, LocationService, ReviewService,
};
use crate::AppState;
use shared::models::{
    AppRole, BusinessStatus, BusinessView, Category, CategoryInput, FeaturedBusiness, Location,
    LocationInput, MoveDirection, PageContent, PageContentInput, Review, SiteSetting,
};
use shared::types::{PaginatedResponse, Pagination};

async fn require_admin(state: &AppState, user_id: Uuid) -> Result<(), AppError> {
    AccessService::new(state.db.clone())
        .require_admin(user_id)
        .await
}

// === Dashboard ===

/// Dashboard counters
pub async fn get_stats(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<DirectoryStats>, AppError> {
    require_admin(&state, user.user_id).await?;

    let stats = AdminService::new(state.db.clone()).stats().await?;
    Ok(Json(stats))
}

// === Business moderation ===

#[derive(Deserialize)]
pub struct AdminBusinessQuery {
    pub status: Option<BusinessStatus>,
}

#[derive(Deserialize)]
pub struct SetStatusRequest {
    pub status: BusinessStatus,
}

/// List businesses of any status, unredacted
pub async fn admin_list_businesses(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<AdminBusinessQuery>,
) -> Result<Json<Vec<BusinessView>>, AppError> {
    require_admin(&state, user.user_id).await?;

    let businesses = BusinessService::new(state.db.clone())
        .admin_list(query.status)
        .await?;
    Ok(Json(businesses))
}

/// Approve, reject, or retire a business listing
pub async fn set_business_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(business_id): Path<Uuid>,
    Json(body): Json<SetStatusRequest>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, user.user_id).await?;

    let previous = BusinessService::new(state.db.clone())
        .set_status(business_id, body.status)
        .await?;

    AdminService::new(state.db.clone())
        .record_audit(
            Some(user.user_id),
            "business_status_changed",
            Some(&business_id.to_string()),
            json!({ "from": previous.as_str(), "to": body.status.as_str() }),
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}

// === User management ===

#[derive(Deserialize)]
pub struct SetRoleRequest {
    pub role: AppRole,
}

/// List users with their resolved roles
pub async fn list_users(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResponse<AdminUserView>>, AppError> {
    require_admin(&state, user.user_id).await?;

    let users = AdminService::new(state.db.clone())
        .list_users(pagination)
        .await?;
    Ok(Json(users))
}

/// Assign a role to a user
pub async fn set_user_role(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<SetRoleRequest>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, user.user_id).await?;

    let admin_service = AdminService::new(state.db.clone());
    let previous = admin_service.set_role(user_id, body.role).await?;

    admin_service
        .record_audit(
            Some(user.user_id),
            "user_role_changed",
            Some(&user_id.to_string()),
            json!({ "from": previous.as_str(), "to": body.role.as_str() }),
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}

// === Taxonomies ===

/// Create a category
pub async fn create_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CategoryInput>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    require_admin(&state, user.user_id).await?;

    let category = CategoryService::new(state.db.clone()).create(body).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a category
pub async fn update_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<Uuid>,
    Json(body): Json<CategoryInput>,
) -> Result<Json<Category>, AppError> {
    require_admin(&state, user.user_id).await?;

    let category = CategoryService::new(state.db.clone())
        .update(category_id, body)
        .await?;
    Ok(Json(category))
}

/// Delete a category; fails while businesses still reference it
pub async fn delete_category(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(category_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, user.user_id).await?;

    CategoryService::new(state.db.clone())
        .delete(category_id)
        .await?;

    AdminService::new(state.db.clone())
        .record_audit(
            Some(user.user_id),
            "category_deleted",
            Some(&category_id.to_string()),
            json!({}),
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// Create a location
pub async fn create_location(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<LocationInput>,
) -> Result<(StatusCode, Json<Location>), AppError> {
    require_admin(&state, user.user_id).await?;

    let location = LocationService::new(state.db.clone()).create(body).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// Update a location
pub async fn update_location(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(location_id): Path<Uuid>,
    Json(body): Json<LocationInput>,
) -> Result<Json<Location>, AppError> {
    require_admin(&state, user.user_id).await?;

    let location = LocationService::new(state.db.clone())
        .update(location_id, body)
        .await?;
    Ok(Json(location))
}

/// Delete a location; fails while businesses still reference it
pub async fn delete_location(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(location_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, user.user_id).await?;

    LocationService::new(state.db.clone())
        .delete(location_id)
        .await?;

    AdminService::new(state.db.clone())
        .record_audit(
            Some(user.user_id),
            "location_deleted",
            Some(&location_id.to_string()),
            json!({}),
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}

// === Featured curation ===

#[derive(Deserialize)]
pub struct ReorderRequest {
    pub direction: MoveDirection,
}

/// List featured entries with business names
pub async fn admin_list_featured(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<FeaturedEntry>>, AppError> {
    require_admin(&state, user.user_id).await?;

    let entries = FeaturedService::new(state.db.clone()).admin_list().await?;
    Ok(Json(entries))
}

/// Add a business to the featured list
pub async fn add_featured(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<AddFeaturedInput>,
) -> Result<(StatusCode, Json<FeaturedBusiness>), AppError> {
    require_admin(&state, user.user_id).await?;

    let entry = FeaturedService::new(state.db.clone()).add(body).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Update a featured entry's active flag or expiry
pub async fn update_featured(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(featured_id): Path<Uuid>,
    Json(body): Json<UpdateFeaturedInput>,
) -> Result<Json<FeaturedBusiness>, AppError> {
    require_admin(&state, user.user_id).await?;

    let entry = FeaturedService::new(state.db.clone())
        .update(featured_id, body)
        .await?;
    Ok(Json(entry))
}

/// Move a featured entry up or down in the carousel order
pub async fn reorder_featured(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(featured_id): Path<Uuid>,
    Json(body): Json<ReorderRequest>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, user.user_id).await?;

    FeaturedService::new(state.db.clone())
        .reorder(featured_id, body.direction)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove a featured entry
pub async fn remove_featured(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(featured_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, user.user_id).await?;

    FeaturedService::new(state.db.clone())
        .remove(featured_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// === Review moderation ===

#[derive(Deserialize)]
pub struct AdminReviewQuery {
    pub rating: Option<i32>,
}

/// List all reviews, optionally restricted to one rating
pub async fn admin_list_reviews(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<AdminReviewQuery>,
) -> Result<Json<Vec<Review>>, AppError> {
    require_admin(&state, user.user_id).await?;

    let reviews = ReviewService::new(state.db.clone())
        .admin_list(query.rating)
        .await?;
    Ok(Json(reviews))
}

/// Delete a review
pub async fn delete_review(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(review_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, user.user_id).await?;

    ReviewService::new(state.db.clone()).delete(review_id).await?;

    AdminService::new(state.db.clone())
        .record_audit(
            Some(user.user_id),
            "review_deleted",
            Some(&review_id.to_string()),
            json!({}),
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}

// === Content management ===

/// List all pages, published or not
pub async fn admin_list_pages(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<PageContent>>, AppError> {
    require_admin(&state, user.user_id).await?;

    let pages = ContentService::new(state.db.clone()).list_pages().await?;
    Ok(Json(pages))
}

/// Create a content page
pub async fn create_page(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<PageContentInput>,
) -> Result<(StatusCode, Json<PageContent>), AppError> {
    require_admin(&state, user.user_id).await?;

    let page = ContentService::new(state.db.clone()).create_page(body).await?;
    Ok((StatusCode::CREATED, Json(page)))
}

/// Update a content page
pub async fn update_page(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(page_id): Path<Uuid>,
    Json(body): Json<PageContentInput>,
) -> Result<Json<PageContent>, AppError> {
    require_admin(&state, user.user_id).await?;

    let page = ContentService::new(state.db.clone())
        .update_page(page_id, body)
        .await?;
    Ok(Json(page))
}

/// Delete a content page
pub async fn delete_page(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(page_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    require_admin(&state, user.user_id).await?;

    ContentService::new(state.db.clone()).delete_page(page_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create or replace a site setting
pub async fn upsert_setting(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(key): Path<String>,
    Json(value): Json<serde_json::Value>,
) -> Result<Json<SiteSetting>, AppError> {
    require_admin(&state, user.user_id).await?;

    let setting = ContentService::new(state.db.clone())
        .upsert_setting(&key, value)
        .await?;

    AdminService::new(state.db.clone())
        .record_audit(
            Some(user.user_id),
            "setting_updated",
            Some(&setting.key),
            json!({}),
        )
        .await;

    Ok(Json(setting))
}

// === Audit log ===

/// Read the security audit log
pub async fn list_audit_log(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(pagination): Query<Pagination>,
) -> Result<Json<PaginatedResponse<AuditEntry>>, AppError> {
    require_admin(&state, user.user_id).await?;

    let entries = AdminService::new(state.db.clone())
        .list_audit(pagination)
        .await?;
    Ok(Json(entries))
}
