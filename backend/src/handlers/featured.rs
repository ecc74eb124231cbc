//! Public featured-carousel handler

use axum::{extract::State, Json};

use crate::error::AppError;
use crate::middleware::OptionalViewer;
use crate::services::{BusinessService, FeaturedService};
use crate::AppState;
use shared::models::BusinessView;

/// Featured businesses in curated order, redacted for the viewer.
///
/// Entries whose business is no longer active drop out silently.
pub async fn list_featured(
    State(state): State<AppState>,
    OptionalViewer(viewer_id): OptionalViewer,
) -> Result<Json<Vec<BusinessView>>, AppError> {
    let featured = FeaturedService::new(state.db.clone());
    let ids = featured.active_business_ids().await?;

    let businesses = BusinessService::new(state.db.clone())
        .list_active_by_ids(&ids, viewer_id)
        .await?;

    Ok(Json(businesses))
}
