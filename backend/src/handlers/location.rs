//! Public location handlers

use axum::{extract::State, Json};

use crate::error::AppError;
use crate::services::LocationService;
use crate::AppState;
use shared::models::Location;

/// List all bazaar locations
pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Location>>, AppError> {
    let service = LocationService::new(state.db.clone());
    let locations = service.list().await?;

    Ok(Json(locations))
}
