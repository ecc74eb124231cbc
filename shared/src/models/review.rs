//! Review models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user review of a business
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: Uuid,
    pub business_id: Uuid,
    pub user_id: Option<Uuid>,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for submitting a review
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewInput {
    pub business_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
}
