//! Category lookup models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A business category (localized lookup entity)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name_tr: String,
    pub name_en: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating or replacing a category
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    pub name_tr: String,
    pub name_en: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}
