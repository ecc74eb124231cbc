//! Page content and site settings models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A slug-keyed bilingual content page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageContent {
    pub id: Uuid,
    pub slug: String,
    pub title_tr: String,
    pub title_en: String,
    pub content_tr: Option<String>,
    pub content_en: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or updating a content page
#[derive(Debug, Clone, Deserialize)]
pub struct PageContentInput {
    pub slug: String,
    pub title_tr: String,
    pub title_en: String,
    pub content_tr: Option<String>,
    pub content_en: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

/// A site-wide setting: opaque JSON value under a well-known key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteSetting {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}
