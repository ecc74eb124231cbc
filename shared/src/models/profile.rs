//! User profile and role models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Language;

/// Application role drawn from the role-assignment store.
///
/// A user with no assignment holds the default `User` role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Admin,
    Moderator,
    #[default]
    User,
}

impl AppRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppRole::Admin => "admin",
            AppRole::Moderator => "moderator",
            AppRole::User => "user",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(AppRole::Admin),
            "moderator" => Some(AppRole::Moderator),
            "user" => Some(AppRole::User),
            _ => None,
        }
    }
}

/// A user profile; `business_id` is the single nullable ownership reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub business_id: Option<Uuid>,
    pub preferred_language: Language,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for updating the caller's own profile
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileInput {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub preferred_language: Option<Language>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_input_accepts_language_code() {
        let input: UpdateProfileInput =
            serde_json::from_str(r#"{"preferred_language": "en"}"#).unwrap();
        assert_eq!(input.preferred_language, Some(Language::English));
        assert!(input.username.is_none());
    }

    #[test]
    fn update_input_language_is_optional() {
        let input: UpdateProfileInput = serde_json::from_str(r#"{"username": "mehmet"}"#).unwrap();
        assert_eq!(input.preferred_language, None);
    }

    #[test]
    fn profile_serializes_language_as_code() {
        let profile = Profile {
            id: Uuid::new_v4(),
            username: Some("mehmet".to_string()),
            full_name: None,
            avatar_url: None,
            business_id: None,
            preferred_language: Language::Turkish,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["preferred_language"], "tr");
    }
}
