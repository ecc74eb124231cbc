//! Profile service for the caller's own account

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{Profile, UpdateProfileInput};
use shared::types::Language;

#[derive(Clone)]
pub struct ProfileService {
    db: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    username: Option<String>,
    full_name: Option<String>,
    avatar_url: Option<String>,
    business_id: Option<Uuid>,
    preferred_language: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            username: row.username,
            full_name: row.full_name,
            avatar_url: row.avatar_url,
            business_id: row.business_id,
            preferred_language: Language::from_code(&row.preferred_language).unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const PROFILE_COLUMNS: &str =
    "id, username, full_name, avatar_url, business_id, preferred_language, created_at, updated_at";

impl ProfileService {
    /// Create a new ProfileService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fetch the caller's profile
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<Profile> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1");
        let row = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(user_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile".to_string()))?;

        Ok(row.into())
    }

    /// Update the caller's profile. Absent fields keep their current value.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        input: UpdateProfileInput,
    ) -> AppResult<Profile> {
        if let Some(username) = &input.username {
            if username.trim().is_empty() {
                return Err(AppError::Validation {
                    field: "username".to_string(),
                    message: "Username cannot be empty".to_string(),
                    message_tr: "Kullanıcı adı boş olamaz".to_string(),
                });
            }
        }

        let sql = format!(
            r#"
            UPDATE profiles
            SET username = COALESCE($1, username),
                full_name = COALESCE($2, full_name),
                avatar_url = COALESCE($3, avatar_url),
                preferred_language = COALESCE($4, preferred_language),
                updated_at = NOW()
            WHERE id = $5
            RETURNING {PROFILE_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(&input.username)
            .bind(&input.full_name)
            .bind(&input.avatar_url)
            .bind(input.preferred_language.map(|l| l.code()))
            .bind(user_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile".to_string()))?;

        Ok(row.into())
    }
}
