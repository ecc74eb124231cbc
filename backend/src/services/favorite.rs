//! User favorites service

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Favorites service
#[derive(Clone)]
pub struct FavoriteService {
    db: PgPool,
}

impl FavoriteService {
    /// Create a new FavoriteService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Business ids favorited by the user, newest favorite first
    pub async fn business_ids_for_user(&self, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT business_id
            FROM user_favorites
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(ids)
    }

    /// Add an active business to the user's favorites
    pub async fn add(&self, user_id: Uuid, business_id: Uuid) -> AppResult<()> {
        let business_active = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM businesses WHERE id = $1 AND status = 'active')",
        )
        .bind(business_id)
        .fetch_one(&self.db)
        .await?;

        if !business_active {
            return Err(AppError::NotFound("Business".to_string()));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO user_favorites (user_id, business_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, business_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(business_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict {
                resource: "favorite".to_string(),
                message: "Business is already in favorites".to_string(),
                message_tr: "İşletme zaten favorilerde".to_string(),
            });
        }

        Ok(())
    }

    /// Remove a business from the user's favorites
    pub async fn remove(&self, user_id: Uuid, business_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM user_favorites WHERE user_id = $1 AND business_id = $2",
        )
        .bind(user_id)
        .bind(business_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Favorite".to_string()));
        }

        Ok(())
    }
}
