//! Featured-business curation service
//!
//! Admins curate an ordered carousel of featured listings. Public reads go
//! through the business service so the usual redaction applies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{FeaturedBusiness, MoveDirection};

/// Featured-business service
#[derive(Clone)]
pub struct FeaturedService {
    db: PgPool,
}

/// Input for adding a business to the featured list
#[derive(Debug, Deserialize)]
pub struct AddFeaturedInput {
    pub business_id: Uuid,
    pub featured_until: Option<DateTime<Utc>>,
}

/// Input for updating a featured entry
#[derive(Debug, Deserialize)]
pub struct UpdateFeaturedInput {
    pub is_active: Option<bool>,
    pub featured_until: Option<DateTime<Utc>>,
}

/// A featured entry with business display names, for the admin panel
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct FeaturedEntry {
    pub id: Uuid,
    pub business_id: Uuid,
    pub sort_order: i32,
    pub is_active: bool,
    pub featured_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub business_name_tr: String,
    pub business_name_en: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct FeaturedRow {
    id: Uuid,
    business_id: Uuid,
    sort_order: i32,
    is_active: bool,
    featured_until: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FeaturedRow> for FeaturedBusiness {
    fn from(row: FeaturedRow) -> Self {
        FeaturedBusiness {
            id: row.id,
            business_id: row.business_id,
            sort_order: row.sort_order,
            is_active: row.is_active,
            featured_until: row.featured_until,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl FeaturedService {
    /// Create a new FeaturedService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Business ids currently featured, in display order.
    ///
    /// Skips inactive entries and entries whose `featured_until` has passed.
    pub async fn active_business_ids(&self) -> AppResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT business_id
            FROM featured_businesses
            WHERE is_active = true
              AND (featured_until IS NULL OR featured_until > NOW())
            ORDER BY sort_order ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(ids)
    }

    /// All featured entries with business names, for the admin panel
    pub async fn admin_list(&self) -> AppResult<Vec<FeaturedEntry>> {
        let entries = sqlx::query_as::<_, FeaturedEntry>(
            r#"
            SELECT f.id, f.business_id, f.sort_order, f.is_active,
                   f.featured_until, f.created_at, f.updated_at,
                   b.name_tr AS business_name_tr, b.name_en AS business_name_en
            FROM featured_businesses f
            JOIN businesses b ON b.id = f.business_id
            ORDER BY f.sort_order ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(entries)
    }

    /// Add a business to the featured list at the end of the order
    pub async fn add(&self, input: AddFeaturedInput) -> AppResult<FeaturedBusiness> {
        let business_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM businesses WHERE id = $1)",
        )
        .bind(input.business_id)
        .fetch_one(&self.db)
        .await?;

        if !business_exists {
            return Err(AppError::NotFound("Business".to_string()));
        }

        let already_featured = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM featured_businesses WHERE business_id = $1)",
        )
        .bind(input.business_id)
        .fetch_one(&self.db)
        .await?;

        if already_featured {
            return Err(AppError::Conflict {
                resource: "featured_business".to_string(),
                message: "Business is already featured".to_string(),
                message_tr: "İşletme zaten öne çıkarılmış".to_string(),
            });
        }

        let row = sqlx::query_as::<_, FeaturedRow>(
            r#"
            INSERT INTO featured_businesses (business_id, sort_order, is_active, featured_until)
            VALUES (
                $1,
                COALESCE((SELECT MAX(sort_order) FROM featured_businesses), 0) + 1,
                true,
                $2
            )
            RETURNING id, business_id, sort_order, is_active, featured_until,
                      created_at, updated_at
            "#,
        )
        .bind(input.business_id)
        .bind(input.featured_until)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Update activation or expiry of a featured entry
    pub async fn update(
        &self,
        featured_id: Uuid,
        input: UpdateFeaturedInput,
    ) -> AppResult<FeaturedBusiness> {
        let row = sqlx::query_as::<_, FeaturedRow>(
            r#"
            UPDATE featured_businesses
            SET is_active = COALESCE($1, is_active),
                featured_until = COALESCE($2, featured_until),
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, business_id, sort_order, is_active, featured_until,
                      created_at, updated_at
            "#,
        )
        .bind(input.is_active)
        .bind(input.featured_until)
        .bind(featured_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Featured entry".to_string()))?;

        Ok(row.into())
    }

    /// Swap a featured entry with its neighbor in the given direction
    pub async fn reorder(&self, featured_id: Uuid, direction: MoveDirection) -> AppResult<()> {
        let entries = sqlx::query_as::<_, FeaturedRow>(
            r#"
            SELECT id, business_id, sort_order, is_active, featured_until,
                   created_at, updated_at
            FROM featured_businesses
            ORDER BY sort_order ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let position = entries
            .iter()
            .position(|e| e.id == featured_id)
            .ok_or_else(|| AppError::NotFound("Featured entry".to_string()))?;

        let neighbor = match direction {
            MoveDirection::Up => position.checked_sub(1).map(|i| &entries[i]),
            MoveDirection::Down => entries.get(position + 1),
        };

        // Already at the edge: nothing to do
        let Some(neighbor) = neighbor else {
            return Ok(());
        };
        let current = &entries[position];

        let mut tx = self.db.begin().await?;

        sqlx::query("UPDATE featured_businesses SET sort_order = $1, updated_at = NOW() WHERE id = $2")
            .bind(neighbor.sort_order)
            .bind(current.id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE featured_businesses SET sort_order = $1, updated_at = NOW() WHERE id = $2")
            .bind(current.sort_order)
            .bind(neighbor.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Remove a business from the featured list
    pub async fn remove(&self, featured_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM featured_businesses WHERE id = $1")
            .bind(featured_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Featured entry".to_string()));
        }

        Ok(())
    }
}
