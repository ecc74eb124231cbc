//! Location management service

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{Location, LocationInput};

/// Location service
#[derive(Clone)]
pub struct LocationService {
    db: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct LocationRow {
    id: Uuid,
    name_tr: String,
    name_en: String,
    description_tr: Option<String>,
    description_en: Option<String>,
    image_url: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            name_tr: row.name_tr,
            name_en: row.name_en,
            description_tr: row.description_tr,
            description_en: row.description_en,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

impl LocationService {
    /// Create a new LocationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all locations ordered by Turkish name
    pub async fn list(&self) -> AppResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT id, name_tr, name_en, description_tr, description_en, image_url, created_at
            FROM locations
            ORDER BY name_tr ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    /// Create a location
    pub async fn create(&self, input: LocationInput) -> AppResult<Location> {
        Self::validate(&input)?;

        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            INSERT INTO locations (name_tr, name_en, description_tr, description_en, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name_tr, name_en, description_tr, description_en, image_url, created_at
            "#,
        )
        .bind(&input.name_tr)
        .bind(&input.name_en)
        .bind(&input.description_tr)
        .bind(&input.description_en)
        .bind(&input.image_url)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Update a location
    pub async fn update(&self, location_id: Uuid, input: LocationInput) -> AppResult<Location> {
        Self::validate(&input)?;

        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            UPDATE locations
            SET name_tr = $1, name_en = $2, description_tr = $3,
                description_en = $4, image_url = $5
            WHERE id = $6
            RETURNING id, name_tr, name_en, description_tr, description_en, image_url, created_at
            "#,
        )
        .bind(&input.name_tr)
        .bind(&input.name_en)
        .bind(&input.description_tr)
        .bind(&input.description_en)
        .bind(&input.image_url)
        .bind(location_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Location".to_string()))?;

        Ok(row.into())
    }

    /// Delete a location; blocked while any business references it
    pub async fn delete(&self, location_id: Uuid) -> AppResult<()> {
        let referencing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM businesses WHERE location_id = $1",
        )
        .bind(location_id)
        .fetch_one(&self.db)
        .await?;

        if referencing > 0 {
            return Err(AppError::ResourceInUse {
                resource: "Location".to_string(),
                count: referencing,
            });
        }

        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(location_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Location".to_string()));
        }

        Ok(())
    }

    fn validate(input: &LocationInput) -> AppResult<()> {
        if input.name_tr.trim().is_empty() || input.name_en.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Location names are required in both languages".to_string(),
                message_tr: "Konum adı her iki dilde de zorunludur".to_string(),
            });
        }
        Ok(())
    }
}
