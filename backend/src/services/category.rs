//! Category management service

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{Category, CategoryInput};
use shared::validation::validate_hex_color;

/// Category service
#[derive(Clone)]
pub struct CategoryService {
    db: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name_tr: String,
    name_en: String,
    icon: Option<String>,
    color: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name_tr: row.name_tr,
            name_en: row.name_en,
            icon: row.icon,
            color: row.color,
            created_at: row.created_at,
        }
    }
}

impl CategoryService {
    /// Create a new CategoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all categories ordered by Turkish name
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name_tr, name_en, icon, color, created_at FROM categories ORDER BY name_tr ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// Create a category
    pub async fn create(&self, input: CategoryInput) -> AppResult<Category> {
        Self::validate(&input)?;

        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name_tr, name_en, icon, color)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name_tr, name_en, icon, color, created_at
            "#,
        )
        .bind(&input.name_tr)
        .bind(&input.name_en)
        .bind(&input.icon)
        .bind(&input.color)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Update a category
    pub async fn update(&self, category_id: Uuid, input: CategoryInput) -> AppResult<Category> {
        Self::validate(&input)?;

        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE categories
            SET name_tr = $1, name_en = $2, icon = $3, color = $4
            WHERE id = $5
            RETURNING id, name_tr, name_en, icon, color, created_at
            "#,
        )
        .bind(&input.name_tr)
        .bind(&input.name_en)
        .bind(&input.icon)
        .bind(&input.color)
        .bind(category_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Category".to_string()))?;

        Ok(row.into())
    }

    /// Delete a category; blocked while any business references it
    pub async fn delete(&self, category_id: Uuid) -> AppResult<()> {
        let referencing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM businesses WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_one(&self.db)
        .await?;

        if referencing > 0 {
            return Err(AppError::ResourceInUse {
                resource: "Category".to_string(),
                count: referencing,
            });
        }

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Category".to_string()));
        }

        Ok(())
    }

    fn validate(input: &CategoryInput) -> AppResult<()> {
        if input.name_tr.trim().is_empty() || input.name_en.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Category names are required in both languages".to_string(),
                message_tr: "Kategori adı her iki dilde de zorunludur".to_string(),
            });
        }
        if let Some(color) = &input.color {
            if let Err(msg) = validate_hex_color(color) {
                return Err(AppError::Validation {
                    field: "color".to_string(),
                    message: msg.to_string(),
                    message_tr: "Renk değeri geçersiz".to_string(),
                });
            }
        }
        Ok(())
    }
}
