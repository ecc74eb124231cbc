//! Page content and site settings service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{PageContent, PageContentInput, SiteSetting};
use shared::validation::validate_slug;

/// Content service for bilingual pages and site-wide settings
#[derive(Clone)]
pub struct ContentService {
    db: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct PageRow {
    id: Uuid,
    slug: String,
    title_tr: String,
    title_en: String,
    content_tr: Option<String>,
    content_en: Option<String>,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PageRow> for PageContent {
    fn from(row: PageRow) -> Self {
        PageContent {
            id: row.id,
            slug: row.slug,
            title_tr: row.title_tr,
            title_en: row.title_en,
            content_tr: row.content_tr,
            content_en: row.content_en,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SettingRow {
    key: String,
    value: serde_json::Value,
    updated_at: DateTime<Utc>,
}

impl From<SettingRow> for SiteSetting {
    fn from(row: SettingRow) -> Self {
        SiteSetting {
            key: row.key,
            value: row.value,
            updated_at: row.updated_at,
        }
    }
}

const PAGE_COLUMNS: &str =
    "id, slug, title_tr, title_en, content_tr, content_en, is_published, created_at, updated_at";

impl ContentService {
    /// Create a new ContentService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Fetch a published page by slug. Drafts are reachable only through
    /// the admin listing.
    pub async fn get_page(&self, slug: &str) -> AppResult<PageContent> {
        let row = sqlx::query_as::<_, PageRow>(&Self::page_by_slug_sql())
            .bind(slug)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Page".to_string()))?;

        Ok(row.into())
    }

    /// List all pages for the admin panel
    pub async fn list_pages(&self) -> AppResult<Vec<PageContent>> {
        let sql = format!("SELECT {PAGE_COLUMNS} FROM page_contents ORDER BY slug ASC");
        let rows = sqlx::query_as::<_, PageRow>(&sql).fetch_all(&self.db).await?;

        Ok(rows.into_iter().map(PageContent::from).collect())
    }

    /// Create a content page
    pub async fn create_page(&self, input: PageContentInput) -> AppResult<PageContent> {
        Self::validate(&input)?;

        let duplicate = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM page_contents WHERE slug = $1)",
        )
        .bind(&input.slug)
        .fetch_one(&self.db)
        .await?;

        if duplicate {
            return Err(AppError::Conflict {
                resource: "page".to_string(),
                message: "A page with this slug already exists".to_string(),
                message_tr: "Bu bağlantıya sahip bir sayfa zaten var".to_string(),
            });
        }

        let sql = format!(
            r#"
            INSERT INTO page_contents (slug, title_tr, title_en, content_tr, content_en, is_published)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PAGE_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, PageRow>(&sql)
            .bind(&input.slug)
            .bind(&input.title_tr)
            .bind(&input.title_en)
            .bind(&input.content_tr)
            .bind(&input.content_en)
            .bind(input.is_published)
            .fetch_one(&self.db)
            .await?;

        Ok(row.into())
    }

    /// Update a content page
    pub async fn update_page(&self, page_id: Uuid, input: PageContentInput) -> AppResult<PageContent> {
        Self::validate(&input)?;

        let sql = format!(
            r#"
            UPDATE page_contents
            SET slug = $1, title_tr = $2, title_en = $3, content_tr = $4,
                content_en = $5, is_published = $6, updated_at = NOW()
            WHERE id = $7
            RETURNING {PAGE_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, PageRow>(&sql)
            .bind(&input.slug)
            .bind(&input.title_tr)
            .bind(&input.title_en)
            .bind(&input.content_tr)
            .bind(&input.content_en)
            .bind(input.is_published)
            .bind(page_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Page".to_string()))?;

        Ok(row.into())
    }

    /// Delete a content page
    pub async fn delete_page(&self, page_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM page_contents WHERE id = $1")
            .bind(page_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Page".to_string()));
        }

        Ok(())
    }

    /// All site settings (read by the public site chrome)
    pub async fn list_settings(&self) -> AppResult<Vec<SiteSetting>> {
        let rows = sqlx::query_as::<_, SettingRow>(
            "SELECT key, value, updated_at FROM site_settings ORDER BY key ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(SiteSetting::from).collect())
    }

    /// Create or replace a site setting
    pub async fn upsert_setting(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> AppResult<SiteSetting> {
        let row = sqlx::query_as::<_, SettingRow>(
            r#"
            INSERT INTO site_settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()
            RETURNING key, value, updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    fn page_by_slug_sql() -> String {
        format!("SELECT {PAGE_COLUMNS} FROM page_contents WHERE slug = $1 AND is_published")
    }

    fn validate(input: &PageContentInput) -> AppResult<()> {
        if let Err(msg) = validate_slug(&input.slug) {
            return Err(AppError::Validation {
                field: "slug".to_string(),
                message: msg.to_string(),
                message_tr: "Sayfa bağlantısı geçersiz".to_string(),
            });
        }
        if input.title_tr.trim().is_empty() || input.title_en.trim().is_empty() {
            return Err(AppError::Validation {
                field: "title".to_string(),
                message: "Page titles are required in both languages".to_string(),
                message_tr: "Sayfa başlığı her iki dilde de zorunludur".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_page_lookup_excludes_drafts() {
        let sql = ContentService::page_by_slug_sql();
        assert!(sql.contains("AND is_published"));
        assert!(!sql.contains("$2"));
    }
}
