//! Review management service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{CreateReviewInput, Review};
use shared::validation::validate_rating;

/// Review service
#[derive(Clone)]
pub struct ReviewService {
    db: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    business_id: Uuid,
    user_id: Option<Uuid>,
    rating: i32,
    comment: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            business_id: row.business_id,
            user_id: row.user_id,
            rating: row.rating,
            comment: row.comment,
            created_at: row.created_at,
        }
    }
}

impl ReviewService {
    /// Create a new ReviewService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List reviews for an active business, newest first
    pub async fn list_for_business(&self, business_id: Uuid) -> AppResult<Vec<Review>> {
        let business_active = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM businesses WHERE id = $1 AND status = 'active')",
        )
        .bind(business_id)
        .fetch_one(&self.db)
        .await?;

        if !business_active {
            return Err(AppError::NotFound("Business".to_string()));
        }

        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, business_id, user_id, rating, comment, created_at
            FROM reviews
            WHERE business_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(business_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    /// Submit a review for an active business
    pub async fn create(&self, user_id: Uuid, input: CreateReviewInput) -> AppResult<Review> {
        if let Err(msg) = validate_rating(input.rating) {
            return Err(AppError::Validation {
                field: "rating".to_string(),
                message: msg.to_string(),
                message_tr: "Puan 1 ile 5 arasında olmalı".to_string(),
            });
        }

        let business_active = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM businesses WHERE id = $1 AND status = 'active')",
        )
        .bind(input.business_id)
        .fetch_one(&self.db)
        .await?;

        if !business_active {
            return Err(AppError::NotFound("Business".to_string()));
        }

        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews (business_id, user_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id, business_id, user_id, rating, comment, created_at
            "#,
        )
        .bind(input.business_id)
        .bind(user_id)
        .bind(input.rating)
        .bind(&input.comment)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// List all reviews for moderation, optionally filtered by rating
    pub async fn admin_list(&self, rating: Option<i32>) -> AppResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, business_id, user_id, rating, comment, created_at
            FROM reviews
            WHERE ($1::int IS NULL OR rating = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(rating)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    /// Delete a review (moderation)
    pub async fn delete(&self, review_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(review_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Review".to_string()));
        }

        Ok(())
    }
}
