//! Admin service: dashboard stats, user management and the audit log

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::AppRole;
use shared::types::{PaginatedResponse, Pagination};

#[derive(Clone)]
pub struct AdminService {
    db: PgPool,
}

/// Dashboard counters for the admin landing page
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryStats {
    pub total_users: i64,
    pub total_businesses: i64,
    pub pending_businesses: i64,
    pub active_businesses: i64,
}

/// A user as listed in the admin panel
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserView {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub business_id: Option<Uuid>,
    pub role: AppRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A security audit log entry
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AuditEntry {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub resource: Option<String>,
    pub details: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct AdminUserRow {
    id: Uuid,
    email: String,
    username: Option<String>,
    full_name: Option<String>,
    business_id: Option<Uuid>,
    role: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<AdminUserRow> for AdminUserView {
    fn from(row: AdminUserRow) -> Self {
        let role = row
            .role
            .as_deref()
            .and_then(AppRole::parse)
            .unwrap_or_default();
        AdminUserView {
            id: row.id,
            email: row.email,
            username: row.username,
            full_name: row.full_name,
            business_id: row.business_id,
            role,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

impl AdminService {
    /// Create a new AdminService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Aggregate counters in a single round trip
    pub async fn stats(&self) -> AppResult<DirectoryStats> {
        let row = sqlx::query_as::<_, (i64, i64, i64, i64)>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users),
                (SELECT COUNT(*) FROM businesses),
                (SELECT COUNT(*) FROM businesses WHERE status = 'pending'),
                (SELECT COUNT(*) FROM businesses WHERE status = 'active')
            "#,
        )
        .fetch_one(&self.db)
        .await?;

        Ok(DirectoryStats {
            total_users: row.0,
            total_businesses: row.1,
            pending_businesses: row.2,
            active_businesses: row.3,
        })
    }

    /// List users with their resolved role, newest first
    pub async fn list_users(
        &self,
        pagination: Pagination,
    ) -> AppResult<PaginatedResponse<AdminUserView>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db)
            .await?;

        let rows = sqlx::query_as::<_, AdminUserRow>(
            r#"
            SELECT u.id, u.email, p.username, p.full_name, p.business_id,
                   r.role, u.is_active, u.created_at
            FROM users u
            JOIN profiles p ON p.id = u.id
            LEFT JOIN user_roles r ON r.user_id = u.id
            ORDER BY u.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        let users = rows.into_iter().map(AdminUserView::from).collect();
        Ok(PaginatedResponse::new(users, total, &pagination))
    }

    /// Replace a user's role assignment.
    ///
    /// The default `user` role is represented by the absence of a row, so
    /// assigning it only deletes. Returns the previous role for auditing.
    pub async fn set_role(&self, user_id: Uuid, role: AppRole) -> AppResult<AppRole> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&self.db)
            .await?;

        if !exists {
            return Err(AppError::NotFound("User".to_string()));
        }

        let mut tx = self.db.begin().await?;

        let previous = sqlx::query_scalar::<_, String>(
            "DELETE FROM user_roles WHERE user_id = $1 RETURNING role",
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .as_deref()
        .and_then(AppRole::parse)
        .unwrap_or_default();

        if role != AppRole::User {
            sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, $2)")
                .bind(user_id)
                .bind(role.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(previous)
    }

    /// Append an entry to the security audit log.
    ///
    /// Auditing never fails the operation being audited.
    pub async fn record_audit(
        &self,
        user_id: Option<Uuid>,
        action: &str,
        resource: Option<&str>,
        details: serde_json::Value,
    ) {
        let result = sqlx::query(
            r#"
            INSERT INTO security_audit_logs (user_id, action, resource, details)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(action)
        .bind(resource)
        .bind(&details)
        .execute(&self.db)
        .await;

        if let Err(e) = result {
            warn!("Failed to record audit entry for action {}: {}", action, e);
        }
    }

    /// Read the audit log, newest first
    pub async fn list_audit(
        &self,
        pagination: Pagination,
    ) -> AppResult<PaginatedResponse<AuditEntry>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM security_audit_logs")
            .fetch_one(&self.db)
            .await?;

        let entries = sqlx::query_as::<_, AuditEntry>(
            r#"
            SELECT id, user_id, action, resource, details, created_at
            FROM security_audit_logs
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.db)
        .await?;

        Ok(PaginatedResponse::new(entries, total, &pagination))
    }
}
