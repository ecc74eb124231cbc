//! Viewer authorization resolution
//!
//! Resolves a viewer's role and business ownership once per request. Both
//! lookups fail closed: a store error is logged and treated as "not admin"
//! and "owns nothing", since leaking contact details is the higher-risk
//! failure mode.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::ViewerContext;

/// Access resolution service
#[derive(Clone)]
pub struct AccessService {
    db: PgPool,
}

impl AccessService {
    /// Create a new AccessService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Whether the viewer holds the `admin` role.
    ///
    /// Anonymous viewers are never admin and no lookup is performed.
    pub async fn is_admin(&self, viewer_id: Option<Uuid>) -> bool {
        let Some(user_id) = viewer_id else {
            return false;
        };

        let lookup = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM user_roles WHERE user_id = $1 AND role = 'admin')",
        )
        .bind(user_id)
        .fetch_one(&self.db)
        .await;

        match lookup {
            Ok(is_admin) => is_admin,
            Err(e) => {
                tracing::warn!("Role lookup failed for {}, treating as non-admin: {}", user_id, e);
                false
            }
        }
    }

    /// The single business owned by the viewer's profile, if any.
    pub async fn owned_business_id(&self, viewer_id: Option<Uuid>) -> Option<Uuid> {
        let user_id = viewer_id?;

        let lookup = sqlx::query_scalar::<_, Option<Uuid>>(
            "SELECT business_id FROM profiles WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await;

        match lookup {
            Ok(row) => row.flatten(),
            Err(e) => {
                tracing::warn!(
                    "Ownership lookup failed for {}, treating as owning nothing: {}",
                    user_id,
                    e
                );
                None
            }
        }
    }

    /// Resolve the viewer's full authorization context in one pass.
    ///
    /// Callers resolve this once per request and reuse it when filtering a
    /// whole listing.
    pub async fn viewer_context(&self, viewer_id: Option<Uuid>) -> ViewerContext {
        let Some(user_id) = viewer_id else {
            return ViewerContext::anonymous();
        };

        ViewerContext {
            is_admin: self.is_admin(Some(user_id)).await,
            owned_business_id: self.owned_business_id(Some(user_id)).await,
        }
    }

    /// Gate for admin-only operations. Denies on lookup failure.
    pub async fn require_admin(&self, user_id: Uuid) -> AppResult<()> {
        if self.is_admin(Some(user_id)).await {
            Ok(())
        } else {
            Err(AppError::InsufficientPermissions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;

    /// Pool whose every query fails, exercising the store-error arms
    fn unreachable_pool() -> PgPool {
        PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(1))
            .connect_lazy("postgres://127.0.0.1:1/unreachable")
            .unwrap()
    }

    #[tokio::test]
    async fn store_failure_never_grants_admin() {
        let service = AccessService::new(unreachable_pool());
        assert!(!service.is_admin(Some(Uuid::new_v4())).await);
    }

    #[tokio::test]
    async fn store_failure_yields_no_ownership() {
        let service = AccessService::new(unreachable_pool());
        assert_eq!(service.owned_business_id(Some(Uuid::new_v4())).await, None);
    }

    #[tokio::test]
    async fn store_failure_resolves_to_locked_down_context() {
        let service = AccessService::new(unreachable_pool());
        let user_id = Uuid::new_v4();

        let context = service.viewer_context(Some(user_id)).await;
        assert!(!context.is_admin);
        assert_eq!(context.owned_business_id, None);
        assert!(!context.can_view_contact(user_id));
    }

    #[tokio::test]
    async fn store_failure_denies_admin_gate() {
        let service = AccessService::new(unreachable_pool());
        let result = service.require_admin(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::InsufficientPermissions)));
    }
}
