//! Business listing assembly and lifecycle management
//!
//! Fetches business rows joined with category/location metadata, resolves
//! the viewer's authorization context once per request, and applies the
//! contact-visibility filter before anything leaves this module.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::access::AccessService;
use shared::models::{
    redact_all, BusinessStatus, BusinessType, BusinessView, CategorySummary, ContactDetails,
    LocationSummary, PaymentMethod, SortOrder, WorkingHours,
};
use shared::validation::{validate_established_year, validate_turkish_phone};

/// Business service for listings, detail views, and lifecycle operations
#[derive(Clone)]
pub struct BusinessService {
    db: PgPool,
    access: AccessService,
}

/// Optional filters for the public listing
#[derive(Debug, Default, Deserialize)]
pub struct BusinessFilters {
    /// Free-text match against localized name/description
    pub q: Option<String>,
    pub category_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub delivery_available: Option<bool>,
    pub accepts_online_orders: Option<bool>,
    #[serde(default)]
    pub sort: SortOrder,
}

/// Input for submitting a new business listing
#[derive(Debug, Deserialize)]
pub struct CreateBusinessInput {
    pub name_tr: String,
    pub name_en: Option<String>,
    pub description_tr: Option<String>,
    pub description_en: Option<String>,
    pub category_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub logo_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub established_year: Option<i32>,
    pub business_type: Option<BusinessType>,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub working_hours: Option<WorkingHours>,
    #[serde(default)]
    pub accepts_online_orders: bool,
    #[serde(default)]
    pub delivery_available: bool,
    pub min_order_amount: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub shop_number: Option<String>,
    pub owner_name: Option<String>,
    pub social_media: Option<std::collections::BTreeMap<String, String>>,
}

/// Input for updating a business; absent fields are left unchanged.
/// Status is deliberately not part of this input, only admin approval
/// endpoints transition it.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBusinessInput {
    pub name_tr: Option<String>,
    pub name_en: Option<String>,
    pub description_tr: Option<String>,
    pub description_en: Option<String>,
    pub category_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub logo_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub established_year: Option<i32>,
    pub business_type: Option<BusinessType>,
    pub payment_methods: Option<Vec<PaymentMethod>>,
    pub languages: Option<Vec<String>>,
    pub working_hours: Option<WorkingHours>,
    pub accepts_online_orders: Option<bool>,
    pub delivery_available: Option<bool>,
    pub min_order_amount: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub shop_number: Option<String>,
    pub owner_name: Option<String>,
    pub social_media: Option<std::collections::BTreeMap<String, String>>,
}

/// One business row joined with category/location display metadata
#[derive(Debug, sqlx::FromRow)]
struct BusinessRow {
    id: Uuid,
    name_tr: String,
    name_en: Option<String>,
    description_tr: Option<String>,
    description_en: Option<String>,
    category_id: Option<Uuid>,
    location_id: Option<Uuid>,
    logo_url: Option<String>,
    cover_image_url: Option<String>,
    established_year: Option<i32>,
    business_type: Option<String>,
    payment_methods: Option<Vec<String>>,
    languages: Option<Vec<String>>,
    working_hours: Option<serde_json::Value>,
    accepts_online_orders: Option<bool>,
    delivery_available: Option<bool>,
    min_order_amount: Option<i64>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    phone: Option<String>,
    email: Option<String>,
    whatsapp: Option<String>,
    website: Option<String>,
    address: Option<String>,
    shop_number: Option<String>,
    owner_name: Option<String>,
    social_media: Option<serde_json::Value>,
    category_name_tr: Option<String>,
    category_name_en: Option<String>,
    category_icon: Option<String>,
    category_color: Option<String>,
    location_name_tr: Option<String>,
    location_name_en: Option<String>,
}

/// Shared SELECT for listing and detail queries
const BUSINESS_SELECT: &str = r#"
    SELECT b.id, b.name_tr, b.name_en, b.description_tr, b.description_en,
           b.category_id, b.location_id, b.logo_url, b.cover_image_url, b.established_year, b.business_type,
           b.payment_methods, b.languages, b.working_hours,
           b.accepts_online_orders, b.delivery_available, b.min_order_amount,
           b.status, b.created_at, b.updated_at,
           b.phone, b.email, b.whatsapp, b.website, b.address,
           b.shop_number, b.owner_name, b.social_media,
           c.name_tr AS category_name_tr, c.name_en AS category_name_en,
           c.icon AS category_icon, c.color AS category_color,
           l.name_tr AS location_name_tr, l.name_en AS location_name_en
    FROM businesses b
    LEFT JOIN categories c ON c.id = b.category_id
    LEFT JOIN locations l ON l.id = b.location_id
"#;

impl BusinessRow {
    /// Build the full (unredacted) view; redaction happens afterwards.
    fn into_view(self) -> BusinessView {
        let category = self.category_name_tr.map(|name_tr| CategorySummary {
            name_tr,
            name_en: self.category_name_en.unwrap_or_default(),
            icon: self.category_icon,
            color: self.category_color,
        });
        let location = self.location_name_tr.map(|name_tr| LocationSummary {
            name_tr,
            name_en: self.location_name_en.unwrap_or_default(),
        });

        let contact = ContactDetails {
            phone: self.phone,
            email: self.email,
            whatsapp: self.whatsapp,
            website: self.website,
            address: self.address,
            shop_number: self.shop_number,
            owner_name: self.owner_name,
            social_media: self
                .social_media
                .and_then(|v| serde_json::from_value(v).ok()),
        };

        BusinessView {
            id: self.id,
            name_tr: self.name_tr,
            name_en: self.name_en,
            description_tr: self.description_tr,
            description_en: self.description_en,
            category,
            location,
            logo_url: self.logo_url,
            cover_image_url: self.cover_image_url,
            established_year: self.established_year,
            business_type: self.business_type.as_deref().and_then(BusinessType::parse),
            payment_methods: self
                .payment_methods
                .unwrap_or_default()
                .iter()
                .filter_map(|s| PaymentMethod::parse(s))
                .collect(),
            languages: self.languages.unwrap_or_default(),
            working_hours: self
                .working_hours
                .and_then(|v| serde_json::from_value(v).ok()),
            accepts_online_orders: self.accepts_online_orders.unwrap_or(false),
            delivery_available: self.delivery_available.unwrap_or(false),
            min_order_amount: self.min_order_amount,
            // Unknown status values stay hidden from the public
            status: BusinessStatus::parse(&self.status).unwrap_or(BusinessStatus::Inactive),
            created_at: self.created_at,
            updated_at: self.updated_at,
            contact: Some(contact),
        }
    }
}

impl BusinessService {
    /// Create a new BusinessService instance
    pub fn new(db: PgPool) -> Self {
        let access = AccessService::new(db.clone());
        Self { db, access }
    }

    /// List active businesses matching the filters, redacted for the viewer
    pub async fn list_active(
        &self,
        filters: BusinessFilters,
        viewer_id: Option<Uuid>,
    ) -> AppResult<Vec<BusinessView>> {
        let order_by = match filters.sort.effective() {
            SortOrder::Alphabetical => "b.name_tr ASC",
            _ => "b.created_at DESC",
        };
        if filters.sort != filters.sort.effective() {
            tracing::debug!(
                "Unsupported sort order {:?} requested, falling back to newest",
                filters.sort
            );
        }

        let sql = format!(
            r#"{BUSINESS_SELECT}
            WHERE b.status = 'active'
              AND ($1::text IS NULL
                   OR b.name_tr ILIKE '%' || $1 || '%'
                   OR b.name_en ILIKE '%' || $1 || '%'
                   OR b.description_tr ILIKE '%' || $1 || '%')
              AND ($2::uuid IS NULL OR b.category_id = $2)
              AND ($3::uuid IS NULL OR b.location_id = $3)
              AND ($4::boolean IS NULL OR b.delivery_available = $4)
              AND ($5::boolean IS NULL OR b.accepts_online_orders = $5)
            ORDER BY {order_by}
            "#
        );

        let rows = sqlx::query_as::<_, BusinessRow>(&sql)
            .bind(&filters.q)
            .bind(filters.category_id)
            .bind(filters.location_id)
            .bind(filters.delivery_available)
            .bind(filters.accepts_online_orders)
            .fetch_all(&self.db)
            .await?;

        // Resolve the viewer once for the whole listing
        let viewer = self.access.viewer_context(viewer_id).await;
        let views = rows.into_iter().map(BusinessRow::into_view).collect();

        Ok(redact_all(views, &viewer))
    }

    /// Fetch active businesses by id, redacted for the viewer, preserving
    /// the order of `ids`. Used by the featured carousel.
    pub async fn list_active_by_ids(
        &self,
        ids: &[Uuid],
        viewer_id: Option<Uuid>,
    ) -> AppResult<Vec<BusinessView>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!("{BUSINESS_SELECT} WHERE b.status = 'active' AND b.id = ANY($1)");
        let rows = sqlx::query_as::<_, BusinessRow>(&sql)
            .bind(ids)
            .fetch_all(&self.db)
            .await?;

        let viewer = self.access.viewer_context(viewer_id).await;
        let mut by_id: std::collections::HashMap<Uuid, BusinessView> = rows
            .into_iter()
            .map(BusinessRow::into_view)
            .map(|v| (v.id, v))
            .collect();
        let ordered = ids.iter().filter_map(|id| by_id.remove(id)).collect();

        Ok(redact_all(ordered, &viewer))
    }

    /// Fetch a single business, respecting status gating and redaction.
    ///
    /// Non-active records are visible only to their owner and admins; for
    /// everyone else the record does not exist.
    pub async fn get_detail(
        &self,
        business_id: Uuid,
        viewer_id: Option<Uuid>,
    ) -> AppResult<BusinessView> {
        let sql = format!("{BUSINESS_SELECT} WHERE b.id = $1");
        let row = sqlx::query_as::<_, BusinessRow>(&sql)
            .bind(business_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Business".to_string()))?;

        let viewer = self.access.viewer_context(viewer_id).await;
        let view = row.into_view();

        if !view.visible_to(&viewer) {
            return Err(AppError::NotFound("Business".to_string()));
        }

        Ok(view.redact_for(&viewer))
    }

    /// Submit a new business listing in `pending` state and link it to the
    /// submitting profile. A profile can own at most one business.
    pub async fn submit(
        &self,
        user_id: Uuid,
        input: CreateBusinessInput,
    ) -> AppResult<BusinessView> {
        if input.name_tr.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name_tr".to_string(),
                message: "Turkish name is required".to_string(),
                message_tr: "Türkçe isim zorunludur".to_string(),
            });
        }
        // A listing without a reachable phone number is not accepted
        if input.phone.as_deref().map_or(true, |p| p.trim().is_empty()) {
            return Err(AppError::Validation {
                field: "phone".to_string(),
                message: "Phone number is required".to_string(),
                message_tr: "Telefon numarası zorunludur".to_string(),
            });
        }
        Self::validate_optional_fields(
            input.established_year,
            input.phone.as_deref(),
            input.whatsapp.as_deref(),
        )?;

        let existing = sqlx::query_scalar::<_, Option<Uuid>>(
            "SELECT business_id FROM profiles WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile".to_string()))?;

        if existing.is_some() {
            return Err(AppError::Conflict {
                resource: "business".to_string(),
                message: "This profile already owns a business".to_string(),
                message_tr: "Bu profil zaten bir işletmeye sahip".to_string(),
            });
        }

        let working_hours = input
            .working_hours
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| AppError::Internal(format!("Working hours serialization failed: {}", e)))?;
        let social_media = input
            .social_media
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| AppError::Internal(format!("Social media serialization failed: {}", e)))?;
        let payment_methods: Vec<String> = input
            .payment_methods
            .iter()
            .map(|m| m.as_str().to_string())
            .collect();

        let mut tx = self.db.begin().await?;

        let business_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO businesses (
                name_tr, name_en, description_tr, description_en,
                category_id, location_id, logo_url, cover_image_url,
                established_year, business_type, payment_methods, languages,
                working_hours, accepts_online_orders, delivery_available,
                min_order_amount, phone, email, whatsapp, website, address,
                shop_number, owner_name, social_media, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24,
                    'pending')
            RETURNING id
            "#,
        )
        .bind(&input.name_tr)
        .bind(&input.name_en)
        .bind(&input.description_tr)
        .bind(&input.description_en)
        .bind(input.category_id)
        .bind(input.location_id)
        .bind(&input.logo_url)
        .bind(&input.cover_image_url)
        .bind(input.established_year)
        .bind(input.business_type.map(|t| t.as_str()))
        .bind(&payment_methods)
        .bind(&input.languages)
        .bind(working_hours)
        .bind(input.accepts_online_orders)
        .bind(input.delivery_available)
        .bind(input.min_order_amount)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.whatsapp)
        .bind(&input.website)
        .bind(&input.address)
        .bind(&input.shop_number)
        .bind(&input.owner_name)
        .bind(social_media)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE profiles SET business_id = $1, updated_at = NOW() WHERE id = $2")
            .bind(business_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.get_detail(business_id, Some(user_id)).await
    }

    /// Update a business; allowed for its owner and admins
    pub async fn update(
        &self,
        business_id: Uuid,
        user_id: Uuid,
        input: UpdateBusinessInput,
    ) -> AppResult<BusinessView> {
        // The primary-language name can be changed but never blanked
        if input.name_tr.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::Validation {
                field: "name_tr".to_string(),
                message: "Turkish name cannot be empty".to_string(),
                message_tr: "Türkçe isim boş olamaz".to_string(),
            });
        }
        Self::validate_optional_fields(
            input.established_year,
            input.phone.as_deref(),
            input.whatsapp.as_deref(),
        )?;

        let viewer = self.access.viewer_context(Some(user_id)).await;
        if !viewer.can_view_contact(business_id) {
            return Err(AppError::InsufficientPermissions);
        }

        let sql = format!("{BUSINESS_SELECT} WHERE b.id = $1");
        let existing = sqlx::query_as::<_, BusinessRow>(&sql)
            .bind(business_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Business".to_string()))?;

        let working_hours = match &input.working_hours {
            Some(hours) => Some(serde_json::to_value(hours).map_err(|e| {
                AppError::Internal(format!("Working hours serialization failed: {}", e))
            })?),
            None => existing.working_hours,
        };
        let social_media = match &input.social_media {
            Some(links) => Some(serde_json::to_value(links).map_err(|e| {
                AppError::Internal(format!("Social media serialization failed: {}", e))
            })?),
            None => existing.social_media,
        };
        let payment_methods: Vec<String> = match input.payment_methods {
            Some(methods) => methods.iter().map(|m| m.as_str().to_string()).collect(),
            None => existing.payment_methods.unwrap_or_default(),
        };

        sqlx::query(
            r#"
            UPDATE businesses
            SET name_tr = $1, name_en = $2, description_tr = $3,
                description_en = $4, category_id = $5, location_id = $6,
                logo_url = $7, cover_image_url = $8, established_year = $9,
                business_type = $10, payment_methods = $11, languages = $12,
                working_hours = $13, accepts_online_orders = $14,
                delivery_available = $15, min_order_amount = $16, phone = $17,
                email = $18, whatsapp = $19, website = $20, address = $21,
                shop_number = $22, owner_name = $23, social_media = $24,
                updated_at = NOW()
            WHERE id = $25
            "#,
        )
        .bind(input.name_tr.unwrap_or(existing.name_tr))
        .bind(input.name_en.or(existing.name_en))
        .bind(input.description_tr.or(existing.description_tr))
        .bind(input.description_en.or(existing.description_en))
        .bind(input.category_id.or(existing.category_id))
        .bind(input.location_id.or(existing.location_id))
        .bind(input.logo_url.or(existing.logo_url))
        .bind(input.cover_image_url.or(existing.cover_image_url))
        .bind(input.established_year.or(existing.established_year))
        .bind(
            input
                .business_type
                .map(|t| t.as_str().to_string())
                .or(existing.business_type),
        )
        .bind(&payment_methods)
        .bind(input.languages.or(existing.languages).unwrap_or_default())
        .bind(working_hours)
        .bind(
            input
                .accepts_online_orders
                .or(existing.accepts_online_orders)
                .unwrap_or(false),
        )
        .bind(
            input
                .delivery_available
                .or(existing.delivery_available)
                .unwrap_or(false),
        )
        .bind(input.min_order_amount.or(existing.min_order_amount))
        .bind(input.phone.or(existing.phone))
        .bind(input.email.or(existing.email))
        .bind(input.whatsapp.or(existing.whatsapp))
        .bind(input.website.or(existing.website))
        .bind(input.address.or(existing.address))
        .bind(input.shop_number.or(existing.shop_number))
        .bind(input.owner_name.or(existing.owner_name))
        .bind(social_media)
        .bind(business_id)
        .execute(&self.db)
        .await?;

        self.get_detail(business_id, Some(user_id)).await
    }

    /// Transition a business's lifecycle status. Caller must have verified
    /// admin rights. Returns the previous status for audit logging.
    pub async fn set_status(
        &self,
        business_id: Uuid,
        status: BusinessStatus,
    ) -> AppResult<BusinessStatus> {
        let previous = sqlx::query_scalar::<_, String>(
            "SELECT status FROM businesses WHERE id = $1",
        )
        .bind(business_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Business".to_string()))?;

        sqlx::query("UPDATE businesses SET status = $1, updated_at = NOW() WHERE id = $2")
            .bind(status.as_str())
            .bind(business_id)
            .execute(&self.db)
            .await?;

        Ok(BusinessStatus::parse(&previous).unwrap_or(BusinessStatus::Inactive))
    }

    /// Shared checks for fields that are optional on the wire but must be
    /// well-formed when present
    fn validate_optional_fields(
        established_year: Option<i32>,
        phone: Option<&str>,
        whatsapp: Option<&str>,
    ) -> AppResult<()> {
        if let Some(year) = established_year {
            if let Err(msg) = validate_established_year(year) {
                return Err(AppError::Validation {
                    field: "established_year".to_string(),
                    message: msg.to_string(),
                    message_tr: "Kuruluş yılı geçersiz".to_string(),
                });
            }
        }
        if let Some(phone) = phone.filter(|p| !p.trim().is_empty()) {
            if let Err(msg) = validate_turkish_phone(phone) {
                return Err(AppError::Validation {
                    field: "phone".to_string(),
                    message: msg.to_string(),
                    message_tr: "Telefon numarası geçersiz".to_string(),
                });
            }
        }
        if let Some(whatsapp) = whatsapp.filter(|p| !p.trim().is_empty()) {
            if let Err(msg) = validate_turkish_phone(whatsapp) {
                return Err(AppError::Validation {
                    field: "whatsapp".to_string(),
                    message: msg.to_string(),
                    message_tr: "WhatsApp numarası geçersiz".to_string(),
                });
            }
        }
        Ok(())
    }

    /// List businesses of any status for the admin panel (unredacted)
    pub async fn admin_list(
        &self,
        status: Option<BusinessStatus>,
    ) -> AppResult<Vec<BusinessView>> {
        let sql = format!(
            r#"{BUSINESS_SELECT}
            WHERE ($1::text IS NULL OR b.status = $1)
            ORDER BY b.created_at DESC
            "#
        );

        let rows = sqlx::query_as::<_, BusinessRow>(&sql)
            .bind(status.map(|s| s.as_str()))
            .fetch_all(&self.db)
            .await?;

        Ok(rows.into_iter().map(BusinessRow::into_view).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;

    /// Pool that fails on first use; input validation must reject bad
    /// requests before any query runs.
    fn unreachable_pool() -> PgPool {
        PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(1))
            .connect_lazy("postgres://127.0.0.1:1/unreachable")
            .unwrap()
    }

    fn submission() -> CreateBusinessInput {
        CreateBusinessInput {
            name_tr: "Halıcı Mehmet".to_string(),
            name_en: None,
            description_tr: None,
            description_en: None,
            category_id: None,
            location_id: None,
            logo_url: None,
            cover_image_url: None,
            established_year: Some(1962),
            business_type: None,
            payment_methods: Vec::new(),
            languages: vec!["tr".to_string()],
            working_hours: None,
            accepts_online_orders: false,
            delivery_available: false,
            min_order_amount: None,
            phone: Some("0212 522 00 00".to_string()),
            email: None,
            whatsapp: None,
            website: None,
            address: None,
            shop_number: None,
            owner_name: None,
            social_media: None,
        }
    }

    fn assert_validation_on(result: AppResult<BusinessView>, expected_field: &str) {
        match result {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected validation error, got {:?}", other.map(|v| v.id)),
        }
    }

    #[tokio::test]
    async fn submit_rejects_blank_name() {
        let service = BusinessService::new(unreachable_pool());
        let input = CreateBusinessInput {
            name_tr: "   ".to_string(),
            ..submission()
        };
        assert_validation_on(service.submit(Uuid::new_v4(), input).await, "name_tr");
    }

    #[tokio::test]
    async fn submit_requires_phone() {
        let service = BusinessService::new(unreachable_pool());
        let input = CreateBusinessInput {
            phone: None,
            ..submission()
        };
        assert_validation_on(service.submit(Uuid::new_v4(), input).await, "phone");
    }

    #[tokio::test]
    async fn submit_rejects_malformed_phone() {
        let service = BusinessService::new(unreachable_pool());
        let input = CreateBusinessInput {
            phone: Some("12345".to_string()),
            ..submission()
        };
        assert_validation_on(service.submit(Uuid::new_v4(), input).await, "phone");
    }

    #[tokio::test]
    async fn update_cannot_blank_the_turkish_name() {
        let service = BusinessService::new(unreachable_pool());
        let input = UpdateBusinessInput {
            name_tr: Some("".to_string()),
            ..UpdateBusinessInput::default()
        };
        assert_validation_on(
            service.update(Uuid::new_v4(), Uuid::new_v4(), input).await,
            "name_tr",
        );

        let service = BusinessService::new(unreachable_pool());
        let input = UpdateBusinessInput {
            name_tr: Some("  \t ".to_string()),
            ..UpdateBusinessInput::default()
        };
        assert_validation_on(
            service.update(Uuid::new_v4(), Uuid::new_v4(), input).await,
            "name_tr",
        );
    }

    #[tokio::test]
    async fn update_rejects_malformed_contact_numbers() {
        let service = BusinessService::new(unreachable_pool());
        let input = UpdateBusinessInput {
            phone: Some("not a number".to_string()),
            ..UpdateBusinessInput::default()
        };
        assert_validation_on(
            service.update(Uuid::new_v4(), Uuid::new_v4(), input).await,
            "phone",
        );

        let service = BusinessService::new(unreachable_pool());
        let input = UpdateBusinessInput {
            whatsapp: Some("999".to_string()),
            ..UpdateBusinessInput::default()
        };
        assert_validation_on(
            service.update(Uuid::new_v4(), Uuid::new_v4(), input).await,
            "whatsapp",
        );
    }
}
