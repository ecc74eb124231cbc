//! Business records and the contact-visibility filter
//!
//! Sensitive contact fields live only inside [`ContactDetails`], so a
//! redacted [`BusinessView`] cannot expose a contact field added later.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a business listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStatus {
    /// Submitted, awaiting admin approval
    Pending,
    /// Approved and publicly listed
    Active,
    /// Rejected or retired by an admin
    Inactive,
}

impl BusinessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessStatus::Pending => "pending",
            BusinessStatus::Active => "active",
            BusinessStatus::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BusinessStatus::Pending),
            "active" => Some(BusinessStatus::Active),
            "inactive" => Some(BusinessStatus::Inactive),
            _ => None,
        }
    }
}

/// Commerce model of a business
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Retail,
    Wholesale,
    Both,
}

impl BusinessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Retail => "retail",
            BusinessType::Wholesale => "wholesale",
            BusinessType::Both => "both",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "retail" => Some(BusinessType::Retail),
            "wholesale" => Some(BusinessType::Wholesale),
            "both" => Some(BusinessType::Both),
            _ => None,
        }
    }
}

/// Payment methods a business accepts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    BankTransfer,
    Crypto,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Crypto => "crypto",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cash" => Some(PaymentMethod::Cash),
            "credit_card" => Some(PaymentMethod::CreditCard),
            "bank_transfer" => Some(PaymentMethod::BankTransfer),
            "crypto" => Some(PaymentMethod::Crypto),
            _ => None,
        }
    }
}

/// Requested ordering for business listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Alphabetical,
    Rating,
    Distance,
}

impl SortOrder {
    /// The ordering actually applied.
    ///
    /// Rating and distance data do not exist in this system; requests for
    /// them fall back to creation-time ordering instead of erroring.
    pub fn effective(self) -> SortOrder {
        match self {
            SortOrder::Rating | SortOrder::Distance => SortOrder::Newest,
            other => other,
        }
    }
}

/// Working hours, either free text or a structured per-day schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum WorkingHours {
    Simple(String),
    Detailed(Vec<DayHours>),
}

/// One day's entry in a detailed working-hours schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayHours {
    pub day: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opens: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closes: Option<String>,
    #[serde(default)]
    pub closed: bool,
}

/// Contact information visible only to admins and the owning profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactDetails {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub shop_number: Option<String>,
    pub owner_name: Option<String>,
    pub social_media: Option<BTreeMap<String, String>>,
}

/// Category display metadata joined into a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub name_tr: String,
    pub name_en: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// Location display metadata joined into a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationSummary {
    pub name_tr: String,
    pub name_en: String,
}

/// A business record as returned to presentation layers.
///
/// `contact` is `None` for viewers who may not see contact details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessView {
    pub id: Uuid,
    pub name_tr: String,
    pub name_en: Option<String>,
    pub description_tr: Option<String>,
    pub description_en: Option<String>,
    pub category: Option<CategorySummary>,
    pub location: Option<LocationSummary>,
    pub logo_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub established_year: Option<i32>,
    pub business_type: Option<BusinessType>,
    pub payment_methods: Vec<PaymentMethod>,
    pub languages: Vec<String>,
    pub working_hours: Option<WorkingHours>,
    pub accepts_online_orders: bool,
    pub delivery_available: bool,
    /// Minimum order amount in kurus
    pub min_order_amount: Option<i64>,
    pub status: BusinessStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub contact: Option<ContactDetails>,
}

/// A viewer's resolved authorization state, computed once per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerContext {
    pub is_admin: bool,
    pub owned_business_id: Option<Uuid>,
}

impl ViewerContext {
    /// Anonymous viewer: not admin, owns nothing
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn admin() -> Self {
        Self {
            is_admin: true,
            owned_business_id: None,
        }
    }

    pub fn owner_of(business_id: Uuid) -> Self {
        Self {
            is_admin: false,
            owned_business_id: Some(business_id),
        }
    }

    /// Whether this viewer may see the contact details of `business_id`
    pub fn can_view_contact(&self, business_id: Uuid) -> bool {
        self.is_admin || self.owned_business_id == Some(business_id)
    }
}

impl BusinessView {
    /// Status gating: active records are public, pending/inactive records
    /// are visible only to their owner and admins.
    pub fn visible_to(&self, viewer: &ViewerContext) -> bool {
        self.status == BusinessStatus::Active || viewer.can_view_contact(self.id)
    }

    /// Strip contact details unless the viewer is an admin or owns this
    /// business. Pure and idempotent.
    pub fn redact_for(mut self, viewer: &ViewerContext) -> Self {
        if !viewer.can_view_contact(self.id) {
            self.contact = None;
        }
        self
    }
}

/// Apply [`BusinessView::redact_for`] to every record in a listing
pub fn redact_all(views: Vec<BusinessView>, viewer: &ViewerContext) -> Vec<BusinessView> {
    views.into_iter().map(|v| v.redact_for(viewer)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_hours_accepts_free_text() {
        let json = "\"Pazartesi-Cumartesi 09:00-18:00\"";
        let hours: WorkingHours = serde_json::from_str(json).unwrap();
        assert_eq!(
            hours,
            WorkingHours::Simple("Pazartesi-Cumartesi 09:00-18:00".to_string())
        );
    }

    #[test]
    fn working_hours_accepts_per_day_schedule() {
        let json = r#"[
            {"day": "monday", "opens": "09:00", "closes": "18:00"},
            {"day": "sunday", "closed": true}
        ]"#;
        let hours: WorkingHours = serde_json::from_str(json).unwrap();
        match hours {
            WorkingHours::Detailed(days) => {
                assert_eq!(days.len(), 2);
                assert_eq!(days[0].opens.as_deref(), Some("09:00"));
                assert!(days[1].closed);
            }
            WorkingHours::Simple(_) => panic!("expected detailed schedule"),
        }
    }

    #[test]
    fn redacted_view_serializes_without_contact_fields() {
        let view = sample_view();
        let redacted = view.redact_for(&ViewerContext::anonymous());
        let json = serde_json::to_value(&redacted).unwrap();
        assert!(json.get("phone").is_none());
        assert!(json.get("social_media").is_none());
        assert_eq!(json["name_tr"], "Altın Kuyumcu");
    }

    #[test]
    fn sort_order_falls_back_for_unavailable_data() {
        assert_eq!(SortOrder::Rating.effective(), SortOrder::Newest);
        assert_eq!(SortOrder::Distance.effective(), SortOrder::Newest);
        assert_eq!(SortOrder::Alphabetical.effective(), SortOrder::Alphabetical);
    }

    fn sample_view() -> BusinessView {
        BusinessView {
            id: Uuid::new_v4(),
            name_tr: "Altın Kuyumcu".to_string(),
            name_en: Some("Golden Jeweler".to_string()),
            description_tr: None,
            description_en: None,
            category: None,
            location: None,
            logo_url: None,
            cover_image_url: None,
            established_year: Some(1964),
            business_type: Some(BusinessType::Retail),
            payment_methods: vec![PaymentMethod::Cash],
            languages: vec!["tr".to_string()],
            working_hours: None,
            accepts_online_orders: false,
            delivery_available: false,
            min_order_amount: None,
            status: BusinessStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            contact: Some(ContactDetails {
                phone: Some("+90 212 555 0000".to_string()),
                ..ContactDetails::default()
            }),
        }
    }
}
