//! Contact-visibility and status-gating tests
//!
//! Property-based and unit tests for the redaction rules:
//! - contact details never survive redaction for non-privileged viewers
//! - the owner exemption applies only to the owned business
//! - admins always see everything
//! - non-active records behave as nonexistent for the public

use std::collections::BTreeMap;

use chrono::Utc;
use proptest::prelude::*;
use uuid::Uuid;

use shared::models::{
    redact_all, BusinessStatus, BusinessView, ContactDetails, ViewerContext, WorkingHours,
};

// ============================================================================
// Property Test Strategies
// ============================================================================

fn status_strategy() -> impl Strategy<Value = BusinessStatus> {
    prop_oneof![
        Just(BusinessStatus::Pending),
        Just(BusinessStatus::Active),
        Just(BusinessStatus::Inactive),
    ]
}

fn optional_text(pattern: &'static str) -> impl Strategy<Value = Option<String>> {
    proptest::option::of(pattern.prop_map(String::from))
}

fn contact_strategy() -> impl Strategy<Value = ContactDetails> {
    (
        optional_text("0[0-9]{10}"),
        optional_text("[a-z]{5,10}@[a-z]{3,8}\\.com"),
        optional_text("0[0-9]{10}"),
        optional_text("https://[a-z]{3,12}\\.com"),
        optional_text("[A-Za-z0-9 ]{5,40}"),
        optional_text("[A-Z]?[0-9]{1,3}"),
        optional_text("[A-Za-z ]{3,30}"),
        proptest::option::of(proptest::collection::btree_map(
            "[a-z]{3,10}",
            "[a-z0-9_.]{3,20}",
            0..3,
        )),
    )
        .prop_map(
            |(phone, email, whatsapp, website, address, shop_number, owner_name, social_media)| {
                ContactDetails {
                    phone,
                    email,
                    whatsapp,
                    website,
                    address,
                    shop_number,
                    owner_name,
                    social_media,
                }
            },
        )
}

fn business_strategy() -> impl Strategy<Value = BusinessView> {
    (
        "[A-Za-z ]{3,40}",
        status_strategy(),
        proptest::option::of(contact_strategy()),
    )
        .prop_map(|(name_tr, status, contact)| BusinessView {
            id: Uuid::new_v4(),
            name_tr,
            name_en: None,
            description_tr: None,
            description_en: None,
            category: None,
            location: None,
            logo_url: None,
            cover_image_url: None,
            established_year: Some(1950),
            business_type: None,
            payment_methods: Vec::new(),
            languages: vec!["tr".to_string()],
            working_hours: Some(WorkingHours::Simple("09:00-18:00".to_string())),
            accepts_online_orders: false,
            delivery_available: false,
            min_order_amount: None,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            contact,
        })
}

fn viewer_strategy() -> impl Strategy<Value = ViewerContext> {
    prop_oneof![
        Just(ViewerContext::anonymous()),
        Just(ViewerContext::admin()),
        Just(ViewerContext::owner_of(Uuid::new_v4())),
    ]
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Redaction completeness: after redaction for a non-privileged viewer,
    /// no contact field remains, regardless of which ones were set.
    #[test]
    fn redaction_strips_every_contact_field(business in business_strategy()) {
        let viewer = ViewerContext::anonymous();
        let redacted = business.redact_for(&viewer);
        prop_assert!(redacted.contact.is_none());
    }

    /// Owner exemption: the owner sees contact details of their own
    /// business and nothing else.
    #[test]
    fn owner_sees_only_own_contact(
        own in business_strategy(),
        other in business_strategy(),
    ) {
        let viewer = ViewerContext::owner_of(own.id);
        let own_had_contact = own.contact.is_some();

        let own_redacted = own.redact_for(&viewer);
        let other_redacted = other.redact_for(&viewer);

        prop_assert_eq!(own_redacted.contact.is_some(), own_had_contact);
        prop_assert!(other_redacted.contact.is_none());
    }

    /// Admin exemption: redaction never removes anything for an admin.
    #[test]
    fn admin_view_is_unredacted(business in business_strategy()) {
        let before = business.clone();
        let redacted = business.redact_for(&ViewerContext::admin());
        prop_assert_eq!(redacted, before);
    }

    /// Redaction is idempotent: applying it twice equals applying it once.
    #[test]
    fn redaction_is_idempotent(
        business in business_strategy(),
        viewer in viewer_strategy(),
    ) {
        let once = business.redact_for(&viewer);
        let twice = once.clone().redact_for(&viewer);
        prop_assert_eq!(once, twice);
    }

    /// Redaction never alters non-contact fields.
    #[test]
    fn redaction_preserves_public_fields(
        business in business_strategy(),
        viewer in viewer_strategy(),
    ) {
        let before = business.clone();
        let redacted = business.redact_for(&viewer);
        prop_assert_eq!(redacted.id, before.id);
        prop_assert_eq!(redacted.name_tr, before.name_tr);
        prop_assert_eq!(redacted.status, before.status);
        prop_assert_eq!(redacted.working_hours, before.working_hours);
        prop_assert_eq!(redacted.languages, before.languages);
    }

    /// Status gating: active records are visible to everyone; non-active
    /// records only to admins and their owner.
    #[test]
    fn status_gating(business in business_strategy()) {
        let anonymous = ViewerContext::anonymous();
        let admin = ViewerContext::admin();
        let owner = ViewerContext::owner_of(business.id);
        let other_owner = ViewerContext::owner_of(Uuid::new_v4());

        prop_assert!(business.visible_to(&admin));
        prop_assert!(business.visible_to(&owner));

        let public = business.status == BusinessStatus::Active;
        prop_assert_eq!(business.visible_to(&anonymous), public);
        prop_assert_eq!(business.visible_to(&other_owner), public);
    }

    /// Listing redaction applies the same rule to every record.
    #[test]
    fn listing_redaction_matches_per_record_redaction(
        businesses in proptest::collection::vec(business_strategy(), 0..8),
        viewer in viewer_strategy(),
    ) {
        let expected: Vec<BusinessView> = businesses
            .iter()
            .cloned()
            .map(|b| b.redact_for(&viewer))
            .collect();
        let redacted = redact_all(businesses, &viewer);
        prop_assert_eq!(redacted, expected);
    }
}

// ============================================================================
// Unit Tests: viewer scenarios
// ============================================================================

fn sample_business(status: BusinessStatus) -> BusinessView {
    let mut social = BTreeMap::new();
    social.insert("instagram".to_string(), "kapali_carsi_halici".to_string());

    BusinessView {
        id: Uuid::new_v4(),
        name_tr: "Halıcı Mehmet".to_string(),
        name_en: Some("Mehmet's Carpets".to_string()),
        description_tr: None,
        description_en: None,
        category: None,
        location: None,
        logo_url: None,
        cover_image_url: None,
        established_year: Some(1962),
        business_type: None,
        payment_methods: Vec::new(),
        languages: vec!["tr".to_string(), "en".to_string()],
        working_hours: None,
        accepts_online_orders: false,
        delivery_available: false,
        min_order_amount: None,
        status,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        contact: Some(ContactDetails {
            phone: Some("02125220000".to_string()),
            email: Some("mehmet@example.com".to_string()),
            whatsapp: Some("05321234567".to_string()),
            website: Some("https://example.com".to_string()),
            address: Some("Kapalıçarşı, Halıcılar Caddesi".to_string()),
            shop_number: Some("42".to_string()),
            owner_name: Some("Mehmet Yılmaz".to_string()),
            social_media: Some(social),
        }),
    }
}

#[test]
fn anonymous_viewer_gets_redacted_active_business() {
    let business = sample_business(BusinessStatus::Active);
    let viewer = ViewerContext::anonymous();

    assert!(business.visible_to(&viewer));
    let redacted = business.redact_for(&viewer);
    assert!(redacted.contact.is_none());
    assert_eq!(redacted.name_tr, "Halıcı Mehmet");
}

#[test]
fn signed_in_non_owner_is_treated_like_anonymous() {
    let business = sample_business(BusinessStatus::Active);
    // Signed in, owns a different business
    let viewer = ViewerContext::owner_of(Uuid::new_v4());

    assert!(business.visible_to(&viewer));
    assert!(business.redact_for(&viewer).contact.is_none());
}

#[test]
fn owner_sees_own_pending_business_with_contact() {
    let business = sample_business(BusinessStatus::Pending);
    let viewer = ViewerContext::owner_of(business.id);

    assert!(business.visible_to(&viewer));
    let view = business.redact_for(&viewer);
    assert!(view.contact.is_some());
    assert_eq!(
        view.contact.and_then(|c| c.phone).as_deref(),
        Some("02125220000")
    );
}

#[test]
fn admin_sees_inactive_business_with_contact() {
    let business = sample_business(BusinessStatus::Inactive);
    let viewer = ViewerContext::admin();

    assert!(business.visible_to(&viewer));
    assert!(business.redact_for(&viewer).contact.is_some());
}

#[test]
fn pending_business_is_invisible_to_the_public() {
    let business = sample_business(BusinessStatus::Pending);
    assert!(!business.visible_to(&ViewerContext::anonymous()));
    assert!(!business.visible_to(&ViewerContext::owner_of(Uuid::new_v4())));
}

#[test]
fn redacted_serialization_omits_contact_keys() {
    let business = sample_business(BusinessStatus::Active);
    let redacted = business.redact_for(&ViewerContext::anonymous());

    let json = serde_json::to_value(&redacted).unwrap();
    let obj = json.as_object().unwrap();
    // Flattened contact fields disappear entirely rather than nulling out
    assert!(!obj.contains_key("phone"));
    assert!(!obj.contains_key("email"));
    assert!(!obj.contains_key("whatsapp"));
    assert!(!obj.contains_key("website"));
    assert!(!obj.contains_key("address"));
    assert!(!obj.contains_key("shop_number"));
    assert!(!obj.contains_key("owner_name"));
    assert!(!obj.contains_key("social_media"));
    assert!(obj.contains_key("name_tr"));
    assert!(obj.contains_key("status"));
}

#[test]
fn unredacted_serialization_flattens_contact_fields() {
    let business = sample_business(BusinessStatus::Active);
    let view = business.redact_for(&ViewerContext::admin());

    let json = serde_json::to_value(&view).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj["phone"], "02125220000");
    assert_eq!(obj["shop_number"], "42");
}

#[test]
fn default_viewer_context_is_fully_locked_down() {
    // A resolver failure falls back to the default context, which must
    // behave exactly like an anonymous viewer.
    let fallback = ViewerContext::default();
    assert!(!fallback.is_admin);
    assert!(fallback.owned_business_id.is_none());
    assert!(!fallback.can_view_contact(Uuid::new_v4()));
}
