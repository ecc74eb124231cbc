//! Listing rules tests
//!
//! Sort-order fallback, status parsing, and the JSON shapes the listing
//! endpoints produce and accept.

use proptest::prelude::*;

use shared::models::{BusinessStatus, BusinessType, DayHours, PaymentMethod, SortOrder, WorkingHours};
use shared::types::{PaginatedResponse, Pagination};

// ============================================================================
// Property-Based Tests
// ============================================================================

fn sort_strategy() -> impl Strategy<Value = SortOrder> {
    prop_oneof![
        Just(SortOrder::Newest),
        Just(SortOrder::Alphabetical),
        Just(SortOrder::Rating),
        Just(SortOrder::Distance),
    ]
}

proptest! {
    /// Every requested ordering resolves to one the system can serve,
    /// and resolution is stable.
    #[test]
    fn sort_fallback_is_stable(sort in sort_strategy()) {
        let effective = sort.effective();
        prop_assert!(matches!(
            effective,
            SortOrder::Newest | SortOrder::Alphabetical
        ));
        prop_assert_eq!(effective.effective(), effective);
    }

    /// Status round-trips through its storage representation.
    #[test]
    fn status_storage_round_trip(status in prop_oneof![
        Just(BusinessStatus::Pending),
        Just(BusinessStatus::Active),
        Just(BusinessStatus::Inactive),
    ]) {
        prop_assert_eq!(BusinessStatus::parse(status.as_str()), Some(status));
    }

    /// Pagination offset/limit never go negative and line up with the page.
    #[test]
    fn pagination_window_is_consistent(page in 0u32..1000, per_page in 1u32..100) {
        let p = Pagination { page, per_page };
        prop_assert!(p.offset() >= 0);
        prop_assert_eq!(p.limit(), i64::from(per_page));
        if page > 0 {
            prop_assert_eq!(p.offset(), i64::from(page - 1) * i64::from(per_page));
        }
    }
}

// ============================================================================
// Unit Tests: enum parsing
// ============================================================================

#[test]
fn unknown_status_is_rejected() {
    assert_eq!(BusinessStatus::parse("approved"), None);
    assert_eq!(BusinessStatus::parse(""), None);
    assert_eq!(BusinessStatus::parse("ACTIVE"), None);
}

#[test]
fn unsupported_sorts_fall_back_to_newest() {
    assert_eq!(SortOrder::Rating.effective(), SortOrder::Newest);
    assert_eq!(SortOrder::Distance.effective(), SortOrder::Newest);
    assert_eq!(SortOrder::Alphabetical.effective(), SortOrder::Alphabetical);
    assert_eq!(SortOrder::default(), SortOrder::Newest);
}

#[test]
fn sort_order_deserializes_from_query_values() {
    assert_eq!(
        serde_json::from_str::<SortOrder>("\"alphabetical\"").unwrap(),
        SortOrder::Alphabetical
    );
    assert_eq!(
        serde_json::from_str::<SortOrder>("\"rating\"").unwrap(),
        SortOrder::Rating
    );
}

#[test]
fn business_type_and_payment_methods_parse_storage_values() {
    assert_eq!(BusinessType::parse("retail"), Some(BusinessType::Retail));
    assert_eq!(BusinessType::parse("storefront"), None);
    assert_eq!(
        PaymentMethod::parse("credit_card"),
        Some(PaymentMethod::CreditCard)
    );
    assert_eq!(PaymentMethod::parse("cheque"), None);
}

// ============================================================================
// Unit Tests: working hours JSON shapes
// ============================================================================

#[test]
fn working_hours_accepts_legacy_free_text() {
    let hours: WorkingHours =
        serde_json::from_str("\"Her gün 09:00-19:00\"").unwrap();
    assert_eq!(hours, WorkingHours::Simple("Her gün 09:00-19:00".to_string()));
}

#[test]
fn working_hours_accepts_structured_schedule() {
    let json = r#"[
        {"day": "monday", "opens": "09:00", "closes": "18:00"},
        {"day": "sunday", "closed": true}
    ]"#;
    let hours: WorkingHours = serde_json::from_str(json).unwrap();

    let WorkingHours::Detailed(days) = hours else {
        panic!("expected a structured schedule");
    };
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].opens.as_deref(), Some("09:00"));
    assert!(!days[0].closed);
    assert!(days[1].closed);
    assert!(days[1].opens.is_none());
}

#[test]
fn closed_day_serializes_without_times() {
    let day = DayHours {
        day: "sunday".to_string(),
        opens: None,
        closes: None,
        closed: true,
    };
    let json = serde_json::to_value(&day).unwrap();
    let obj = json.as_object().unwrap();
    assert!(!obj.contains_key("opens"));
    assert!(!obj.contains_key("closes"));
    assert_eq!(obj["closed"], true);
}

// ============================================================================
// Unit Tests: pagination envelope
// ============================================================================

#[test]
fn paginated_response_carries_request_window() {
    let pagination = Pagination { page: 2, per_page: 10 };
    let response = PaginatedResponse::new(vec![1, 2, 3], 23, &pagination);

    assert_eq!(response.data, vec![1, 2, 3]);
    assert_eq!(response.pagination.page, 2);
    assert_eq!(response.pagination.per_page, 10);
    assert_eq!(response.pagination.total, 23);
}
