//! Shared test utilities.
//!
//! Common fixtures for drafts, orders, and clock values so individual tests
//! only spell out the fields they care about.

use crate::core::validate::OrderDraft;
use crate::entities::{Order, PaymentStatus, PickupStatus};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Fixed "today" used by validation tests.
#[must_use]
pub fn test_today() -> NaiveDate {
    test_now().date_naive()
}

/// Fixed creation clock used wherever a timestamp is needed.
#[must_use]
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
}

/// A draft that passes every validation rule.
///
/// # Defaults
/// * pickup a week out from [`test_today`]
/// * `amount`: "5000", nothing paid yet
/// * payment status exposed and set to "Not Paid"
#[must_use]
pub fn valid_draft() -> OrderDraft {
    OrderDraft {
        name: "Maria Santos".to_string(),
        contact_number: "09171234567".to_string(),
        date: (test_today() + chrono::Days::new(7)).to_string(),
        pickup_time: "11:30".to_string(),
        remarks: "Extra sauce".to_string(),
        amount: "5000".to_string(),
        payment_status: Some("Not Paid".to_string()),
        partial_payment_amount: String::new(),
        tinae: None,
        order_type: None,
    }
}

/// A fully-populated order with the given id and sensible defaults. Tests
/// override the fields under scrutiny.
#[must_use]
pub fn sample_order(id: &str) -> Order {
    Order {
        id: id.to_string(),
        name: "Maria Santos".to_string(),
        contact_number: "09171234567".to_string(),
        date: test_today(),
        pickup_time: "11:30".to_string(),
        remarks: String::new(),
        amount: "5000".to_string(),
        partial_payment_amount: None,
        balance: "5000.00".to_string(),
        payment_status: PaymentStatus::NotPaid,
        status: PickupStatus::Cook,
        tinae: None,
        order_type: None,
        created_at: test_now(),
    }
}
