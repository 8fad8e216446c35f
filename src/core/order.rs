//! Order creation - turns a validated draft into a persisted-shape record.

use crate::core::payment::derive_balance_and_status;
use crate::core::validate::{OrderDraft, validate};
use crate::entities::{Order, PickupStatus};
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Creates a new order from a draft.
///
/// The draft is validated against `now`'s calendar day; an invalid draft is
/// rejected with the full [`crate::core::validate::ValidationReport`]. A
/// fresh order always gets a unique id, `created_at = now`, and
/// `status = Cook` regardless of anything in the draft. Payment fields come
/// from [`derive_balance_and_status`], which is authoritative over any
/// payment-status text the draft carries.
///
/// # Errors
/// Returns [`Error::InvalidDraft`] when any validation rule fails.
pub fn create_order(draft: &OrderDraft, now: DateTime<Utc>) -> Result<Order> {
    let report = validate(draft, now.date_naive());
    if !report.is_valid() {
        return Err(Error::InvalidDraft { report });
    }

    // Validation guarantees the date parses
    let date = draft
        .date
        .trim()
        .parse()
        .map_err(|_| Error::InvalidDraft { report })?;

    let derivation = derive_balance_and_status(&draft.amount, &draft.partial_payment_amount);

    Ok(Order {
        id: Uuid::new_v4().to_string(),
        name: draft.name.trim().to_string(),
        contact_number: draft.contact_number.trim().to_string(),
        date,
        pickup_time: draft.pickup_time.trim().to_string(),
        remarks: draft.remarks.clone(),
        amount: draft.amount.trim().to_string(),
        partial_payment_amount: derivation.partial_payment_amount,
        balance: derivation.balance,
        payment_status: derivation.payment_status,
        status: PickupStatus::Cook,
        tinae: draft.tinae,
        order_type: draft.order_type,
        created_at: now,
    })
}

/// Resolves read-time defaults on a record loaded from storage.
///
/// Records written before payment tracking existed have no stored `balance`;
/// it is re-derived here from the two source amount fields. A stored
/// `payment_status` is never overridden - it is independently editable, so
/// whatever was stored is the truth.
#[must_use]
pub fn normalized(mut order: Order) -> Order {
    if order.balance.is_empty() {
        let derivation = derive_balance_and_status(
            &order.amount,
            order.partial_payment_amount.as_deref().unwrap_or(""),
        );
        order.balance = derivation.balance;
    }
    order
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::PaymentStatus;
    use crate::test_utils::{sample_order, test_now, valid_draft};

    #[test]
    fn test_create_order_sets_status_to_cook() {
        let order = create_order(&valid_draft(), test_now()).unwrap();
        assert_eq!(order.status, PickupStatus::Cook);
        assert_eq!(order.created_at, test_now());
    }

    #[test]
    fn test_create_order_assigns_unique_ids() {
        let a = create_order(&valid_draft(), test_now()).unwrap();
        let b = create_order(&valid_draft(), test_now()).unwrap();
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn test_create_order_rejects_invalid_draft() {
        let draft = OrderDraft::default();
        let err = create_order(&draft, test_now()).unwrap_err();
        match err {
            Error::InvalidDraft { report } => assert!(!report.is_valid()),
            other => panic!("expected InvalidDraft, got {other}"),
        }
    }

    #[test]
    fn test_create_order_derives_payment_fields() {
        let mut draft = valid_draft();
        draft.amount = "5000".to_string();
        draft.payment_status = Some("Partially Paid".to_string());
        draft.partial_payment_amount = "1500".to_string();

        let order = create_order(&draft, test_now()).unwrap();
        assert_eq!(order.payment_status, PaymentStatus::PartiallyPaid);
        assert_eq!(order.balance, "3500.00");
        assert_eq!(order.partial_payment_amount, Some("1500.00".to_string()));
    }

    #[test]
    fn test_derivation_is_authoritative_over_draft_status() {
        // A draft claiming "Paid" with nothing actually paid creates a
        // Not Paid order, same as the live re-derivation would display.
        let mut draft = valid_draft();
        draft.amount = "5000".to_string();
        draft.payment_status = Some("Paid".to_string());
        draft.partial_payment_amount = String::new();

        let order = create_order(&draft, test_now()).unwrap();
        assert_eq!(order.payment_status, PaymentStatus::NotPaid);
        assert_eq!(order.balance, "5000.00");
        assert_eq!(order.partial_payment_amount, None);
    }

    #[test]
    fn test_create_order_trims_text_fields() {
        let mut draft = valid_draft();
        draft.name = "  Maria Santos  ".to_string();
        draft.contact_number = " 09171234567 ".to_string();

        let order = create_order(&draft, test_now()).unwrap();
        assert_eq!(order.name, "Maria Santos");
        assert_eq!(order.contact_number, "09171234567");
    }

    #[test]
    fn test_normalized_rederives_missing_balance() {
        let mut order = sample_order("o1");
        order.amount = "5000".to_string();
        order.partial_payment_amount = Some("1500".to_string());
        order.balance = String::new();

        let order = normalized(order);
        assert_eq!(order.balance, "3500.00");
    }

    #[test]
    fn test_normalized_keeps_stored_payment_status() {
        // Staff may have edited the status independently; read-time
        // normalization must not second-guess it.
        let mut order = sample_order("o1");
        order.amount = "5000".to_string();
        order.partial_payment_amount = None;
        order.balance = String::new();
        order.payment_status = PaymentStatus::Paid;

        let order = normalized(order);
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert_eq!(order.balance, "5000.00");
    }

    #[test]
    fn test_normalized_leaves_existing_balance_alone() {
        let mut order = sample_order("o1");
        order.balance = "123.00".to_string();
        let order = normalized(order);
        assert_eq!(order.balance, "123.00");
    }
}
