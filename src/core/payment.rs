//! Payment derivation - computes `balance` and `paymentStatus` from the two
//! source amount fields.
//!
//! This is a pure function of `amount` and `partialPaymentAmount` only. It is
//! meant to be re-run synchronously on every edit to either source field, and
//! it never reads the stored `balance`, so repeated re-derivation cannot feed
//! back into itself.

use crate::entities::PaymentStatus;

/// Result of deriving payment state from the two source amount fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDerivation {
    /// Amount still owed, `max(amount - paid, 0)`, two-decimal formatted
    pub balance: String,
    /// Derived payment status
    pub payment_status: PaymentStatus,
    /// Effective partial payment: clamped to the total when paid >= total,
    /// `None` when nothing has been paid
    pub partial_payment_amount: Option<String>,
}

/// Parses a decimal amount string for derivation purposes.
///
/// Negative, non-finite, and non-numeric inputs are all treated as 0. This is
/// deliberately more forgiving than validation: derivation must always
/// produce a displayable result, while [`crate::core::validate`] reports the
/// bad input separately.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Derives `balance` and `paymentStatus` from the total amount and the
/// partial payment, both as the raw decimal strings the presentation holds.
///
/// - paid = 0 → Not Paid, balance = total
/// - 0 < paid < total → Partially Paid, balance = total - paid
/// - paid >= total → Paid, balance = 0.00, effective partial clamped to total
#[must_use]
pub fn derive_balance_and_status(amount: &str, partial_payment_amount: &str) -> PaymentDerivation {
    let total = parse_amount(amount);
    let paid = parse_amount(partial_payment_amount);

    let balance = (total - paid).max(0.0);

    if paid == 0.0 {
        return PaymentDerivation {
            balance: format!("{balance:.2}"),
            payment_status: PaymentStatus::NotPaid,
            partial_payment_amount: None,
        };
    }

    if paid >= total {
        return PaymentDerivation {
            balance: "0.00".to_string(),
            payment_status: PaymentStatus::Paid,
            partial_payment_amount: Some(format!("{total:.2}")),
        };
    }

    PaymentDerivation {
        balance: format!("{balance:.2}"),
        payment_status: PaymentStatus::PartiallyPaid,
        partial_payment_amount: Some(format!("{paid:.2}")),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("5000"), 5000.0);
        assert_eq!(parse_amount("1234.56"), 1234.56);
        assert_eq!(parse_amount("  42 "), 42.0);
    }

    #[test]
    fn test_parse_amount_invalid_treated_as_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-100"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_no_payment_is_not_paid() {
        let d = derive_balance_and_status("5000", "");
        assert_eq!(d.payment_status, PaymentStatus::NotPaid);
        assert_eq!(d.balance, "5000.00");
        assert_eq!(d.partial_payment_amount, None);
    }

    #[test]
    fn test_zero_payment_is_not_paid() {
        let d = derive_balance_and_status("5000", "0");
        assert_eq!(d.payment_status, PaymentStatus::NotPaid);
        assert_eq!(d.balance, "5000.00");
    }

    #[test]
    fn test_partial_payment() {
        let d = derive_balance_and_status("5000", "1500");
        assert_eq!(d.payment_status, PaymentStatus::PartiallyPaid);
        assert_eq!(d.balance, "3500.00");
        assert_eq!(d.partial_payment_amount, Some("1500.00".to_string()));
    }

    #[test]
    fn test_exact_payment_is_paid() {
        let d = derive_balance_and_status("5000", "5000");
        assert_eq!(d.payment_status, PaymentStatus::Paid);
        assert_eq!(d.balance, "0.00");
        assert_eq!(d.partial_payment_amount, Some("5000.00".to_string()));
    }

    #[test]
    fn test_overpayment_is_clamped() {
        let d = derive_balance_and_status("5000", "6000");
        assert_eq!(d.payment_status, PaymentStatus::Paid);
        assert_eq!(d.balance, "0.00");
        // Effective partial payment is clamped to the total
        assert_eq!(d.partial_payment_amount, Some("5000.00".to_string()));
    }

    #[test]
    fn test_two_decimal_rounding() {
        let d = derive_balance_and_status("100.555", "0.055");
        assert_eq!(d.payment_status, PaymentStatus::PartiallyPaid);
        assert_eq!(d.balance, "100.50");
    }

    #[test]
    fn test_negative_partial_treated_as_zero() {
        let d = derive_balance_and_status("5000", "-100");
        assert_eq!(d.payment_status, PaymentStatus::NotPaid);
        assert_eq!(d.balance, "5000.00");
    }

    #[test]
    fn test_non_numeric_inputs_treated_as_zero() {
        let d = derive_balance_and_status("abc", "xyz");
        assert_eq!(d.payment_status, PaymentStatus::NotPaid);
        assert_eq!(d.balance, "0.00");
    }

    #[test]
    fn test_rederivation_is_stable() {
        // Deriving again from the same source fields gives the same result;
        // the derived balance is never an input.
        let first = derive_balance_and_status("5000", "1500");
        let second = derive_balance_and_status("5000", "1500");
        assert_eq!(first, second);
    }
}
