//! Draft validation - field-level rules for a pre-parse order draft.
//!
//! Every rule is independent and every violation is reported, so the
//! presentation layer can mark all offending fields in one pass instead of
//! stopping at the first failure. Validation never mutates anything; a draft
//! that fails here is simply rejected before any order is constructed.

use crate::entities::{OrderType, PaymentStatus, Tinae};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A draft order as the presentation layer holds it: all fields raw strings,
/// nothing parsed yet.
///
/// `payment_status` is `Option<String>`: `None` means the form variant does
/// not expose the field at all (the customer-facing form), so its Required
/// check is skipped; `Some("")` means the field is exposed but unfilled.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub name: String,
    pub contact_number: String,
    /// Pickup date as `YYYY-MM-DD` text
    pub date: String,
    pub pickup_time: String,
    pub remarks: String,
    pub amount: String,
    pub payment_status: Option<String>,
    pub partial_payment_amount: String,
    pub tinae: Option<Tinae>,
    pub order_type: Option<OrderType>,
}

/// The draft fields validation can report against. String forms are the
/// camelCase keys the presentation layer uses to attach messages to inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    ContactNumber,
    Date,
    PickupTime,
    Amount,
    PaymentStatus,
    PartialPaymentAmount,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ContactNumber => "contactNumber",
            Self::Date => "date",
            Self::PickupTime => "pickupTime",
            Self::Amount => "amount",
            Self::PaymentStatus => "paymentStatus",
            Self::PartialPaymentAmount => "partialPaymentAmount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validation error taxonomy. Entirely field-level; none of these are
/// fatal and none propagate beyond a single submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory field is empty
    #[error("required")]
    Required,
    /// The field has content but fails its pattern check
    #[error("invalid format")]
    InvalidFormat,
    /// A numeric field is non-numeric or has the wrong sign
    #[error("invalid number")]
    InvalidNumber,
    /// The pickup date precedes today
    #[error("date is in the past")]
    PastDate,
    /// The partial payment is not below the total amount
    #[error("exceeds total")]
    ExceedsTotal,
}

/// Outcome of validating a draft: the set of failing fields, each with its
/// error kind, plus the human-readable message the UI shows for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationReport {
    fn add(&mut self, field: Field, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// True iff no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error kind recorded for a field, if any.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the failing fields and their error kinds.
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    /// Per-field human-readable messages, keyed by the presentation field
    /// name tokens, ready for display next to each input.
    #[must_use]
    pub fn messages(&self) -> BTreeMap<&'static str, &'static str> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str(), message_for(*field, *error)))
            .collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

/// The exact texts the order form shows next to a failing field.
const fn message_for(field: Field, error: ValidationError) -> &'static str {
    match (field, error) {
        (Field::Name, _) => "Customer name is required",
        (Field::ContactNumber, ValidationError::Required) => "Contact number is required",
        (Field::ContactNumber, _) => "Please enter a valid contact number (10-11 digits)",
        (Field::Date, ValidationError::Required) => "Pick-up date is required",
        (Field::Date, ValidationError::PastDate) => "Pick-up date cannot be in the past",
        (Field::Date, _) => "Please enter a valid pick-up date",
        (Field::PickupTime, _) => "Pick-up time is required",
        (Field::Amount, ValidationError::Required) => "Amount is required",
        (Field::Amount, _) => "Amount must be a positive number",
        (Field::PaymentStatus, _) => "Payment status is required",
        (Field::PartialPaymentAmount, ValidationError::Required) => {
            "Partial payment amount is required"
        }
        (Field::PartialPaymentAmount, ValidationError::ExceedsTotal) => {
            "Partial payment must be less than the total amount"
        }
        (Field::PartialPaymentAmount, _) => "Partial payment must be a valid amount",
    }
}

/// Strips every non-digit character from a contact number, per the 10-11
/// digit rule (dashes and spaces in user input are fine).
fn stripped_digits(contact_number: &str) -> String {
    contact_number.chars().filter(char::is_ascii_digit).collect()
}

/// Validates a draft order against today's date, reporting every violation.
///
/// `today` is passed in rather than read from the clock so the day-granularity
/// past-date rule is deterministic for callers and tests alike.
#[must_use]
pub fn validate(draft: &OrderDraft, today: NaiveDate) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.name.trim().is_empty() {
        report.add(Field::Name, ValidationError::Required);
    }

    if draft.contact_number.trim().is_empty() {
        report.add(Field::ContactNumber, ValidationError::Required);
    } else {
        let digits = stripped_digits(&draft.contact_number);
        if digits.len() < 10 || digits.len() > 11 {
            report.add(Field::ContactNumber, ValidationError::InvalidFormat);
        }
    }

    if draft.date.trim().is_empty() {
        report.add(Field::Date, ValidationError::Required);
    } else {
        match draft.date.trim().parse::<NaiveDate>() {
            Ok(date) if date < today => report.add(Field::Date, ValidationError::PastDate),
            Ok(_) => {}
            Err(_) => report.add(Field::Date, ValidationError::InvalidFormat),
        }
    }

    if draft.pickup_time.trim().is_empty() {
        report.add(Field::PickupTime, ValidationError::Required);
    }

    if draft.amount.trim().is_empty() {
        report.add(Field::Amount, ValidationError::Required);
    } else {
        match draft.amount.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => {}
            _ => report.add(Field::Amount, ValidationError::InvalidNumber),
        }
    }

    let mut partially_paid = false;
    if let Some(payment_status) = draft.payment_status.as_deref() {
        if payment_status.trim().is_empty() {
            report.add(Field::PaymentStatus, ValidationError::Required);
        } else {
            partially_paid = payment_status
                .trim()
                .parse::<PaymentStatus>()
                .is_ok_and(|status| status == PaymentStatus::PartiallyPaid);
        }
    }

    // Partial payment is only constrained when the order is Partially Paid
    if partially_paid {
        if draft.partial_payment_amount.trim().is_empty() {
            report.add(Field::PartialPaymentAmount, ValidationError::Required);
        } else {
            match draft.partial_payment_amount.trim().parse::<f64>() {
                Ok(paid) if paid.is_finite() && paid >= 0.0 => {
                    if let Ok(total) = draft.amount.trim().parse::<f64>()
                        && total > 0.0
                        && paid >= total
                    {
                        report.add(Field::PartialPaymentAmount, ValidationError::ExceedsTotal);
                    }
                }
                _ => report.add(Field::PartialPaymentAmount, ValidationError::InvalidNumber),
            }
        }
    }

    report
}
