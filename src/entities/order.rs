//! Order entity - the single persisted record of the pickup-order system.
//!
//! Field names and enum string forms are part of the stored document format
//! and match the camelCase documents written by every earlier version of the
//! application, so old collections keep loading as the schema grows. Fields
//! added after the first release all carry serde defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cooking/pickup state of an order.
///
/// Two states only: every order starts at `Cook` and is moved to
/// `PickedUpAlready` by a staff edit. The reverse edit is deliberately not
/// guarded, so staff can undo a mistaken pickup mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupStatus {
    /// Order is still being prepared
    #[default]
    Cook,
    /// Order has been collected by the customer
    #[serde(rename = "Pick-up Already")]
    PickedUpAlready,
}

impl fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cook => write!(f, "Cook"),
            Self::PickedUpAlready => write!(f, "Pick-up Already"),
        }
    }
}

impl FromStr for PickupStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cook" => Ok(Self::Cook),
            "Pick-up Already" => Ok(Self::PickedUpAlready),
            other => Err(format!("unknown pickup status: {other}")),
        }
    }
}

/// Payment state of an order.
///
/// Derived from `amount` vs `partialPaymentAmount` at creation time
/// (see [`crate::core::payment`]), but independently editable afterwards.
/// Records written before payment tracking existed default to `NotPaid`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Nothing paid yet
    #[default]
    #[serde(rename = "Not Paid")]
    NotPaid,
    /// Some, but not all, of the amount has been paid
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
    /// Fully settled
    Paid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPaid => write!(f, "Not Paid"),
            Self::PartiallyPaid => write!(f, "Partially Paid"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Paid" => Ok(Self::NotPaid),
            "Partially Paid" => Ok(Self::PartiallyPaid),
            "Paid" => Ok(Self::Paid),
            other => Err(format!("unknown payment status: {other}")),
        }
    }
}

/// Dish-variant tag. Absent on records written before the tag existed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tinae {
    Paklay,
    Sampayna,
    Kwaon,
}

impl fmt::Display for Tinae {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paklay => write!(f, "Paklay"),
            Self::Sampayna => write!(f, "Sampayna"),
            Self::Kwaon => write!(f, "Kwaon"),
        }
    }
}

impl FromStr for Tinae {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paklay" => Ok(Self::Paklay),
            "Sampayna" => Ok(Self::Sampayna),
            "Kwaon" => Ok(Self::Kwaon),
            other => Err(format!("unknown tinae: {other}")),
        }
    }
}

/// Optional order classification. Not consumed by any derivation or query
/// logic; carried for display and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Order,
    Labor,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order => write!(f, "Order"),
            Self::Labor => write!(f, "Labor"),
        }
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Order" => Ok(Self::Order),
            "Labor" => Ok(Self::Labor),
            other => Err(format!("unknown order type: {other}")),
        }
    }
}

/// A single customer pickup order.
///
/// Money fields (`amount`, `partial_payment_amount`, `balance`) are decimal
/// strings, exactly as the presentation layer supplies and displays them.
/// `balance` is derived state: `max(amount - partial, 0)`, two-decimal
/// formatted, recomputed from the two source fields only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Opaque unique identifier, assigned at creation, never reused
    pub id: String,
    /// Customer name
    pub name: String,
    /// Customer contact number, 10-11 digits once non-digits are stripped
    #[serde(default)]
    pub contact_number: String,
    /// Requested pickup date
    pub date: chrono::NaiveDate,
    /// Requested pickup time, `HH:MM` wall-clock text
    pub pickup_time: String,
    /// Free-form customer remarks
    #[serde(default)]
    pub remarks: String,
    /// Total amount due, e.g. "5000"
    #[serde(default)]
    pub amount: String,
    /// Amount already paid, present once a partial payment is recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_payment_amount: Option<String>,
    /// Amount still owed, e.g. "3500.00"; derived, two-decimal formatted
    #[serde(default)]
    pub balance: String,
    /// Payment state; defaults to Not Paid on records predating payments
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// Cooking/pickup state
    #[serde(default)]
    pub status: PickupStatus,
    /// Dish-variant tag, absent on older records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tinae: Option<Tinae>,
    /// Optional classification, absent on older records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// Creation timestamp, immutable
    pub created_at: chrono::DateTime<chrono::Utc>,
}
