//! Order query engine - the filtered, sorted view the admin dashboard shows,
//! plus its summary counts.
//!
//! All functions are pure over a borrowed collection; nothing here touches
//! storage. Filtering is a logical AND of whichever conditions are set, and
//! the result is always ordered most-recently-placed first.

use crate::entities::{Order, PaymentStatus, PickupStatus};
use chrono::{Datelike, NaiveDate};

/// Filter selections from the admin dashboard. Every field is optional;
/// `None` is the presentation's "all" and disables that condition.
///
/// When `day` is set it takes precedence: the month/year conditions are only
/// evaluated in its absence. A `month` without a `year` is ignored, since a
/// month spanning all years is not a meaningful reporting period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// Exact pickup-date match
    pub day: Option<NaiveDate>,
    /// Pickup-date month component (1-12), only meaningful with `year`
    pub month: Option<u32>,
    /// Pickup-date year component
    pub year: Option<i32>,
    /// Exact pickup-status match
    pub status: Option<PickupStatus>,
    /// Exact payment-status match
    pub payment_status: Option<PaymentStatus>,
}

impl OrderFilter {
    /// True when the order satisfies every condition this filter sets.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(day) = self.day {
            if order.date != day {
                return false;
            }
        } else {
            match (self.month, self.year) {
                (Some(month), Some(year)) => {
                    if order.date.month() != month || order.date.year() != year {
                        return false;
                    }
                }
                (None, Some(year)) => {
                    if order.date.year() != year {
                        return false;
                    }
                }
                // A month alone is not a usable period
                (Some(_) | None, None) => {}
            }
        }

        if let Some(status) = self.status
            && order.status != status
        {
            return false;
        }

        if let Some(payment_status) = self.payment_status
            && order.payment_status != payment_status
        {
            return false;
        }

        true
    }
}

/// Summary counts over a (typically already-filtered) order collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderSummary {
    /// Size of the collection
    pub total: usize,
    /// Orders still being prepared
    pub cooking: usize,
    /// Orders already collected
    pub picked_up: usize,
}

/// Applies the filter and returns the matching orders, most recently placed
/// first. The sort is stable, so orders sharing a `created_at` keep their
/// insertion order. Idempotent: filtering a result again with the same filter
/// returns the same sequence.
#[must_use]
pub fn apply_filters(orders: &[Order], filter: &OrderFilter) -> Vec<Order> {
    let mut filtered: Vec<Order> = orders
        .iter()
        .filter(|order| filter.matches(order))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    filtered
}

/// Counts the collection by pickup status. Run this over the already-filtered
/// view so the summary reflects what the dashboard currently shows.
#[must_use]
pub fn summarize(orders: &[Order]) -> OrderSummary {
    OrderSummary {
        total: orders.len(),
        cooking: orders
            .iter()
            .filter(|order| order.status == PickupStatus::Cook)
            .count(),
        picked_up: orders
            .iter()
            .filter(|order| order.status == PickupStatus::PickedUpAlready)
            .count(),
    }
}
