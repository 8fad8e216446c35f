//! Entity module - the persisted record shapes of the order system.
//! Field names and enum strings here are the stored document format and
//! must stay compatible with collections written by earlier versions.

pub mod order;

// Re-export the commonly used types
pub use order::{Order, OrderType, PaymentStatus, PickupStatus, Tinae};
