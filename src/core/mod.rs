//! Core business logic - framework-agnostic order validation, payment
//! derivation, creation, querying, and display formatting. Everything here is
//! a pure, synchronous function over plain data; persistence lives in
//! [`crate::store`].

/// Shared display formatting helpers
pub mod format;
/// Order creation and read-time normalization
pub mod order;
/// Balance and payment-status derivation
pub mod payment;
/// Filtered/sorted views and summary counts for the admin dashboard
pub mod query;
/// Field-level draft validation
pub mod validate;
