//! `LechonOrders` - order-taking and order-management core for a single
//! food vendor.
//!
//! This crate provides the order entity with its validation and
//! payment-derivation rules, the filter/sort/summary query engine behind the
//! admin dashboard, shared display formatting, and a persistent store that
//! mirrors the in-memory order collection to a single JSON document. The
//! presentation layer (forms, lists, confirmation prompts) lives elsewhere
//! and talks to this crate through plain data.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Store-document location resolution
pub mod config;
/// Core business logic - validation, payment derivation, creation, querying,
/// and formatting over plain data
pub mod core;
/// The persisted order record and its enums
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// The in-memory order collection and its storage mirror
pub mod store;

#[cfg(test)]
pub mod test_utils;
