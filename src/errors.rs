//! Unified error types and the crate-wide `Result` alias.

use crate::core::validate::ValidationReport;
use thiserror::Error;

/// All failure modes the crate surfaces to callers.
///
/// Field-level validation problems are data (a [`ValidationReport`]), not
/// errors; they only become an `Error` when a caller tries to create an order
/// from a draft that failed validation.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad or unresolvable configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The storage collaborator failed to persist the collection. Non-fatal:
    /// the in-memory mutation has already been applied and stands.
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Filesystem failure from the file-backed storage
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An update or delete referenced an id the collection does not hold
    #[error("Order not found: {id}")]
    OrderNotFound { id: String },

    /// A create was attempted with a draft that failed validation
    #[error("Order draft failed validation: {report}")]
    InvalidDraft { report: ValidationReport },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
