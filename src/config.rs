//! Configuration - resolves where the order store document lives.

use std::path::PathBuf;

/// Environment variable overriding the store document location.
pub const STORAGE_PATH_VAR: &str = "LECHON_ORDERS_PATH";

const DEFAULT_STORAGE_PATH: &str = "data/lechon_orders.json";

/// Returns the order store document path from `LECHON_ORDERS_PATH`, falling
/// back to a local default when the variable is unset.
#[must_use]
pub fn storage_path() -> PathBuf {
    std::env::var(STORAGE_PATH_VAR)
        .map_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_path() {
        // Scoped read: the variable is not set in the test environment
        if std::env::var(STORAGE_PATH_VAR).is_err() {
            assert_eq!(storage_path(), PathBuf::from(DEFAULT_STORAGE_PATH));
        }
    }
}
