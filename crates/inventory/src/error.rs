//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory crate.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Both variants are programmer/configuration errors surfaced immediately to
/// the caller; nothing here is transient or retried internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A stock adjustment was malformed (e.g. negative delta). State is left
    /// untouched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A reorder was triggered for a product with no assigned supplier. The
    /// whole evaluation call is aborted; no directives are returned.
    #[error("no supplier assigned for product: {0}")]
    MissingSupplier(String),
}

impl InventoryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn missing_supplier(product: impl Into<String>) -> Self {
        Self::MissingSupplier(product.into())
    }
}
