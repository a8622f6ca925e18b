//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the store gateway
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Key attribute values must be non-empty strings.
    #[error("invalid key: key values must be non-empty strings")]
    InvalidKey,

    /// A put item did not carry the collection's key attribute.
    #[error("item is missing key attribute: {0}")]
    MissingKeyAttribute(String),

    /// A value could not be carried in the attribute representation.
    #[error("unsupported attribute value: {0}")]
    UnsupportedValue(String),

    /// The underlying backend failed.
    #[error("store backend error: {0}")]
    Backend(String),

    /// An internal lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,
}
