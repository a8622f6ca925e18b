//! User resource error types
//!
//! Every failure the resource layer can produce, surfaced as a message at
//! the gateway boundary. Store failures are folded into the operation that
//! observed them; this layer does not distinguish "not found" from a failed
//! read.

use thiserror::Error;

/// Result type for user resource operations
pub type UserResult<T> = Result<T, UserError>;

/// Failures produced by the user resource layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    /// Inbound payload was not a well-formed user record.
    #[error("invalid user payload")]
    InvalidPayload,

    /// Payload email fails the format policy.
    #[error("invalid email address")]
    InvalidEmail,

    /// Create target already has a record.
    #[error("user already exists")]
    AlreadyExists,

    /// Update target is absent, or the submitted email was empty.
    #[error("user does not exist")]
    DoesNotExist,

    /// The underlying read failed or found nothing.
    #[error("failed to fetch record")]
    FetchFailed,

    /// A stored item could not be decoded into a record.
    #[error("failed to decode record")]
    DecodeFailed,

    /// A record could not be encoded for the store.
    #[error("failed to encode record")]
    EncodeFailed,

    /// The underlying write failed.
    #[error("failed to write record")]
    WriteFailed,

    /// The underlying delete failed.
    #[error("failed to delete record")]
    DeleteFailed,
}
