//! User Resource Layer
//!
//! The sole entity managed by the service: a user record keyed by email
//! address. This module owns:
//!
//! - the record shape and its wire/store codecs ([`User`])
//! - the email format policy ([`is_valid_email`])
//! - the CRUD operation set with its existence-check policy ([`UserManager`])
//!
//! The manager is the only mutator of record state; the store holds the
//! durable copy, and every `User` value handed out is a disposable snapshot.

mod errors;
mod manager;
mod record;
mod validate;

pub use errors::{UserError, UserResult};
pub use manager::UserManager;
pub use record::{User, KEY_ATTRIBUTE};
pub use validate::is_valid_email;
