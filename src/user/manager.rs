//! User resource manager
//!
//! The CRUD operation set, with the existence-check policy applied before
//! every mutation. The store handle is injected at construction and shared
//! for the life of the process.
//!
//! Existence is probed with a plain read; creates and updates then write
//! unconditionally. Two concurrent creates for the same key can both pass
//! the probe and both write, last writer wins. That window is inherent to
//! the probe-then-put sequence and is accepted here.

use std::sync::Arc;

use tracing::debug;

use crate::store::StoreClient;

use super::errors::{UserError, UserResult};
use super::record::User;
use super::validate::is_valid_email;

/// Owner and sole mutator of user record state.
pub struct UserManager {
    store: Arc<dyn StoreClient>,
    collection: String,
}

impl UserManager {
    /// Create a manager over the given store and collection.
    pub fn new(store: Arc<dyn StoreClient>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Look up a single record by its exact key.
    ///
    /// An absent key and a failed read surface identically; callers cannot
    /// tell "not found" from a store error at this layer.
    pub fn fetch_one(&self, email: &str) -> UserResult<User> {
        let item = self
            .store
            .get_item(&self.collection, email)
            .map_err(|_| UserError::FetchFailed)?
            .ok_or(UserError::FetchFailed)?;
        User::from_attributes(item).map_err(|_| UserError::FetchFailed)
    }

    /// Return every record in the collection.
    pub fn fetch_all(&self) -> UserResult<Vec<User>> {
        let items = self
            .store
            .scan(&self.collection)
            .map_err(|_| UserError::FetchFailed)?;
        User::from_attributes_list(items)
    }

    /// Create a record from a wire payload.
    ///
    /// Rejected when a record with the submitted email already holds a
    /// non-empty key; a failed existence probe falls through to the write.
    pub fn create(&self, payload: &str) -> UserResult<User> {
        let candidate = User::decode(payload)?;
        if !is_valid_email(&candidate.email) {
            return Err(UserError::InvalidEmail);
        }

        if let Ok(current) = self.fetch_one(&candidate.email) {
            if !current.email.is_empty() {
                debug!(email = %candidate.email, "create rejected, record exists");
                return Err(UserError::AlreadyExists);
            }
        }

        let item = candidate.to_attributes()?;
        self.store
            .put_item(&self.collection, item)
            .map_err(|_| UserError::WriteFailed)?;
        Ok(candidate)
    }

    /// Replace the record named by the payload's email.
    ///
    /// The whole record is overwritten; fields absent from the payload are
    /// cleared, not merged. An empty submitted email can never name a
    /// record and fails outright, without consulting the store. An update
    /// for a genuinely absent record is NOT rejected: the probe's failure
    /// is ignored and the write goes through as an overwrite/create.
    pub fn update(&self, payload: &str) -> UserResult<User> {
        let candidate = User::decode(payload)?;
        if candidate.email.is_empty() {
            return Err(UserError::DoesNotExist);
        }

        if self.fetch_one(&candidate.email).is_err() {
            debug!(email = %candidate.email, "update target absent, writing anyway");
        }

        let item = candidate.to_attributes()?;
        self.store
            .put_item(&self.collection, item)
            .map_err(|_| UserError::WriteFailed)?;
        Ok(candidate)
    }

    /// Remove the record with the given key.
    ///
    /// Deleting an absent key succeeds; from the caller's perspective the
    /// operation is idempotent.
    pub fn delete(&self, email: &str) -> UserResult<()> {
        self.store
            .delete_item(&self.collection, email)
            .map_err(|_| UserError::DeleteFailed)
    }
}
