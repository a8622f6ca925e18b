//! Key-Value Store Gateway
//!
//! The store holds the durable copy of every record. The rest of the
//! service consumes it through the [`StoreClient`] capability set against a
//! named collection:
//!
//! - get-item-by-key
//! - scan-all-items
//! - put-item
//! - delete-item-by-key
//!
//! The handle is constructed once at process start and injected where it is
//! needed; no part of the service reaches for a global client.
//!
//! Records cross this boundary as [`AttributeMap`]s, the store-native typed
//! representation, never as raw JSON.

mod attributes;
mod errors;
mod memory;

pub use attributes::{map_from_json, map_into_json, AttributeMap, AttributeValue};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

/// Abstract capability set consumed by the resource layer.
///
/// Implementations must be shareable across invocations; the service holds
/// one handle for its whole lifetime.
pub trait StoreClient: Send + Sync {
    /// Look up a single item by its key value.
    ///
    /// Returns `Ok(None)` when no item carries that key. Key values must be
    /// non-empty.
    fn get_item(&self, collection: &str, key: &str) -> StoreResult<Option<AttributeMap>>;

    /// Return every item in the collection.
    fn scan(&self, collection: &str) -> StoreResult<Vec<AttributeMap>>;

    /// Write an item, replacing any existing item with the same key.
    fn put_item(&self, collection: &str, item: AttributeMap) -> StoreResult<()>;

    /// Remove the item with the given key value, if present.
    fn delete_item(&self, collection: &str, key: &str) -> StoreResult<()>;
}
