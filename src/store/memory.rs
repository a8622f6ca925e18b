//! In-process store implementation
//!
//! Backs the bundled server and the test suite. Collections are created on
//! first write; reads against an untouched collection behave as empty. Items
//! within a collection are held in key order, so scans are deterministic.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use super::attributes::{AttributeMap, AttributeValue};
use super::errors::{StoreError, StoreResult};
use super::StoreClient;

/// In-memory key-value store keyed by a single string attribute.
pub struct MemoryStore {
    key_attribute: String,
    collections: RwLock<HashMap<String, BTreeMap<String, AttributeMap>>>,
}

impl MemoryStore {
    /// Create a store whose items are keyed by the given attribute.
    pub fn new(key_attribute: impl Into<String>) -> Self {
        Self {
            key_attribute: key_attribute.into(),
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Extract the key value from an item about to be written.
    fn key_of(&self, item: &AttributeMap) -> StoreResult<String> {
        match item.get(&self.key_attribute) {
            Some(AttributeValue::S(key)) if !key.is_empty() => Ok(key.clone()),
            Some(AttributeValue::S(_)) => Err(StoreError::InvalidKey),
            _ => Err(StoreError::MissingKeyAttribute(self.key_attribute.clone())),
        }
    }
}

impl StoreClient for MemoryStore {
    fn get_item(&self, collection: &str, key: &str) -> StoreResult<Option<AttributeMap>> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey);
        }
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(collections
            .get(collection)
            .and_then(|items| items.get(key))
            .cloned())
    }

    fn scan(&self, collection: &str) -> StoreResult<Vec<AttributeMap>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(collections
            .get(collection)
            .map(|items| items.values().cloned().collect())
            .unwrap_or_default())
    }

    fn put_item(&self, collection: &str, item: AttributeMap) -> StoreResult<()> {
        let key = self.key_of(&item)?;
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key, item);
        Ok(())
    }

    fn delete_item(&self, collection: &str, key: &str) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey);
        }
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        if let Some(items) = collections.get_mut(collection) {
            items.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(email: &str, name: &str) -> AttributeMap {
        let mut map = AttributeMap::new();
        map.insert("email".to_string(), AttributeValue::S(email.to_string()));
        map.insert("firstName".to_string(), AttributeValue::S(name.to_string()));
        map
    }

    #[test]
    fn test_put_then_get() {
        let store = MemoryStore::new("email");
        store.put_item("users", item("a@b.co", "Ada")).unwrap();

        let found = store.get_item("users", "a@b.co").unwrap().unwrap();
        assert_eq!(
            found.get("firstName").and_then(AttributeValue::as_s),
            Some("Ada")
        );
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let store = MemoryStore::new("email");
        assert_eq!(store.get_item("users", "nobody@b.co").unwrap(), None);
    }

    #[test]
    fn test_empty_key_rejected() {
        let store = MemoryStore::new("email");
        assert_eq!(
            store.get_item("users", ""),
            Err(StoreError::InvalidKey)
        );
        assert_eq!(
            store.delete_item("users", ""),
            Err(StoreError::InvalidKey)
        );
        assert_eq!(
            store.put_item("users", item("", "Ada")),
            Err(StoreError::InvalidKey)
        );
    }

    #[test]
    fn test_put_without_key_attribute_rejected() {
        let store = MemoryStore::new("email");
        let mut map = AttributeMap::new();
        map.insert("firstName".to_string(), AttributeValue::S("Ada".to_string()));
        assert_eq!(
            store.put_item("users", map),
            Err(StoreError::MissingKeyAttribute("email".to_string()))
        );
    }

    #[test]
    fn test_put_overwrites_same_key() {
        let store = MemoryStore::new("email");
        store.put_item("users", item("a@b.co", "Ada")).unwrap();
        store.put_item("users", item("a@b.co", "Grace")).unwrap();

        let found = store.get_item("users", "a@b.co").unwrap().unwrap();
        assert_eq!(
            found.get("firstName").and_then(AttributeValue::as_s),
            Some("Grace")
        );
        assert_eq!(store.scan("users").unwrap().len(), 1);
    }

    #[test]
    fn test_scan_untouched_collection_is_empty() {
        let store = MemoryStore::new("email");
        assert!(store.scan("users").unwrap().is_empty());
    }

    #[test]
    fn test_scan_returns_items_in_key_order() {
        let store = MemoryStore::new("email");
        store.put_item("users", item("b@b.co", "Two")).unwrap();
        store.put_item("users", item("a@b.co", "One")).unwrap();

        let items = store.scan("users").unwrap();
        let keys: Vec<_> = items
            .iter()
            .filter_map(|i| i.get("email").and_then(AttributeValue::as_s))
            .collect();
        assert_eq!(keys, vec!["a@b.co", "b@b.co"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = MemoryStore::new("email");
        store.put_item("users", item("a@b.co", "Ada")).unwrap();

        store.delete_item("users", "a@b.co").unwrap();
        assert_eq!(store.get_item("users", "a@b.co").unwrap(), None);

        // Deleting an absent key is not an error.
        store.delete_item("users", "a@b.co").unwrap();
        assert_eq!(store.get_item("users", "a@b.co").unwrap(), None);
    }

    #[test]
    fn test_collections_are_isolated() {
        let store = MemoryStore::new("email");
        store.put_item("users", item("a@b.co", "Ada")).unwrap();

        assert!(store.scan("admins").unwrap().is_empty());
        assert_eq!(store.get_item("admins", "a@b.co").unwrap(), None);
    }
}
