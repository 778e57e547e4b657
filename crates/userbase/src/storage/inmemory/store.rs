//! In-memory record store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use tokio::sync::RwLock;

use userbase_core::storage::Result;

use crate::storage::{AttributeMap, RecordStore, PRIMARY_KEY};

/// In-memory record store.
///
/// Items are kept in key order, so scans are deterministic. Index queries
/// filter on the named field directly; the index name is not checked.
/// Data is not persisted and is lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<RwLock<BTreeMap<String, AttributeMap>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored items.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Stores `item` under `key` as-is, bypassing [`RecordStore::put`].
    ///
    /// Lets tests plant items another writer could have left behind.
    #[cfg(test)]
    pub async fn seed(&self, key: &str, item: AttributeMap) {
        self.items.write().await.insert(key.to_string(), item);
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get_by_key(&self, key: &str) -> Result<Option<AttributeMap>> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned())
    }

    async fn query_by_index(
        &self,
        _index_name: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<AttributeMap>> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| {
                item.get(field)
                    .and_then(|v| v.as_s().ok())
                    .is_some_and(|s| s == value)
            })
            .cloned()
            .collect())
    }

    async fn scan_all(&self) -> Result<Vec<AttributeMap>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn put(&self, key: &str, mut item: AttributeMap) -> Result<()> {
        item.insert(PRIMARY_KEY.to_string(), AttributeValue::S(key.to_string()));
        let mut items = self.items.write().await;
        items.insert(key.to_string(), item);
        Ok(())
    }

    async fn delete_by_key(&self, key: &str) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, email: &str) -> AttributeMap {
        AttributeMap::from([
            ("id".to_string(), AttributeValue::S(id.to_string())),
            ("email".to_string(), AttributeValue::S(email.to_string())),
        ])
    }

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let store = InMemoryStore::new();

        assert_eq!(store.get_by_key("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = InMemoryStore::new();
        store.put("u-1", item("u-1", "a@b.com")).await.unwrap();

        let found = store.get_by_key("u-1").await.unwrap();

        assert_eq!(found, Some(item("u-1", "a@b.com")));
    }

    #[tokio::test]
    async fn test_put_writes_key_into_item() {
        let store = InMemoryStore::new();
        store.put("u-1", item("other", "a@b.com")).await.unwrap();

        let found = store.get_by_key("u-1").await.unwrap();

        assert_eq!(found, Some(item("u-1", "a@b.com")));
        assert_eq!(store.get_by_key("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = InMemoryStore::new();
        store.put("u-1", item("u-1", "a@b.com")).await.unwrap();
        store.put("u-1", item("u-1", "c@d.com")).await.unwrap();

        let found = store.get_by_key("u-1").await.unwrap();

        assert_eq!(found, Some(item("u-1", "c@d.com")));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_query_by_index_matches_field() {
        let store = InMemoryStore::new();
        store.put("u-1", item("u-1", "a@b.com")).await.unwrap();
        store.put("u-2", item("u-2", "c@d.com")).await.unwrap();

        let found = store
            .query_by_index("emailIndex", "email", "c@d.com")
            .await
            .unwrap();

        assert_eq!(found, vec![item("u-2", "c@d.com")]);
    }

    #[tokio::test]
    async fn test_query_by_index_no_match() {
        let store = InMemoryStore::new();
        store.put("u-1", item("u-1", "a@b.com")).await.unwrap();

        let found = store
            .query_by_index("emailIndex", "email", "x@y.com")
            .await
            .unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_scan_all_in_key_order() {
        let store = InMemoryStore::new();
        store.put("u-2", item("u-2", "c@d.com")).await.unwrap();
        store.put("u-1", item("u-1", "a@b.com")).await.unwrap();

        let all = store.scan_all().await.unwrap();

        assert_eq!(all, vec![item("u-1", "a@b.com"), item("u-2", "c@d.com")]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryStore::new();
        store.put("u-1", item("u-1", "a@b.com")).await.unwrap();

        store.delete_by_key("u-1").await.unwrap();
        store.delete_by_key("u-1").await.unwrap();

        assert_eq!(store.get_by_key("u-1").await.unwrap(), None);
    }
}
