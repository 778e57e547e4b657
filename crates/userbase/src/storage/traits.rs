use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use userbase_core::storage::Result;

/// Attribute holding the key an item is stored under.
pub const PRIMARY_KEY: &str = "id";

/// A stored item: attribute name to typed scalar value.
pub type AttributeMap = HashMap<String, AttributeValue>;

/// Keyed attribute-map store.
///
/// Primitive operations only; no business meaning is attached to any of them.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Gets the item stored under `key`, or `None` when there is none.
    async fn get_by_key(&self, key: &str) -> Result<Option<AttributeMap>>;

    /// Gets every item whose `field` equals `value` through a secondary index.
    async fn query_by_index(
        &self,
        index_name: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<AttributeMap>>;

    /// Gets every item in the store.
    async fn scan_all(&self) -> Result<Vec<AttributeMap>>;

    /// Stores `item` under `key`, replacing any existing item.
    ///
    /// `key` is written into the item's [`PRIMARY_KEY`] attribute, overriding
    /// whatever value the item carried.
    async fn put(&self, key: &str, item: AttributeMap) -> Result<()>;

    /// Deletes the item stored under `key`. Missing keys are not an error.
    async fn delete_by_key(&self, key: &str) -> Result<()>;
}
