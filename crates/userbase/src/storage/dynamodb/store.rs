//! DynamoDB record store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use userbase_core::storage::Result;

use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_scan_error,
};
use crate::storage::{AttributeMap, RecordStore, PRIMARY_KEY};

/// DynamoDB-backed record store for a single table keyed by `id`.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn get_by_key(&self, key: &str) -> Result<Option<AttributeMap>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PRIMARY_KEY, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        Ok(result.item)
    }

    async fn query_by_index(
        &self,
        index_name: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<AttributeMap>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(index_name)
            .key_condition_expression("#field = :value")
            .expression_attribute_names("#field", field)
            .expression_attribute_values(":value", AttributeValue::S(value.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        Ok(result.items.unwrap_or_default())
    }

    async fn scan_all(&self) -> Result<Vec<AttributeMap>> {
        // Follows LastEvaluatedKey until the whole table has been read.
        self.client
            .scan()
            .table_name(&self.table_name)
            .into_paginator()
            .items()
            .send()
            .collect::<std::result::Result<Vec<_>, _>>()
            .await
            .map_err(map_scan_error)
    }

    async fn put(&self, key: &str, mut item: AttributeMap) -> Result<()> {
        tracing::debug!(table = %self.table_name, key, "PutItem");
        item.insert(PRIMARY_KEY.to_string(), AttributeValue::S(key.to_string()));

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_by_key(&self, key: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(PRIMARY_KEY, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
