//! Users table provisioning for local development.
//!
//! Creates the table with its `id` hash key and the email index when it does
//! not exist yet. Existing tables are left untouched.

use std::time::Duration;

use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndex, IndexStatus, KeySchemaElement,
    KeyType, Projection, ProjectionType, ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;

use super::error::ProvisionError;
use crate::codec::{ATTR_EMAIL, ATTR_ID};

const ACTIVATION_ATTEMPTS: usize = 60;
const ACTIVATION_DELAY: Duration = Duration::from_secs(2);

/// Status of the table as reported by DescribeTable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableState {
    Missing,
    Pending,
    Active,
}

/// Ensures the users table exists, creating it when missing.
///
/// Returns `true` when the table had to be created.
pub async fn ensure_table(
    client: &Client,
    table_name: &str,
    email_index: &str,
) -> Result<bool, ProvisionError> {
    if table_state(client, table_name).await? != TableState::Missing {
        tracing::info!(table = table_name, "Table already exists");
        return Ok(false);
    }

    tracing::info!(table = table_name, index = email_index, "Creating table");
    create_table(client, table_name, email_index).await?;
    wait_for_table_active(client, table_name).await?;
    tracing::info!(table = table_name, "Table is active");

    Ok(true)
}

async fn table_state(client: &Client, table_name: &str) -> Result<TableState, ProvisionError> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let Some(table) = response.table() else {
                return Ok(TableState::Missing);
            };
            let table_active = table.table_status() == Some(&TableStatus::Active);
            let indexes_active = table
                .global_secondary_indexes()
                .iter()
                .all(|gsi| gsi.index_status() == Some(&IndexStatus::Active));

            if table_active && indexes_active {
                Ok(TableState::Active)
            } else {
                Ok(TableState::Pending)
            }
        }
        Err(err) => match err.into_service_error() {
            DescribeTableError::ResourceNotFoundException(_) => Ok(TableState::Missing),
            err => Err(ProvisionError::AwsSdk(err.to_string())),
        },
    }
}

fn key_element(name: &str, key_type: KeyType) -> Result<KeySchemaElement, ProvisionError> {
    KeySchemaElement::builder()
        .attribute_name(name)
        .key_type(key_type)
        .build()
        .map_err(|e| ProvisionError::AwsSdk(e.to_string()))
}

fn string_attribute(name: &str) -> Result<AttributeDefinition, ProvisionError> {
    AttributeDefinition::builder()
        .attribute_name(name)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| ProvisionError::AwsSdk(e.to_string()))
}

async fn create_table(
    client: &Client,
    table_name: &str,
    email_index: &str,
) -> Result<(), ProvisionError> {
    let index = GlobalSecondaryIndex::builder()
        .index_name(email_index)
        .key_schema(key_element(ATTR_EMAIL, KeyType::Hash)?)
        .projection(
            Projection::builder()
                .projection_type(ProjectionType::All)
                .build(),
        )
        .build()
        .map_err(|e| ProvisionError::AwsSdk(e.to_string()))?;

    client
        .create_table()
        .table_name(table_name)
        .key_schema(key_element(ATTR_ID, KeyType::Hash)?)
        .attribute_definitions(string_attribute(ATTR_ID)?)
        .attribute_definitions(string_attribute(ATTR_EMAIL)?)
        .global_secondary_indexes(index)
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .map_err(|e| ProvisionError::AwsSdk(e.to_string()))?;

    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<(), ProvisionError> {
    for _ in 0..ACTIVATION_ATTEMPTS {
        if table_state(client, table_name).await? == TableState::Active {
            return Ok(());
        }
        tokio::time::sleep(ACTIVATION_DELAY).await;
    }

    Err(ProvisionError::TableActivationTimeout {
        table_name: table_name.to_string(),
    })
}
