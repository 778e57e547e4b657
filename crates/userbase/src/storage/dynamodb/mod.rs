//! DynamoDB storage backend.
//!
//! Implements `RecordStore` over a single table using `aws-sdk-dynamodb`.

mod client;
mod error;
mod provision;
mod store;

pub use client::{create_client, AwsSettings};
pub use provision::ensure_table;
pub use store::DynamoDbStore;
