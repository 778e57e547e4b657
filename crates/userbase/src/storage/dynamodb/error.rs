//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `userbase_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use thiserror::Error;
use userbase_core::storage::StoreError;

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> StoreError {
    let message = match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => "Table not found".to_string(),
        GetItemError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded, please retry".to_string()
        }
        GetItemError::RequestLimitExceeded(_) => {
            "Request limit exceeded, please retry".to_string()
        }
        GetItemError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("GetItem failed: {:?}", err),
    };
    StoreError::BackendUnavailable(message)
}

/// Map a Query SDK error to StoreError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> StoreError {
    let message = match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => "Table or index not found".to_string(),
        QueryError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded, please retry".to_string()
        }
        QueryError::RequestLimitExceeded(_) => "Request limit exceeded, please retry".to_string(),
        QueryError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("Query failed: {:?}", err),
    };
    StoreError::BackendUnavailable(message)
}

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> StoreError {
    let message = match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => "Table not found".to_string(),
        ScanError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded, please retry".to_string()
        }
        ScanError::RequestLimitExceeded(_) => "Request limit exceeded, please retry".to_string(),
        ScanError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("Scan failed: {:?}", err),
    };
    StoreError::BackendUnavailable(message)
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    let message = match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => "Table not found".to_string(),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded, please retry".to_string()
        }
        PutItemError::RequestLimitExceeded(_) => {
            "Request limit exceeded, please retry".to_string()
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            "Item collection size limit exceeded".to_string()
        }
        PutItemError::TransactionConflictException(_) => {
            "Transaction conflict, please retry".to_string()
        }
        PutItemError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("PutItem failed: {:?}", err),
    };
    StoreError::WriteFailed(message)
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StoreError {
    let message = match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => "Table not found".to_string(),
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded, please retry".to_string()
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            "Request limit exceeded, please retry".to_string()
        }
        DeleteItemError::TransactionConflictException(_) => {
            "Transaction conflict, please retry".to_string()
        }
        DeleteItemError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("DeleteItem failed: {:?}", err),
    };
    StoreError::DeleteFailed(message)
}

/// Errors raised while provisioning the users table.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Timeout waiting for table '{table_name}' to become active")]
    TableActivationTimeout { table_name: String },
}
