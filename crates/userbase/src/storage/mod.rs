//! Record store port and its backends.
//!
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - `inmemory`: process-local backend for tests and local development
//!
//! The backend is picked at startup (`--storage`) and injected into the user
//! service as `Arc<dyn RecordStore>`.

pub mod dynamodb;
pub mod inmemory;
mod traits;

pub use dynamodb::DynamoDbStore;
pub use inmemory::InMemoryStore;
pub use traits::{AttributeMap, RecordStore, PRIMARY_KEY};
