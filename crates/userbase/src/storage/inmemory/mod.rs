//! In-memory storage backend.
//!
//! Stores attribute maps in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Used as
//! the backend double in tests and for running the server without AWS.
//!
//! # Example
//!
//! ```rust,ignore
//! use userbase::storage::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! // Use store for testing...
//! ```

mod store;

pub use store::InMemoryStore;
