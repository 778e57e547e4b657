//! User record service.
//!
//! Orchestrates the record store and the attribute codec, and owns every
//! uniqueness and existence decision. Each call is independent: the service
//! keeps no mutable state of its own.
//!
//! Email uniqueness is check-then-act. The ownership lookup and the write are
//! separate round trips, so two concurrent requests claiming the same email
//! can both succeed.

use std::sync::Arc;

use userbase_core::storage::StoreError;
use userbase_core::user::{validate_email, Result, User, UserError, UserPayload};

use crate::codec::{self, ATTR_EMAIL};
use crate::storage::RecordStore;

/// Settings the service needs about the table layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Secondary index used for email lookups.
    pub email_index: String,
}

/// Service layer for user records.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn RecordStore>,
    config: ServiceConfig,
}

impl UserService {
    pub fn new(store: Arc<dyn RecordStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    /// Get a user by primary key.
    ///
    /// Fails with `DoesNotExist` when nothing is stored under `id`.
    pub async fn fetch_by_id(&self, id: &str) -> Result<User> {
        let item = self
            .store
            .get_by_key(id)
            .await
            .map_err(fetch_failed)?
            .unwrap_or_default();

        let user = codec::decode(&item).inspect_err(|e| {
            tracing::warn!(user_id = %id, error = %e, "Failed to decode stored user");
        })?;

        if user.is_unset() {
            return Err(UserError::DoesNotExist { id: id.to_string() });
        }
        Ok(user)
    }

    /// Get the user currently owning `email`.
    ///
    /// Unlike [`fetch_by_id`](Self::fetch_by_id), an unknown email is not an
    /// error: it returns `None`.
    pub async fn fetch_by_email(&self, email: &str) -> Result<Option<User>> {
        let items = self
            .store
            .query_by_index(&self.config.email_index, ATTR_EMAIL, email)
            .await
            .map_err(fetch_failed)?;

        let Some(item) = items.first() else {
            return Ok(None);
        };

        let user = codec::decode(item).inspect_err(|e| {
            tracing::warn!(email, error = %e, "Failed to decode user from email index");
        })?;
        Ok(Some(user))
    }

    /// List every stored user.
    ///
    /// Items that cannot be decoded are skipped.
    pub async fn list_all(&self) -> Result<Vec<User>> {
        let items = self.store.scan_all().await.map_err(fetch_failed)?;

        Ok(items
            .iter()
            .filter_map(|item| match codec::decode(item) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping undecodable item in scan");
                    None
                }
            })
            .collect())
    }

    /// Create a user from a JSON body, assigning a fresh identifier.
    pub async fn create(&self, body: &[u8]) -> Result<User> {
        let payload = UserPayload::parse(body)?;
        validate_email(&payload.email)?;

        if let Some(existing) = self.fetch_by_email(&payload.email).await? {
            if !existing.email.is_empty() {
                return Err(UserError::AlreadyExists {
                    email: payload.email,
                });
            }
        }

        let user = payload.into_new_user();
        self.save(&user).await?;

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    /// Replace the user stored under `id` with a JSON body.
    ///
    /// The identifier always comes from `id`, never from the body.
    pub async fn update(&self, id: &str, body: &[u8]) -> Result<User> {
        let payload = UserPayload::parse(body)?;
        validate_email(&payload.email)?;

        let current = self.fetch_by_id(id).await?;

        if let Some(owner) = self.fetch_by_email(&payload.email).await? {
            if !owner.is_unset() && owner.id != current.id {
                tracing::debug!(
                    user_id = %id,
                    owner_id = %owner.id,
                    "Email already claimed by another user"
                );
                return Err(UserError::AlreadyExists {
                    email: payload.email,
                });
            }
        }

        let user = payload.into_user(current.id);
        self.save(&user).await?;

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    /// Delete the user stored under `id`. Deleting an unknown id succeeds.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete_by_key(id).await.map_err(|e| match e {
            StoreError::DeleteFailed(msg) => UserError::DeleteFailed(msg),
            other => UserError::DeleteFailed(other.to_string()),
        })?;

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }

    async fn save(&self, user: &User) -> Result<()> {
        let item = codec::encode(user)?;

        self.store
            .put(&user.id, item)
            .await
            .map_err(|e| match e {
                StoreError::WriteFailed(msg) => UserError::WriteFailed(msg),
                other => UserError::WriteFailed(other.to_string()),
            })
    }
}

fn fetch_failed(err: StoreError) -> UserError {
    match err {
        StoreError::BackendUnavailable(msg) => UserError::FetchFailed(msg),
        other => UserError::FetchFailed(other.to_string()),
    }
}
