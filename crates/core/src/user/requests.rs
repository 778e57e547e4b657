//! Request body for creating or replacing a user.
//!
//! Pure data with no I/O. The body never carries the identifier: it is
//! generated on create and taken from the path on update.

use serde::{Deserialize, Serialize};

use super::error::{Result, UserError};
use super::types::User;

/// Body of a create or update request.
///
/// Missing fields decode to empty strings; an `id` key, if present, is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "dob")]
    pub date_of_birth: String,
}

impl UserPayload {
    /// Parses a JSON request body.
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| UserError::InvalidPayload(e.to_string()))
    }

    /// Converts into a user stored under `id`.
    pub fn into_user(self, id: impl Into<String>) -> User {
        User {
            id: id.into(),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
        }
    }

    /// Converts into a user with a freshly generated identifier.
    pub fn into_new_user(self) -> User {
        User::new(
            self.email,
            self.first_name,
            self.last_name,
            self.date_of_birth,
        )
    }
}
