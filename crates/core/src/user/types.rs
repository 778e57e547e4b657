use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record, the only entity stored by userbase.
///
/// An empty `id` means the record is unset (nothing was found in the store).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Free-form date of birth, never parsed.
    #[serde(rename = "dob")]
    pub date_of_birth: String,
}

impl User {
    /// Creates a new user with a freshly generated v4 UUID.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: date_of_birth.into(),
        }
    }

    /// Sets a specific ID for this user (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns true if no identifier has been assigned.
    pub fn is_unset(&self) -> bool {
        self.id.is_empty()
    }
}
