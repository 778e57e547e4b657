//! Attribute codec for user records.
//!
//! Pure functions converting between `User` and the DynamoDB attribute map.
//! Testable in isolation without DynamoDB access.

use aws_sdk_dynamodb::types::AttributeValue;

use userbase_core::user::{User, UserError};

use crate::storage::{AttributeMap, PRIMARY_KEY};

pub const ATTR_ID: &str = PRIMARY_KEY;
pub const ATTR_EMAIL: &str = "email";
pub const ATTR_FIRST_NAME: &str = "firstName";
pub const ATTR_LAST_NAME: &str = "lastName";
pub const ATTR_DATE_OF_BIRTH: &str = "dob";

/// Convert a User to a DynamoDB item.
///
/// DynamoDB rejects empty strings in key attributes, so an empty `id` (table
/// key) or `email` (email index key) cannot be marshalled.
pub fn encode(user: &User) -> Result<AttributeMap, UserError> {
    if user.id.is_empty() {
        return Err(UserError::MarshalFailed(
            "key attribute id must not be empty".to_string(),
        ));
    }
    if user.email.is_empty() {
        return Err(UserError::MarshalFailed(
            "index key attribute email must not be empty".to_string(),
        ));
    }

    Ok(AttributeMap::from([
        string(ATTR_ID, &user.id),
        string(ATTR_EMAIL, &user.email),
        string(ATTR_FIRST_NAME, &user.first_name),
        string(ATTR_LAST_NAME, &user.last_name),
        string(ATTR_DATE_OF_BIRTH, &user.date_of_birth),
    ]))
}

/// Convert a DynamoDB item to a User.
///
/// Missing attributes decode to empty strings, so an empty item decodes to an
/// unset user.
pub fn decode(item: &AttributeMap) -> Result<User, UserError> {
    Ok(User {
        id: get_string(item, ATTR_ID)?,
        email: get_string(item, ATTR_EMAIL)?,
        first_name: get_string(item, ATTR_FIRST_NAME)?,
        last_name: get_string(item, ATTR_LAST_NAME)?,
        date_of_birth: get_string(item, ATTR_DATE_OF_BIRTH)?,
    })
}

fn string(key: &str, value: &str) -> (String, AttributeValue) {
    (key.to_string(), AttributeValue::S(value.to_string()))
}

/// Get a string attribute, defaulting to empty when absent.
fn get_string(item: &AttributeMap, key: &str) -> Result<String, UserError> {
    match item.get(key) {
        None => Ok(String::new()),
        Some(AttributeValue::S(s)) => Ok(s.clone()),
        Some(other) => Err(UserError::UnmarshalFailed(format!(
            "field {} is not a string: {:?}",
            key, other
        ))),
    }
}
