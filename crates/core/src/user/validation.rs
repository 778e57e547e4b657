use validator::ValidateEmail;

use super::error::{Result, UserError};

/// Longest address accepted (RFC 5321 path limit).
const MAX_EMAIL_LENGTH: usize = 254;

/// Returns true if `email` looks like `local@domain.tld`.
///
/// # Examples
///
/// ```
/// use userbase_core::user::is_email_valid;
///
/// assert!(is_email_valid("bob@mail.com"));
/// assert!(!is_email_valid("bobmail.com"));
/// assert!(!is_email_valid(""));
/// ```
pub fn is_email_valid(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LENGTH || !email.validate_email() {
        return false;
    }
    // The HTML5 rules accept bare hosts such as `bob@localhost`.
    email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'))
}

/// Validates an email address, returning `InvalidEmail` when it fails.
pub fn validate_email(email: &str) -> Result<()> {
    if is_email_valid(email) {
        Ok(())
    } else {
        Err(UserError::InvalidEmail(email.to_string()))
    }
}
