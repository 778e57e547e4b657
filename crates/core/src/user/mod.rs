mod error;
mod http_mapping;
mod requests;
mod types;
mod validation;

pub use error::{Result, UserError};
pub use http_mapping::user_error_to_status_code;
pub use requests::UserPayload;
pub use types::User;
pub use validation::{is_email_valid, validate_email};
