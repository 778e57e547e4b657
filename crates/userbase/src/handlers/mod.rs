pub mod error;
pub mod users;

pub use error::AppError;
