//! Functional core for userbase.
//!
//! Pure types and functions with no I/O: the user record, request payload
//! parsing, email validation and the error taxonomy shared by every layer.

pub mod storage;
pub mod user;
