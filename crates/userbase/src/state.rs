//! Shared application state.
//!
//! Cloned for each request handler. Holds the user service, which in turn
//! holds the record store as a trait object.

use crate::service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}

impl AppState {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }
}
