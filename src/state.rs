//! Application state management.

use crate::db::DatabasePool;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database pool with the schema already initialized.
    pub db: DatabasePool,
}

impl AppState {
    /// Creates the application state over an initialized database.
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}
