//! Application state shared across all request handlers.
//!
//! `AppState` is constructed once during startup and cloned into each request handler
//! through Axum's state extraction. It holds the database pool and the random source
//! used by quiz play; nothing else is shared between requests.

use sea_orm::DatabaseConnection;

use crate::server::service::quiz::picker::QuestionPicker;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `QuestionPicker` shares its generator through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Random source for quiz question selection.
    ///
    /// Seeded from the OS in production; tests pass a seeded picker for repeatable
    /// draws.
    pub picker: QuestionPicker,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `picker` - Random source for quiz play
    pub fn new(db: DatabaseConnection, picker: QuestionPicker) -> Self {
        Self { db, picker }
    }
}
