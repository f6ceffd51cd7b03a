//! Application state management

use sea_orm::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Postgres connection, absent when running on the in-memory repository
    pub db: Option<DatabaseConnection>,
}
