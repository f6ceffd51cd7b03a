//! Users API routes

use axum::Router;
use domain_users::{handlers, InMemoryUserRepository, PgUserRepository, UserService};

use crate::state::AppState;

/// Create users router, backed by Postgres when a connection is present
pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => {
            let repository = PgUserRepository::new(db.clone());
            handlers::router(UserService::new(repository))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory user repository");
            let repository = InMemoryUserRepository::new();
            handlers::router(UserService::new(repository))
        }
    }
}
