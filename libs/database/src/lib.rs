//! Database library providing the PostgreSQL connector used by the users API
//!
//! Wraps SeaORM connection management behind a small API: pooled connections,
//! retry with exponential backoff for startup races, migration running, and a
//! ping-based health check.
//!
//! # Example
//!
//! ```ignore
//! use database::postgres;
//! use migration::Migrator;
//!
//! let config = postgres::PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "users_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
