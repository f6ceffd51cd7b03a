//! Configuration for Users API

use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Present when DATABASE_URL is set; otherwise the app runs
    /// with the in-memory repository.
    pub database: Option<PostgresConfig>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let database = match std::env::var("DATABASE_URL") {
            Ok(_) => Some(PostgresConfig::from_env()?),
            Err(_) => None,
        };

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            database,
        })
    }
}
