//! Users API - REST server

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::run_migrations;
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Connect to Postgres when configured, run on the in-memory
    // repository otherwise
    let db = match &config.database {
        Some(pg_config) => {
            info!("Connecting to Postgres");
            let db =
                database::postgres::connect_from_config_with_retry(pg_config.clone(), None).await?;

            run_migrations::<Migrator>(&db, config.app.name).await?;
            info!("Successfully connected to Postgres");
            Some(db)
        }
        None => None,
    };

    // Initialize the application state
    let state = AppState {
        config: config.clone(),
        db,
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::health::router(state.clone()));

    info!("Starting Users API on port {}", state.config.server.port);

    let server_config = state.config.server.clone();
    let db_for_cleanup = state.db.clone();

    // Run server with graceful shutdown
    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30),
        async move {
            if let Some(db) = db_for_cleanup {
                info!("Shutting down: closing Postgres connection");
                db.close().await.ok();
                info!("Postgres connection closed");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
