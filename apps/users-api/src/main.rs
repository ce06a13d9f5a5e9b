//! Users API - REST server for user CRUD

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres;
use std::path::Path;
use tracing::{error, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    // Before Config::from_env so the file can supply APP_ENV and DB_* settings
    let env_file_loaded = config::load_env_file(Path::new(config::ENV_FILE))?;
    let config = Config::from_env()?;
    init_tracing(&config.environment);

    if env_file_loaded {
        info!("Loaded environment from {}", config::ENV_FILE);
    }

    info!(
        app = config.app.name,
        version = config.app.version,
        "Connecting to PostgreSQL"
    );

    // Startup is the only place that retries; a failure here is fatal
    let db = postgres::connect_from_config_with_retry(config.database.clone(), None).await?;
    postgres::check_health(&db).await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state), &config.server)?
        .merge(health_router(config.app))
        .merge(api::ready_router(state.clone()));

    info!("Starting Users API on {}", config.server.address());

    create_production_app(router, &config.server, config.shutdown_timeout(), async move {
        info!("Shutting down: closing PostgreSQL pool");
        match state.db.close().await {
            Ok(()) => info!("PostgreSQL pool closed"),
            Err(e) => error!("Error closing PostgreSQL pool: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
