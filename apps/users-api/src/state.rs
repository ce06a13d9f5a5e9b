//! Shared application state.

/// State handed to the app-level routers.
///
/// Cloning is cheap: the connection is a handle to a shared pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}

#[cfg(test)]
pub(crate) fn test_state(db: database::postgres::DatabaseConnection) -> AppState {
    use core_config::{Environment, app_info, server::ServerConfig};
    use database::postgres::PostgresConfig;

    AppState {
        config: crate::config::Config {
            app: app_info!(),
            database: PostgresConfig::new("postgres://localhost/users"),
            server: ServerConfig::default(),
            environment: Environment::Development,
            shutdown_timeout_secs: 30,
        },
        db,
    }
}
