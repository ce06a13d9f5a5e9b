use axum::Router;
use domain_users::{PgUserRepository, UserService, handlers};

use crate::state::AppState;

/// Users routes backed by the shared PostgreSQL pool
pub fn router(state: &AppState) -> Router {
    let repository = PgUserRepository::new(state.db.clone());
    handlers::router(UserService::new(repository))
}
