use axum::Router;

pub mod health;
pub mod users;

/// API routes at their public paths (`/users`, `/users/{id}`).
///
/// Returns a stateless Router (sub-routers have their state applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/users", users::router(state))
}

/// Router with the `/ready` endpoint, which pings the database.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{openapi::ApiDoc, state::test_state};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use axum_helpers::server::create_router;
    use core_config::server::ServerConfig;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    fn app(db: sea_orm::DatabaseConnection) -> Router {
        create_router::<ApiDoc>(routes(&test_state(db)), &ServerConfig::default()).unwrap()
    }

    fn empty_db() -> sea_orm::DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection()
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_users_served_at_users() {
        let (status, body) = get(app(empty_db()), "/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_user_by_id_served_at_users_id() {
        let (status, body) = get(app(empty_db()), "/users/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_ID");
    }

    #[tokio::test]
    async fn test_no_api_prefix() {
        let (status, body) = get(app(empty_db()), "/api/users").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
