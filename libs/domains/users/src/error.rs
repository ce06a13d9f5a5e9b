use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User with id {0} not found")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Any failure reported by the database driver
    #[error("Store error: {0}")]
    Store(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        UserError::Store(err.to_string())
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User with id {} not found", id)),
            UserError::Validation(msg) => AppError::Validation(msg),
            // Detail is logged by AppError, the client gets a generic message
            UserError::Store(detail) => AppError::Database(detail),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(UserError::NotFound(1).into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            UserError::Validation("name is required".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::Store("connection reset".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_err_becomes_store_error() {
        let err: UserError = sea_orm::DbErr::Custom("boom".into()).into();
        assert!(matches!(err, UserError::Store(ref msg) if msg.contains("boom")));
    }
}
