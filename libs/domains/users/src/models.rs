use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{UserError, UserResult};

/// User entity
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,

    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Ana")]
    pub name: String,

    /// Free-form; neither format nor uniqueness is checked
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "ana@example.com")]
    pub email: String,
}

/// Field order used when reporting validation failures
const VALIDATED_FIELDS: [&str; 2] = ["name", "email"];

impl User {
    /// User not yet persisted (id 0 until the store assigns one)
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Require non-empty `name` and `email`.
    ///
    /// Only the first failing rule is reported, checked in field order.
    pub fn check(&self) -> UserResult<()> {
        self.validate().map_err(|errors| {
            let fields = errors.field_errors();
            let message = VALIDATED_FIELDS
                .iter()
                .filter_map(|field| fields.get(*field))
                .flat_map(|errs| errs.iter())
                .next()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .unwrap_or_else(|| errors.to_string());

            UserError::Validation(message)
        })
    }
}

/// Request body for create and update
///
/// Missing fields deserialize as empty strings and are then rejected by
/// validation. An `id` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserPayload {
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
}

impl UserPayload {
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Body returned by endpoints that have no resource to return
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User deleted")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user() {
        assert!(User::new("Ana", "ana@example.com").check().is_ok());
    }

    #[test]
    fn test_empty_name() {
        let err = User::new("", "ana@example.com").check().unwrap_err();
        assert!(matches!(err, UserError::Validation(ref msg) if msg == "name is required"));
    }

    #[test]
    fn test_empty_email() {
        let err = User::new("Ana", "").check().unwrap_err();
        assert!(matches!(err, UserError::Validation(ref msg) if msg == "email is required"));
    }

    #[test]
    fn test_both_empty_reports_name_only() {
        let err = User::new("", "").check().unwrap_err();
        assert!(matches!(err, UserError::Validation(ref msg) if msg == "name is required"));
    }

    #[test]
    fn test_email_format_not_checked() {
        assert!(User::new("Ana", "not-an-email").check().is_ok());
    }

    #[test]
    fn test_payload_missing_fields_default_to_empty() {
        let payload: UserPayload = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.email, "");
    }

    #[test]
    fn test_payload_ignores_body_id() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"id":99,"name":"Ana","email":"a@x"}"#).unwrap();
        let user = payload.into_user(3);
        assert_eq!(user.id, 3);
    }

    #[test]
    fn test_user_json_shape() {
        let user = User {
            id: 1,
            name: "Ana".into(),
            email: "ana@example.com".into(),
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({"id": 1, "name": "Ana", "email": "ana@example.com"})
        );
    }
}
