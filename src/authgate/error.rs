use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// Failures surfaced by the auth endpoints.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing payload")]
    MissingPayload,

    #[error("User {0} already exists")]
    DuplicateEmail(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("password hashing failed: {0}")]
    Hash(String),
}

impl AuthError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingPayload | Self::InvalidVerificationCode => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail(_) => StatusCode::CONFLICT,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::WrongPassword => StatusCode::UNAUTHORIZED,
            Self::Storage(_) | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Hash(err.to_string())
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AuthError {
    /// Storage and hashing details are logged server-side and never returned to the client.
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Storage(err) => {
                error!("Database error: {err}");
                "Storage error".to_string()
            }
            Self::Hash(err) => {
                error!("Password hashing error: {err}");
                "Password hashing error".to_string()
            }
            other => other.to_string(),
        };

        (self.status(), Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_kind() {
        assert_eq!(AuthError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AuthError::WrongPassword.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::InvalidVerificationCode.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::DuplicateEmail("a@b.com".to_string()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AuthError::Storage(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_details_are_not_leaked() {
        let response = AuthError::Storage(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn duplicate_message_names_email() {
        let err = AuthError::DuplicateEmail("a@b.com".to_string());
        assert_eq!(err.to_string(), "User a@b.com already exists");
    }
}
