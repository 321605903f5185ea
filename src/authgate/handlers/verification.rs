//! Email verification code endpoints.
//!
//! `/register_with_verification` only issues a code. It does not hash the
//! password or create a user row.

use crate::authgate::{
    codes::CODE_DELIVERY_TARGET,
    error::{AuthError, ErrorBody},
    handlers::{Credentials, Message},
    state::AuthState,
};
use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct VerifyEmail {
    pub email: String,
    pub code: u32,
}

/// Issue a verification code for the email and deliver it through the log.
#[utoipa::path(
    post,
    path= "/register_with_verification",
    request_body = Credentials,
    responses (
        (status = 200, description = "Verification code issued", body = Message, content_type = "application/json"),
    ),
    tag= "auth"
)]
#[instrument(skip_all)]
pub async fn register_with_verification(
    state: Extension<Arc<AuthState>>,
    payload: Option<Json<Credentials>>,
) -> Result<Json<Message>, AuthError> {
    let Some(Json(user)) = payload else {
        return Err(AuthError::MissingPayload);
    };

    debug!("user: {:?}", user);

    let code = state.codes().issue(&user.email).await;

    info!(
        target: CODE_DELIVERY_TARGET,
        "Verification code for {}: {}", user.email, code
    );

    Ok(Json(Message::new(format!(
        "Verification code sent to {}",
        user.email
    ))))
}

/// Check a code against the pending one. The pending code stays valid afterwards.
#[utoipa::path(
    post,
    path= "/verify_email",
    request_body = VerifyEmail,
    responses (
        (status = 200, description = "Email verified", body = Message, content_type = "application/json"),
        (status = 400, description = "Invalid verification code", body = ErrorBody),
    ),
    tag= "auth"
)]
#[instrument(skip_all)]
pub async fn verify_email(
    state: Extension<Arc<AuthState>>,
    payload: Option<Json<VerifyEmail>>,
) -> Result<Json<Message>, AuthError> {
    let Some(Json(request)) = payload else {
        return Err(AuthError::MissingPayload);
    };

    if !state.codes().check(&request.email, request.code).await {
        debug!("Invalid verification code for {}", request.email);
        return Err(AuthError::InvalidVerificationCode);
    }

    Ok(Json(Message::new(format!(
        "Email {} verified successfully",
        request.email
    ))))
}
