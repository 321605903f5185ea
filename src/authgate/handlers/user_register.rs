use crate::authgate::{
    error::{AuthError, ErrorBody},
    handlers::{Credentials, Message},
    state::AuthState,
};
use axum::{extract::Extension, Json};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[utoipa::path(
    post,
    path= "/register",
    request_body = Credentials,
    responses (
        (status = 200, description = "Registration successful", body = Message, content_type = "application/json"),
        (status = 400, description = "Missing payload", body = ErrorBody),
        (status = 409, description = "User with the specified email already exists", body = ErrorBody),
        (status = 500, description = "Storage or hashing failure", body = ErrorBody),
    ),
    tag= "auth"
)]
#[instrument(skip_all)]
pub async fn register(
    state: Extension<Arc<AuthState>>,
    payload: Option<Json<Credentials>>,
) -> Result<Json<Message>, AuthError> {
    let Some(Json(user)) = payload else {
        return Err(AuthError::MissingPayload);
    };

    debug!("user: {:?}", user);

    let password_hash = state.hasher().hash_blocking(user.password).await?;

    state.store().create_user(&user.email, &password_hash).await?;

    info!("Registered user {}", user.email);

    Ok(Json(Message::new(format!(
        "User {} registered successfully",
        user.email
    ))))
}
