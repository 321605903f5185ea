use crate::authgate::{
    error::{AuthError, ErrorBody},
    handlers::{Credentials, Message},
    state::AuthState,
};
use axum::{extract::Extension, Json};
use std::sync::Arc;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path= "/login",
    request_body = Credentials,
    responses (
        (status = 200, description = "Login successful", body = Message, content_type = "application/json"),
        (status = 401, description = "Wrong password", body = ErrorBody),
        (status = 404, description = "User not found", body = ErrorBody),
    ),
    tag= "auth"
)]
#[instrument(skip_all)]
pub async fn login(
    state: Extension<Arc<AuthState>>,
    payload: Option<Json<Credentials>>,
) -> Result<Json<Message>, AuthError> {
    let Some(Json(user)) = payload else {
        return Err(AuthError::MissingPayload);
    };

    debug!("user: {:?}", user);

    let Some(stored_hash) = state.store().find_password_hash(&user.email).await? else {
        debug!("User not found");
        return Err(AuthError::UserNotFound);
    };

    if !state
        .hasher()
        .verify_blocking(user.password, stored_hash)
        .await?
    {
        debug!("Wrong password");
        return Err(AuthError::WrongPassword);
    }

    debug!("Login successful");

    Ok(Json(Message::new(format!(
        "User {} logged in successfully",
        user.email
    ))))
}
