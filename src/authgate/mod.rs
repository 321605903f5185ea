#![allow(clippy::needless_for_each)]

use crate::{
    authgate::handlers::{
        health, health::__path_health, user_login::__path_login, user_register::__path_register,
        verification, verification::__path_register_with_verification,
        verification::__path_verify_email, Credentials, Message,
    },
    cli::globals::GlobalArgs,
};
use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::{Extension, MatchedPath},
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method, Request},
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use ulid::Ulid;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod codes;
pub mod error;
pub mod handlers;
pub mod hasher;
pub mod state;
pub mod store;

use self::{error::ErrorBody, hasher::PasswordHasher, state::AuthState, store::PgCredentialStore};

#[derive(OpenApi)]
#[openapi(
    paths(health, register, login, register_with_verification, verify_email),
    components(schemas(
        health::Health,
        Credentials,
        Message,
        ErrorBody,
        verification::VerifyEmail
    )),
    tags(
        (name = "auth", description = "Registration, login and email verification"),
        (name = "health", description = "Service health")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Build the application router around the shared auth state.
pub fn app(state: Arc<AuthState>) -> Router {
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    Router::new()
        .route("/", get(|| async { "authgate" }))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route(
            "/register_with_verification",
            post(handlers::register_with_verification),
        )
        .route("/verify_email", post(handlers::verify_email))
        .route("/health", get(handlers::health).options(handlers::health))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(state)),
        )
}

/// Start the server
/// # Errors
/// Return error if failed to connect to the database or start the server
pub async fn new(port: u16, dsn: String, globals: &GlobalArgs, bcrypt_cost: u32) -> Result<()> {
    let pool = PgPoolOptions::new()
        .min_connections(1)
        .max_connections(globals.db_max_connections)
        .max_lifetime(Duration::from_secs(60 * 2))
        .test_before_acquire(true)
        .connect(&dsn)
        .await
        .context("Failed to connect to database")?;

    let state = Arc::new(AuthState::new(
        Arc::new(PgCredentialStore::new(pool)),
        PasswordHasher::new(bcrypt_cost),
    ));

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }

    info!("Gracefully shutdown");
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
