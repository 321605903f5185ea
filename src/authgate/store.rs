//! Credential storage backed by the `users` table.

use async_trait::async_trait;
use sqlx::{Connection, PgPool, Row};
use tracing::{info_span, Instrument};

use super::error::AuthError;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a new user. Fails with `DuplicateEmail` if the email is taken.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<(), AuthError>;

    async fn find_password_hash(&self, email: &str) -> Result<Option<String>, AuthError>;

    async fn ping(&self) -> Result<(), AuthError>;
}

/// Postgres store. Each call holds one pooled connection and returns it to the
/// pool when the guard drops, whichever way the call exits.
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<(), AuthError> {
        let query = "INSERT INTO users (email, password) VALUES ($1, $2)";
        let span = info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.statement = query
        );

        let mut conn = self.pool.acquire().await?;

        sqlx::query(query)
            .bind(email)
            .bind(password_hash)
            .execute(&mut *conn)
            .instrument(span)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AuthError::DuplicateEmail(email.to_string())
                } else {
                    AuthError::Storage(err)
                }
            })?;

        Ok(())
    }

    async fn find_password_hash(&self, email: &str) -> Result<Option<String>, AuthError> {
        let query = "SELECT password FROM users WHERE email = $1";
        let span = info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.statement = query
        );

        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&mut *conn)
            .instrument(span)
            .await?;

        Ok(row.map(|row| row.get::<String, _>(0)))
    }

    async fn ping(&self) -> Result<(), AuthError> {
        let span = info_span!("db.ping", db.system = "postgresql", db.operation = "PING");
        let mut conn = self.pool.acquire().await?;
        conn.ping().instrument(span).await?;
        Ok(())
    }
}

/// Postgres reports unique constraint violations with SQLSTATE `23505`.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
