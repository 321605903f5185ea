//! # Authgate
//!
//! `authgate` is a small user-authentication service. It registers users with a
//! bcrypt password hash, checks login credentials against the stored hash, and
//! issues numeric email verification codes.
//!
//! ## Credentials
//!
//! Users live in a single `users(email, password)` table in PostgreSQL. The
//! table is provisioned externally, see `sql/schema.sql`. Passwords are never
//! stored in plaintext; each hash carries its own random salt.
//!
//! ## Verification codes
//!
//! Codes are six digits, held in memory for the lifetime of the process and
//! delivered through the service log. Issuing a new code for an email replaces
//! the previous one. Checking a code does not consume it.

pub mod authgate;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
