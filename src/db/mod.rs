//! Engine sessions the CLI can open.
//!
//! The session core only needs something implementing `RawSession`; this
//! module provides one over an embedded CozoDB instance and the
//! configuration plumbing to pick where it lives.

mod config;
mod cozo;

pub use config::{DatabaseConfig, DEFAULT_DB_URL};
pub use cozo::CozoSession;

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to open database '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Unsupported database URL '{url}'")]
    UnsupportedUrl { url: String },
}
