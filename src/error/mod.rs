//! Error types for the HealCheck portal.
//!
//! Errors are split by where they originate: local input validation that never reaches the
//! network, the backend rejecting a request, the backend being unreachable, session storage and
//! configuration. Every domain error converts into the unified [`Error`] through `#[from]`, so
//! controllers can propagate with `?` and convert to one user-visible message at the top of each
//! action with [`Error::user_message`].

pub mod api;
pub mod config;
pub mod storage;
pub mod validation;

use thiserror::Error;

pub use api::{ApiError, NetworkError};
pub use config::ConfigError;
pub use storage::StorageError;
pub use validation::ValidationError;

/// Message shown whenever the backend could not be reached.
pub const CONNECTION_MESSAGE: &str = "Failed to connect to server. Please try again.";

/// Main error type for the HealCheck portal.
///
/// # Error Categories
/// - Validation errors (local, field-level, raised before any request)
/// - API errors (the server answered with a non-2xx status)
/// - Network errors (the request never completed)
/// - Invalid responses (the server answered 2xx with a body we cannot decode)
/// - Storage and configuration errors
#[derive(Error, Debug)]
pub enum Error {
    /// Local input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The server rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The server could not be reached.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// Persisting or clearing the session failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Configuration value missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A successful response carried a body that could not be decoded.
    #[error("Invalid response from {path}: {reason}")]
    InvalidResponse { path: String, reason: String },
    /// The page requires a logged in user.
    #[error("You must be logged in to view this page")]
    Unauthenticated,
    /// The same action is already in flight for this record.
    #[error("A request for {0} is already in progress")]
    Busy(String),
}

impl Error {
    /// Convert the error into the single message shown to the user.
    ///
    /// Server provided messages are surfaced verbatim; when the server gave none the
    /// per-action `fallback` is used instead. Network failures always map to the
    /// connectivity message so the user knows to check their connection rather than their
    /// input.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Api(err) => err.message_or(fallback).to_string(),
            Self::Network(_) => CONNECTION_MESSAGE.to_string(),
            Self::InvalidResponse { .. } => fallback.to_string(),
            Self::Storage(err) => err.to_string(),
            Self::Config(err) => err.to_string(),
            Self::Unauthenticated | Self::Busy(_) => self.to_string(),
        }
    }

    /// Returns true if the error happened before any request was issued.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Busy(_) | Self::Unauthenticated)
    }
}
