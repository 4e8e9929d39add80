//! Persisted login session.
//!
//! The session is kept under two storage keys that are always written and cleared together:
//! the identity blob (`healcheck_user`, JSON) and the bearer token (`healcheck_token`, raw
//! string).

pub mod storage;

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::error::{Error, StorageError};

pub use storage::{MemoryStorage, SessionStorage};

#[cfg(feature = "web")]
pub use storage::WebStorage;

pub const SESSION_USER_KEY: &str = "healcheck_user";
pub const SESSION_TOKEN_KEY: &str = "healcheck_token";

/// The logged in user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub username: String,
    /// Bearer token, absent when the backend does not issue one
    #[serde(skip)]
    pub token: Option<String>,
}

/// Reads and writes the [`Session`] through a [`SessionStorage`] backend
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist the session.
    ///
    /// Identity and token are written together: if the token cannot be written the identity
    /// write is rolled back, so storage never holds half a session.
    pub fn save(&self, session: &Session) -> Result<(), Error> {
        let blob =
            serde_json::to_string(session).map_err(|e| StorageError::Serialize(e.to_string()))?;

        self.storage.set(SESSION_USER_KEY, &blob)?;

        let token_write = match &session.token {
            Some(token) => self.storage.set(SESSION_TOKEN_KEY, token),
            None => {
                self.storage.remove(SESSION_TOKEN_KEY);
                Ok(())
            }
        };

        if let Err(err) = token_write {
            self.storage.remove(SESSION_USER_KEY);
            self.storage.remove(SESSION_TOKEN_KEY);

            tracing::error!("Failed to persist session for user {}: {}", session.id, err);

            return Err(err.into());
        }

        Ok(())
    }

    /// Get the stored session, or `None` if there is none or it cannot be read.
    pub fn current(&self) -> Option<Session> {
        let blob = self.storage.get(SESSION_USER_KEY)?;

        let mut session = match serde_json::from_str::<Session>(&blob) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session stored under {}: {}", SESSION_USER_KEY, e);
                return None;
            }
        };

        session.token = self
            .storage
            .get(SESSION_TOKEN_KEY)
            .filter(|token| !token.is_empty());

        Some(session)
    }

    /// Remove both session keys
    pub fn clear(&self) {
        self.storage.remove(SESSION_USER_KEY);
        self.storage.remove(SESSION_TOKEN_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }
}
