//! The current user's session and its persisted copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! A [`SessionStore`] is created once per client and handed to every consumer
//! that reads or mutates the session (forms, profile views, CLI commands).
//! Nothing looks it up globally.
//!
//! ERROR HANDLING
//! ==============
//! `login`/`logout` never fail from the caller's point of view: storage errors
//! are logged and the in-memory session still changes. Loading a corrupted
//! persisted record is reported as [`SessionError::Corrupt`] by
//! [`SessionStore::open`]; [`SessionStore::open_or_signed_out`] is the
//! explicit opt-in for starting signed out instead.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::storage::{Storage, StorageError};

/// Storage key holding the serialized [`Session`].
pub const USER_KEY: &str = "user";
/// Storage key of the opaque auth token. Written by other collaborators,
/// cleared here on logout.
pub const TOKEN_KEY: &str = "token";

/// The authenticated user. Every field may be missing from a stored record;
/// the backend's user model has no `username` or `phone`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub username: String,
    /// Display name. The backend's user model calls this `name`.
    #[serde(alias = "name")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("persisted session under `{key}` is corrupted: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Holds at most one active session and mirrors it into [`Storage`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: Storage> SessionStore<S> {
    /// Open the store, restoring a previously persisted session if present.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Corrupt`] if the persisted record cannot be
    /// parsed, or [`SessionError::Storage`] if storage cannot be read.
    pub fn open(storage: S) -> Result<Self, SessionError> {
        let current = load_session(&storage)?;
        if let Some(user) = &current {
            tracing::debug!(username = %user.username, "restored persisted session");
        }
        Ok(Self { storage, current })
    }

    /// Open the store, starting signed out if the persisted record is
    /// unreadable. The stored bytes are left untouched.
    pub fn open_or_signed_out(storage: S) -> Self {
        match load_session(&storage) {
            Ok(current) => Self { storage, current },
            Err(e) => {
                tracing::warn!(error = %e, "persisted session unreadable; starting signed out");
                Self { storage, current: None }
            }
        }
    }

    /// Make `user` the active session and persist it under [`USER_KEY`].
    pub fn login(&mut self, user: Session) {
        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(USER_KEY, &raw) {
                    tracing::warn!(error = %e, "failed to persist session");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize session"),
        }
        tracing::info!(username = %user.username, "session started");
        self.current = Some(user);
    }

    /// Drop the active session and remove both [`USER_KEY`] and [`TOKEN_KEY`].
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!(username = %user.username, "session ended");
        }
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!(key, error = %e, "failed to clear persisted session entry");
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

fn load_session<S: Storage>(storage: &S) -> Result<Option<Session>, SessionError> {
    let Some(raw) = storage.get(USER_KEY)? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| SessionError::Corrupt { key: USER_KEY, source })
}
