//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionContext`] is created once by the root component and passed to
//! pages explicitly. It wraps an [`accounts::session::SessionStore`] in a
//! signal so every reader re-renders after `login`/`logout`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use accounts::session::{Session, SessionStore};
use accounts::storage::Storage;
use leptos::prelude::*;

use crate::util::local_storage::LocalStorage;

/// Copyable handle to the reactive session store.
pub struct SessionContext<S: Send + Sync + 'static = LocalStorage> {
    store: RwSignal<SessionStore<S>>,
}

impl<S: Send + Sync + 'static> Clone for SessionContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Send + Sync + 'static> Copy for SessionContext<S> {}

impl SessionContext<LocalStorage> {
    /// Restore from `localStorage`. An unreadable record starts signed out and
    /// is left in place for inspection.
    pub fn restore() -> Self {
        Self::new(SessionStore::open_or_signed_out(LocalStorage))
    }
}

impl<S: Storage + Send + Sync + 'static> SessionContext<S> {
    pub fn new(store: SessionStore<S>) -> Self {
        Self { store: RwSignal::new(store) }
    }

    /// Tracked read of the current user.
    pub fn current(&self) -> Option<Session> {
        self.store.with(|s| s.current().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(SessionStore::is_authenticated)
    }

    pub fn login(&self, user: Session) {
        self.store.update(|s| s.login(user));
    }

    pub fn logout(&self) {
        self.store.update(SessionStore::logout);
    }
}
