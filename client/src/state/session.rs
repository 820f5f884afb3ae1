//! Session store: the signed-in identity and its durable mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation chrome and pages read the identity through [`SessionStore`];
//! sign-in and sign-out gestures call its mutators. The identity survives a
//! reload through a single `localStorage` slot keyed by [`SESSION_KEY`].
//!
//! INVARIANTS
//! ==========
//! - Every mutator changes the in-memory identity and the slot together.
//! - `is_authenticated` is derived from the identity, never stored.
//! - Unparseable slot contents are deleted at restore time; restore never fails.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::util::storage::{self, KeyValueStore};

/// Slot key holding the JSON-serialized [`Identity`].
pub const SESSION_KEY: &str = "pantry_session_user";

/// The signed-in user's minimal profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque user identifier.
    pub id: String,
    /// Contact address.
    pub email: String,
    /// Display name.
    pub name: String,
}

/// Plain session state plus the slot it mirrors into.
#[derive(Clone, Debug)]
pub struct SessionState {
    user: Option<Identity>,
    slot: Arc<dyn KeyValueStore>,
}

impl SessionState {
    /// Build the state from whatever the slot currently holds.
    pub fn restore(slot: Arc<dyn KeyValueStore>) -> Self {
        let user = match storage::load_json::<Identity>(slot.as_ref(), SESSION_KEY) {
            Ok(user) => user,
            Err(e) => {
                leptos::logging::warn!("{}; discarding slot {SESSION_KEY}", StoreError::from(e));
                slot.remove(SESSION_KEY);
                None
            }
        };
        Self { user, slot }
    }

    /// State that has not read its slot yet; see [`SessionStore::reload`].
    pub fn unrestored(slot: Arc<dyn KeyValueStore>) -> Self {
        Self { user: None, slot }
    }

    /// Re-read the slot, with the same corruption handling as [`Self::restore`].
    pub fn reload(&mut self) {
        *self = Self::restore(Arc::clone(&self.slot));
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Persist `identity`, then adopt it. A rejected write leaves both the
    /// slot and the in-memory user as they were.
    pub fn login(&mut self, identity: Identity) {
        match storage::save_json(self.slot.as_ref(), SESSION_KEY, &identity) {
            Ok(()) => self.user = Some(identity),
            Err(e) => leptos::logging::warn!("{e}; keeping previous session"),
        }
    }

    pub fn logout(&mut self) {
        self.slot.remove(SESSION_KEY);
        self.user = None;
    }
}

/// Reactive handle over [`SessionState`], shared by copy with every view.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    /// Restore the session from `slot` and wrap it in a signal owned by the
    /// current reactive owner.
    pub fn new(slot: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: RwSignal::new(SessionState::restore(slot)),
        }
    }

    /// Wrap an unrestored state. The SSR shell renders signed-out, so the
    /// browser restores after hydration by calling [`Self::reload`].
    pub fn new_deferred(slot: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: RwSignal::new(SessionState::unrestored(slot)),
        }
    }

    /// Re-read the durable slot into the store.
    ///
    /// # Panics
    ///
    /// Panics with a configuration error after the store has been torn down.
    pub fn reload(&self) {
        self.state
            .try_update(SessionState::reload)
            .unwrap_or_else(|| panic!("{}", StoreError::Disposed("session")));
    }

    /// Current identity; tracked when read inside a reactive scope.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Disposed`] after the store has been torn down.
    pub fn try_current_identity(&self) -> Result<Option<Identity>, StoreError> {
        self.state
            .try_with(|s| s.user.clone())
            .ok_or(StoreError::Disposed("session"))
    }

    /// # Panics
    ///
    /// Panics with a configuration error after the store has been torn down.
    pub fn current_identity(&self) -> Option<Identity> {
        self.try_current_identity().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Disposed`] after the store has been torn down.
    pub fn try_is_authenticated(&self) -> Result<bool, StoreError> {
        self.state
            .try_with(SessionState::is_authenticated)
            .ok_or(StoreError::Disposed("session"))
    }

    /// # Panics
    ///
    /// Panics with a configuration error after the store has been torn down.
    pub fn is_authenticated(&self) -> bool {
        self.try_is_authenticated().unwrap_or_else(|e| panic!("{e}"))
    }

    /// Sign in as `identity` without validation and persist it.
    ///
    /// # Panics
    ///
    /// Panics with a configuration error after the store has been torn down.
    pub fn login(&self, identity: Identity) {
        self.state
            .try_update(|s| s.login(identity))
            .unwrap_or_else(|| panic!("{}", StoreError::Disposed("session")));
    }

    /// Sign out and delete the persisted identity.
    ///
    /// # Panics
    ///
    /// Panics with a configuration error after the store has been torn down.
    pub fn logout(&self) {
        self.state
            .try_update(SessionState::logout)
            .unwrap_or_else(|| panic!("{}", StoreError::Disposed("session")));
    }

    /// Tear down the backing signal. Later reads fail with `Disposed`.
    pub fn dispose(self) {
        self.state.dispose();
    }
}
