//! Shared client-side stores.
//!
//! DESIGN
//! ======
//! Two app-wide stores: `session` (who is signed in) and `ui` (toasts and the
//! busy overlay). `AppStores` is built once by the root component and passed
//! down as props, so every consumer is constructed with live stores and tests
//! can build isolated instances.


pub mod session;
pub mod ui;

use std::sync::Arc;

use crate::util::storage::KeyValueStore;

use self::session::SessionStore;
use self::ui::UiStore;

/// The pair of stores handed to the view tree.
#[derive(Clone, Copy)]
pub struct AppStores {
    pub session: SessionStore,
    pub ui: UiStore,
}

impl AppStores {
    /// Build both stores, restoring the session from `slot`.
    pub fn new(slot: Arc<dyn KeyValueStore>) -> Self {
        Self {
            session: SessionStore::new(slot),
            ui: UiStore::new(),
        }
    }

    /// Like [`Self::new`], but the session is restored later by
    /// [`SessionStore::reload`] so server and hydrated markup agree.
    pub fn new_deferred(slot: Arc<dyn KeyValueStore>) -> Self {
        Self {
            session: SessionStore::new_deferred(slot),
            ui: UiStore::new(),
        }
    }

    /// Tear both stores down; later reads fail with a configuration error.
    pub fn dispose(self) {
        self.session.dispose();
        self.ui.dispose();
    }
}
