use super::*;
use crate::util::storage::MemoryStorage;

/// Slot whose writes are always rejected, like a full `localStorage`.
#[derive(Debug, Default)]
struct FullStorage {
    inner: MemoryStorage,
}

impl KeyValueStore for FullStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::SlotWrite {
            key: key.to_owned(),
            reason: "quota exceeded".to_owned(),
        })
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

fn alice() -> Identity {
    Identity {
        id: "u-1".to_owned(),
        email: "alice@example.com".to_owned(),
        name: "Alice".to_owned(),
    }
}

fn slot(store: &MemoryStorage) -> Arc<dyn KeyValueStore> {
    Arc::new(store.clone())
}

// =============================================================
// SessionState restore
// =============================================================

#[test]
fn restore_from_empty_slot_has_no_user() {
    let mem = MemoryStorage::new();
    let state = SessionState::restore(slot(&mem));
    assert!(state.user().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn restore_after_login_recovers_identity() {
    let mem = MemoryStorage::new();
    let mut first = SessionState::restore(slot(&mem));
    first.login(alice());

    let second = SessionState::restore(slot(&mem));
    assert_eq!(second.user(), Some(&alice()));
    assert!(second.is_authenticated());
}

#[test]
fn restore_discards_corrupt_slot() {
    let mem = MemoryStorage::new();
    mem.set(SESSION_KEY, "{definitely not json").unwrap();

    let state = SessionState::restore(slot(&mem));
    assert!(state.user().is_none());
    assert!(!mem.contains(SESSION_KEY));
}

#[test]
fn restore_discards_wrong_shape() {
    let mem = MemoryStorage::new();
    mem.set(SESSION_KEY, r#"{"id":"u-1"}"#).unwrap();

    let state = SessionState::restore(slot(&mem));
    assert!(state.user().is_none());
    assert!(!mem.contains(SESSION_KEY));
}

// =============================================================
// SessionState mutators
// =============================================================

#[test]
fn login_sets_user_and_writes_slot() {
    let mem = MemoryStorage::new();
    let mut state = SessionState::restore(slot(&mem));
    state.login(alice());

    assert_eq!(state.user(), Some(&alice()));
    let raw = mem.get(SESSION_KEY).unwrap();
    let stored: Identity = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, alice());
}

#[test]
fn login_replaces_previous_identity() {
    let mem = MemoryStorage::new();
    let mut state = SessionState::restore(slot(&mem));
    state.login(alice());
    let bob = Identity {
        id: "u-2".to_owned(),
        email: "bob@example.com".to_owned(),
        name: "Bob".to_owned(),
    };
    state.login(bob.clone());

    assert_eq!(state.user(), Some(&bob));
    assert_eq!(SessionState::restore(slot(&mem)).user(), Some(&bob));
}

#[test]
fn logout_clears_user_and_slot() {
    let mem = MemoryStorage::new();
    let mut state = SessionState::restore(slot(&mem));
    state.login(alice());
    state.logout();

    assert!(state.user().is_none());
    assert!(!mem.contains(SESSION_KEY));
    assert!(SessionState::restore(slot(&mem)).user().is_none());
}

#[test]
fn logout_when_signed_out_is_harmless() {
    let mem = MemoryStorage::new();
    let mut state = SessionState::restore(slot(&mem));
    state.logout();
    assert!(!state.is_authenticated());
    assert!(mem.is_empty());
}

#[test]
fn rejected_write_keeps_signed_out_state() {
    let mut state = SessionState::restore(Arc::new(FullStorage::default()));
    state.login(alice());
    assert!(state.user().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn rejected_write_keeps_previous_identity_and_slot() {
    let full = FullStorage::default();
    storage::save_json(&full.inner, SESSION_KEY, &alice()).unwrap();
    let mem = full.inner.clone();

    let mut state = SessionState::restore(Arc::new(full));
    state.login(Identity {
        id: "u-2".to_owned(),
        email: "bob@example.com".to_owned(),
        name: "Bob".to_owned(),
    });

    assert_eq!(state.user(), Some(&alice()));
    let stored: Option<Identity> = storage::load_json(&mem, SESSION_KEY).unwrap();
    assert_eq!(stored, Some(alice()));
}

// =============================================================
// SessionStore handle
// =============================================================

#[test]
fn store_login_is_visible_immediately() {
    let owner = Owner::new();
    owner.with(|| {
        let mem = MemoryStorage::new();
        let store = SessionStore::new(slot(&mem));
        assert!(!store.is_authenticated());

        store.login(alice());
        assert_eq!(store.current_identity(), Some(alice()));
        assert!(store.is_authenticated());
    });
}

#[test]
fn store_logout_then_fresh_store_finds_nothing() {
    let owner = Owner::new();
    owner.with(|| {
        let mem = MemoryStorage::new();
        let store = SessionStore::new(slot(&mem));
        store.login(alice());
        store.logout();
        assert_eq!(store.current_identity(), None);

        let fresh = SessionStore::new(slot(&mem));
        assert_eq!(fresh.current_identity(), None);
    });
}

#[test]
fn store_restart_restores_identity() {
    let owner = Owner::new();
    owner.with(|| {
        let mem = MemoryStorage::new();
        SessionStore::new(slot(&mem)).login(alice());

        let restarted = SessionStore::new(slot(&mem));
        assert_eq!(restarted.current_identity(), Some(alice()));
    });
}

#[test]
fn store_reads_fail_after_dispose() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new(slot(&MemoryStorage::new()));
        store.dispose();
        assert!(matches!(store.try_current_identity(), Err(StoreError::Disposed("session"))));
        assert!(matches!(store.try_is_authenticated(), Err(StoreError::Disposed("session"))));
    });
}

#[test]
#[should_panic(expected = "session store used outside its active lifetime")]
fn store_current_identity_panics_after_dispose() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new(slot(&MemoryStorage::new()));
        store.dispose();
        let _ = store.current_identity();
    });
}

// =============================================================
// Deferred restore
// =============================================================

#[test]
fn unrestored_state_ignores_slot_until_reload() {
    let mem = MemoryStorage::new();
    save_alice(&mem);

    let mut state = SessionState::unrestored(slot(&mem));
    assert!(state.user().is_none());
    state.reload();
    assert_eq!(state.user(), Some(&alice()));
}

#[test]
fn reload_discards_corrupt_slot() {
    let mem = MemoryStorage::new();
    let mut state = SessionState::unrestored(slot(&mem));
    mem.set(SESSION_KEY, "garbage").unwrap();
    state.reload();
    assert!(state.user().is_none());
    assert!(!mem.contains(SESSION_KEY));
}

#[test]
fn deferred_store_restores_on_reload() {
    let owner = Owner::new();
    owner.with(|| {
        let mem = MemoryStorage::new();
        save_alice(&mem);

        let store = SessionStore::new_deferred(slot(&mem));
        assert!(!store.is_authenticated());
        store.reload();
        assert_eq!(store.current_identity(), Some(alice()));
    });
}

fn save_alice(mem: &MemoryStorage) {
    storage::save_json(mem, SESSION_KEY, &alice()).unwrap();
}
