//! Unit tests for the session store over in-memory storage.

use crate::error::{Result as SessionResult, SessionError};
use crate::{MemoryStorage, SessionStorage, SessionStore};

use rh_core::{IdentityState, UserAccount};

use std::path::PathBuf;

fn candidate() -> UserAccount {
    UserAccount {
        id: 5,
        email: "jane@example.com".to_string(),
        full_name: "Jane Doe".to_string(),
        is_employer: false,
        is_admin: false,
        is_active: true,
    }
}

fn seeded_storage(token: &str, record: &str) -> MemoryStorage {
    let mut storage = MemoryStorage::new();
    storage.set("token", token).unwrap();
    storage.set("user", record).unwrap();
    storage
}

/// Storage double whose writes always fail.
struct FailingStorage;

impl SessionStorage for FailingStorage {
    fn get(&self, _key: &str) -> SessionResult<Option<String>> {
        Err(SessionError::file_read(
            PathBuf::from("/failing"),
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        ))
    }

    fn set(&mut self, key: &str, _value: &str) -> SessionResult<()> {
        Err(SessionError::file_write(
            PathBuf::from("/failing").join(key),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn remove(&mut self, _key: &str) -> SessionResult<()> {
        Ok(())
    }
}

#[test]
fn given_new_store_when_nothing_called_then_identity_is_unknown() {
    let store = SessionStore::new(MemoryStorage::new());

    assert_eq!(*store.identity(), IdentityState::Unknown);
    assert!(store.token().is_none());
}

#[test]
fn given_empty_storage_when_restore_then_anonymous() {
    let mut store = SessionStore::new(MemoryStorage::new());

    store.restore();

    assert_eq!(*store.identity(), IdentityState::Anonymous);
    assert!(!store.is_authenticated());
}

#[test]
fn given_persisted_session_when_restore_then_present_with_token() {
    let record = serde_json::to_string(&candidate()).unwrap();
    let mut store = SessionStore::new(seeded_storage("tok-1", &record));

    store.restore();

    assert_eq!(*store.identity(), IdentityState::Present(candidate()));
    assert_eq!(store.token(), Some("tok-1"));
}

#[test]
fn given_token_but_unparseable_record_when_restore_then_anonymous() {
    let mut store = SessionStore::new(seeded_storage("tok-1", "{not json"));

    store.restore();

    assert_eq!(*store.identity(), IdentityState::Anonymous);
    assert!(store.token().is_none());
}

#[test]
fn given_record_but_no_token_when_restore_then_anonymous() {
    let mut storage = MemoryStorage::new();
    let record = serde_json::to_string(&candidate()).unwrap();
    storage.set("user", &record).unwrap();
    let mut store = SessionStore::new(storage);

    store.restore();

    assert_eq!(*store.identity(), IdentityState::Anonymous);
}

#[test]
fn given_empty_token_when_restore_then_anonymous() {
    let record = serde_json::to_string(&candidate()).unwrap();
    let mut store = SessionStore::new(seeded_storage("", &record));

    store.restore();

    assert_eq!(*store.identity(), IdentityState::Anonymous);
}

#[test]
fn given_failing_storage_when_restore_then_anonymous_without_panic() {
    let mut store = SessionStore::new(FailingStorage);

    store.restore();

    assert_eq!(*store.identity(), IdentityState::Anonymous);
}

#[test]
fn given_set_credentials_when_done_then_both_keys_persisted() {
    let mut store = SessionStore::new(MemoryStorage::new());

    store
        .set_credentials(candidate(), "tok-9".to_string())
        .unwrap();

    assert!(store.is_authenticated());
    assert_eq!(store.token(), Some("tok-9"));
    assert_eq!(
        store.storage().get("token").unwrap().as_deref(),
        Some("tok-9")
    );
    let record = store.storage().get("user").unwrap().unwrap();
    assert!(record.contains("\"isEmployer\":false"));
    assert!(record.contains("\"fullName\":\"Jane Doe\""));
}

#[test]
fn given_failing_storage_when_set_credentials_then_error_but_session_live() {
    let mut store = SessionStore::new(FailingStorage);

    let result = store.set_credentials(candidate(), "tok-2".to_string());

    // Then: the write failed but the in-memory session stands
    assert!(result.is_err());
    assert!(store.is_authenticated());
    assert_eq!(store.token(), Some("tok-2"));
}

#[test]
fn given_active_session_when_logout_then_anonymous_and_keys_removed() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store
        .set_credentials(candidate(), "tok-3".to_string())
        .unwrap();

    store.logout().unwrap();

    assert_eq!(*store.identity(), IdentityState::Anonymous);
    assert!(store.token().is_none());
    assert!(store.storage().get("token").unwrap().is_none());
    assert!(store.storage().get("user").unwrap().is_none());
}

#[test]
fn given_anonymous_store_when_logout_twice_then_ok_and_state_unchanged() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.restore();

    store.logout().unwrap();
    store.logout().unwrap();

    assert_eq!(*store.identity(), IdentityState::Anonymous);
    assert!(store.storage().get("token").unwrap().is_none());
    assert!(store.storage().get("user").unwrap().is_none());
}

#[test]
fn given_replacement_credentials_when_set_then_previous_identity_gone() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store
        .set_credentials(candidate(), "tok-old".to_string())
        .unwrap();

    let admin = UserAccount {
        id: 99,
        email: "root@example.com".to_string(),
        full_name: "Root".to_string(),
        is_employer: false,
        is_admin: true,
        is_active: true,
    };
    store
        .set_credentials(admin.clone(), "tok-new".to_string())
        .unwrap();

    assert_eq!(*store.identity(), IdentityState::Present(admin));
    assert_eq!(store.token(), Some("tok-new"));
}
