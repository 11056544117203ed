use super::*;
use crate::storage::MemoryStorage;

fn alice() -> Session {
    Session {
        username: "alice".to_owned(),
        full_name: "Alice Liddell".to_owned(),
        email: "alice@example.com".to_owned(),
        phone: "555-0100".to_owned(),
    }
}

#[test]
fn open_empty_storage_is_signed_out() {
    let store = SessionStore::open(MemoryStorage::new()).unwrap();
    assert_eq!(store.current(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn login_sets_current_and_persists() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone()).unwrap();
    store.login(alice());

    assert_eq!(store.current(), Some(&alice()));
    let raw = storage.get(USER_KEY).unwrap().unwrap();
    let persisted: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, alice());
}

#[test]
fn login_then_reload_restores_session() {
    let storage = MemoryStorage::new();
    SessionStore::open(storage.clone()).unwrap().login(alice());

    let reloaded = SessionStore::open(storage).unwrap();
    assert_eq!(reloaded.current(), Some(&alice()));
}

#[test]
fn login_replaces_previous_session() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone()).unwrap();
    store.login(alice());
    let bob = Session { username: "bob".to_owned(), ..Session::default() };
    store.login(bob.clone());

    assert_eq!(store.current(), Some(&bob));
    assert_eq!(SessionStore::open(storage).unwrap().current(), Some(&bob));
}

#[test]
fn logout_clears_memory_and_both_keys() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone()).unwrap();
    store.login(alice());
    storage.set(TOKEN_KEY, "opaque").unwrap();

    store.logout();

    assert_eq!(store.current(), None);
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn logout_when_signed_out_still_clears_token() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "stale").unwrap();
    let mut store = SessionStore::open(storage.clone()).unwrap();
    store.logout();
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn logout_then_reload_is_signed_out() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::open(storage.clone()).unwrap();
    store.login(alice());
    store.logout();
    assert_eq!(SessionStore::open(storage).unwrap().current(), None);
}

#[test]
fn open_reports_corrupted_record() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, "{not json").unwrap();

    let err = SessionStore::open(storage).unwrap_err();
    assert!(matches!(err, SessionError::Corrupt { key: USER_KEY, .. }));
}

#[test]
fn open_or_signed_out_leaves_corrupted_bytes() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, "{not json").unwrap();

    let store = SessionStore::open_or_signed_out(storage.clone());
    assert_eq!(store.current(), None);
    assert_eq!(storage.get(USER_KEY).unwrap(), Some("{not json".to_owned()));
}

#[test]
fn empty_persisted_value_is_signed_out() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, "").unwrap();
    assert_eq!(SessionStore::open(storage).unwrap().current(), None);
}

#[test]
fn session_accepts_backend_name_field() {
    let raw = r#"{"username":"carol","name":"Carol Danvers","email":"c@example.com"}"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.full_name, "Carol Danvers");
    assert_eq!(session.phone, "");
}

#[test]
fn session_serializes_full_name_key() {
    let value = serde_json::to_value(alice()).unwrap();
    assert_eq!(value["full_name"], "Alice Liddell");
    assert!(value.get("name").is_none());
}

#[test]
fn open_restores_backend_shaped_record() {
    let storage = MemoryStorage::new();
    storage.set(USER_KEY, r#"{"name":"Ana Diaz","email":"ana@example.com"}"#).unwrap();

    let store = SessionStore::open(storage).unwrap();
    let user = store.current().unwrap();
    assert_eq!(user.username, "");
    assert_eq!(user.full_name, "Ana Diaz");
    assert_eq!(user.email, "ana@example.com");
    assert!(store.is_authenticated());
}
