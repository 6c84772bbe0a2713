use pretty_assertions::assert_eq;
use session::{KeyValueStorage, MemoryStorage};
use shared_types::{Role, Session};

use crate::common::{backend_login, file_store, memory_store, reload, temp_dir};

#[test]
fn session_survives_reload() {
    let (store, storage) = memory_store();
    store.login(backend_login(Some("femme"), Some("jwt-9")));

    let reloaded = reload(&storage);
    assert_eq!(reloaded.snapshot(), store.snapshot());
    assert_eq!(reloaded.current_role(), Some(Role::Femme));
}

#[test]
fn logout_survives_reload() {
    let (store, storage) = memory_store();
    store.login(backend_login(Some("alumno"), Some("jwt")));
    store.logout();

    assert_eq!(reload(&storage).snapshot(), Session::empty());
}

#[test]
fn persisted_shape_uses_camel_case() {
    let (store, storage) = memory_store();
    store.login(backend_login(Some("profesor"), Some("jwt")));

    let raw = storage.raw("auth-storage").unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["isAuthenticated"], serde_json::Value::Bool(true));
    assert_eq!(value["token"], "jwt");
    assert_eq!(value["user"]["role"], "PROFESOR");
}

#[test]
fn legacy_lowercase_role_is_normalized_on_reload() {
    let storage = MemoryStorage::new();
    storage
        .set(
            "auth-storage",
            r#"{"user":{"id":3,"name":"Ana","email":"ana@example.com","role":"elenco"},"token":"t","isAuthenticated":true}"#,
        )
        .unwrap();

    let store = reload(&storage);
    assert_eq!(store.current_role(), Some(Role::Femme));
    assert_eq!(store.user().unwrap().id, "3");
}

#[test]
fn corrupt_entry_is_discarded() {
    let storage = MemoryStorage::new();
    storage.set("auth-storage", "{not json").unwrap();

    let store = reload(&storage);
    assert_eq!(store.snapshot(), Session::empty());
    assert_eq!(storage.raw("auth-storage"), None);
}

#[test]
fn token_without_user_is_discarded() {
    let storage = MemoryStorage::new();
    storage
        .set("auth-storage", r#"{"user":null,"token":"t","isAuthenticated":true}"#)
        .unwrap();

    let store = reload(&storage);
    assert!(!store.is_authenticated());
    assert_eq!(storage.raw("auth-storage"), None);
}

#[test]
fn file_storage_round_trip() {
    let dir = temp_dir();

    let store = file_store(&dir);
    assert_eq!(store.snapshot(), Session::empty());
    store.login(backend_login(Some("director"), Some("jwt-f")));
    assert!(dir.join("auth-storage.json").exists());

    let reloaded = file_store(&dir);
    assert_eq!(reloaded.current_role(), Some(Role::Director));
    assert_eq!(reloaded.token().as_deref(), Some("jwt-f"));

    reloaded.logout();
    assert!(!dir.join("auth-storage.json").exists());
    assert_eq!(file_store(&dir).snapshot(), Session::empty());

    let _ = std::fs::remove_dir_all(&dir);
}
