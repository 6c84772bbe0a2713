use session::{FileStorage, MemoryStorage, SessionStore};
use shared_types::{AuthConfig, AuthResponse, BackendUser};
use std::path::{Path, PathBuf};

/// Store backed by in-memory storage. The returned handle shares the map,
/// so tests can inspect what was persisted.
pub fn memory_store() -> (SessionStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(Box::new(storage.clone()), &AuthConfig::default());
    (store, storage)
}

/// Fresh store over `storage`, as after a page reload.
pub fn reload(storage: &MemoryStorage) -> SessionStore {
    SessionStore::rehydrate(Box::new(storage.clone()), &AuthConfig::default())
}

/// Unique, not-yet-created directory under the system temp dir.
pub fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("session-tests-{}", uuid::Uuid::new_v4()))
}

pub fn file_store(dir: &Path) -> SessionStore {
    SessionStore::rehydrate(Box::new(FileStorage::new(dir)), &AuthConfig::default())
}

/// Login response as the backend sends it, with a raw role string.
pub fn backend_login(role: Option<&str>, token: Option<&str>) -> AuthResponse {
    AuthResponse {
        user: BackendUser {
            id: "7".to_string(),
            name: "Lucía".to_string(),
            email: "lucia@example.com".to_string(),
            role: role.map(str::to_string),
            avatar: None,
        },
        token: token.map(str::to_string),
    }
}
