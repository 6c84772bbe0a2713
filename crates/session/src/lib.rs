//! Client-side session and role-based access control for the school app.
//!
//! Pure types (roles, permissions, the session value) live in
//! `shared_types`; this crate holds the runtime pieces: the store, its
//! storage port, the navigation guards and the deferred-auth gate.

pub mod api;
pub mod config;
pub mod gate;
pub mod guard;
pub mod storage;
pub mod store;

pub use api::handle_api_error;
pub use config::{auth_config, load_auth_config};
pub use gate::{DeferredAuthGate, GateOutcome, GateState};
pub use guard::{
    authentication_guard, login_destination, role_guard, GuardDecision, Redirect, RedirectState,
};
pub use storage::{platform_storage, FileStorage, KeyValueStorage, MemoryStorage, SessionPersistence};
#[cfg(feature = "web")]
pub use storage::LocalStorage;
pub use store::{SessionStore, Subscription};

pub use shared_types::{
    account_tabs, has_permission, normalize_role, permissions_for, AccountTab, AuthConfig,
    AuthResponse, Permission, Role, Session, User,
};
