//! The session store: single source of truth for the signed-in identity.
//!
//! A [`SessionStore`] is a cheap, clonable handle over shared state. It is
//! single-threaded (`Rc`/`RefCell`) like the UI runtime that hosts it. Every
//! mutation is applied, persisted and broadcast to subscribers before the
//! mutating call returns.
//!
//! Persistence is best-effort: storage failures are logged and the
//! in-memory session stays authoritative.

use crate::storage::{KeyValueStorage, SessionPersistence};
use shared_types::{
    AccountTab, AuthConfig, AuthResponse, Permission, Role, Session, StorageError, User,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(&Session)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

impl Listeners {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

struct Inner {
    session: Session,
    persistence: SessionPersistence,
    placeholder_token: String,
}

/// What a mutation does to durable storage.
enum Persist {
    Save,
    Clear,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl SessionStore {
    /// Create a store with an empty session. Storage is written to but not read.
    pub fn new(storage: Box<dyn KeyValueStorage>, config: &AuthConfig) -> Self {
        Self::from_parts(
            Session::empty(),
            SessionPersistence::new(storage, config.storage_key.clone()),
            config,
        )
    }

    /// Create a store from whatever session durable storage holds.
    ///
    /// Missing, unreadable, corrupt or inconsistent entries all yield an
    /// empty session; corrupt and inconsistent entries are also removed.
    pub fn rehydrate(storage: Box<dyn KeyValueStorage>, config: &AuthConfig) -> Self {
        let persistence = SessionPersistence::new(storage, config.storage_key.clone());
        let session = match persistence.load() {
            Ok(Some(session)) if session.is_consistent() => {
                tracing::info!(
                    key = persistence.key(),
                    authenticated = session.is_authenticated,
                    role = %session.role_or_default(),
                    "Rehydrated session"
                );
                session
            }
            Ok(Some(_)) => {
                tracing::warn!(
                    key = persistence.key(),
                    "Persisted session violates the token/user invariant, discarding"
                );
                discard(&persistence);
                Session::empty()
            }
            Ok(None) => Session::empty(),
            Err(e @ StorageError::Serialization(_)) => {
                tracing::warn!(key = persistence.key(), %e, "Persisted session is corrupt, discarding");
                discard(&persistence);
                Session::empty()
            }
            Err(e) => {
                tracing::warn!(key = persistence.key(), %e, "Failed to read persisted session");
                Session::empty()
            }
        };
        Self::from_parts(session, persistence, config)
    }

    fn from_parts(session: Session, persistence: SessionPersistence, config: &AuthConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                session,
                persistence,
                placeholder_token: config.placeholder_token.clone(),
            })),
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    // ── Mutations ─────────────────────────────────────

    /// Sign a user in from a backend login response.
    ///
    /// The backend role string is normalized, and a missing or empty token
    /// is replaced by the configured placeholder.
    pub fn login(&self, response: AuthResponse) {
        let user = response.user.into_user();
        let token = match response.token {
            Some(token) if !token.is_empty() => token,
            _ => self.inner.borrow().placeholder_token.clone(),
        };
        tracing::info!(user_id = %user.id, role = %user.role, "Signed in");
        self.apply(
            |session| {
                *session = Session {
                    user: Some(user),
                    token: Some(token),
                    is_authenticated: true,
                }
            },
            Persist::Save,
        );
    }

    pub fn logout(&self) {
        tracing::info!("Signed out");
        self.apply(|session| *session = Session::empty(), Persist::Clear);
    }

    /// Replace the user without touching the token.
    pub fn set_user(&self, user: Option<User>) {
        self.apply(|session| session.user = user, Persist::Save);
    }

    /// Replace the token without touching the user or the stored flag.
    ///
    /// Clearing the token here does not sign the user out; callers pair it
    /// with [`SessionStore::logout`]. An inconsistent result is logged, not
    /// repaired.
    pub fn set_token(&self, token: Option<String>) {
        self.apply(|session| session.token = token, Persist::Save);
    }

    fn apply(&self, mutate: impl FnOnce(&mut Session), persist: Persist) {
        {
            let mut inner = self.inner.borrow_mut();
            mutate(&mut inner.session);
            if !inner.session.is_consistent() {
                tracing::warn!(
                    has_user = inner.session.user.is_some(),
                    has_token = inner.session.token.is_some(),
                    is_authenticated = inner.session.is_authenticated,
                    "Session is inconsistent, call logout() to reset it"
                );
            }
            let result = match persist {
                Persist::Save => inner.persistence.save(&inner.session),
                Persist::Clear => inner.persistence.clear(),
            };
            if let Err(e) = result {
                tracing::warn!(key = inner.persistence.key(), %e, "Session persistence failed");
            }
        }
        self.notify();
    }

    // ── Subscriptions ─────────────────────────────────

    /// Register a listener called with the current session after every
    /// mutation. The listener stays registered while the returned
    /// [`Subscription`] is alive.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(listener)));
        Subscription {
            listeners: Rc::downgrade(&self.listeners),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    // Listeners may mutate the store or (un)subscribe while being notified,
    // so nothing is borrowed across a call and each one gets a fresh snapshot.
    fn notify(&self) {
        let pending: Vec<(u64, Listener)> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();
        for (id, listener) in pending {
            if !self.listeners.borrow().contains(id) {
                continue;
            }
            let session = self.snapshot();
            listener(&session);
        }
    }

    // ── Reads ─────────────────────────────────────────

    pub fn snapshot(&self) -> Session {
        self.inner.borrow().session.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.borrow().session.user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.borrow().session.token.clone()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.inner.borrow().session.current_role()
    }

    pub fn role_or_default(&self) -> Role {
        self.inner.borrow().session.role_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.borrow().session.is_authenticated()
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.inner.borrow().session.can(permission)
    }

    pub fn account_tabs(&self) -> Vec<AccountTab> {
        self.inner.borrow().session.account_tabs()
    }
}

fn discard(persistence: &SessionPersistence) {
    if let Err(e) = persistence.clear() {
        tracing::warn!(key = persistence.key(), %e, "Failed to remove persisted session");
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.inner.borrow().session)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Keeps a store listener registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    listeners: Weak<RefCell<Listeners>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        // The listener may own other subscriptions; drop it after the borrow ends.
        let removed = {
            let mut listeners = listeners.borrow_mut();
            listeners
                .entries
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| listeners.entries.remove(index))
        };
        drop(removed);
    }
}
