use dioxus::prelude::*;
use session::{SessionStore, Subscription};
use shared_types::{AccountTab, AuthResponse, Permission, Role, Session, User};

/// Global authentication state.
///
/// `store` owns the session; `session` mirrors it as a signal so components
/// re-render when it changes.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub store: SessionStore,
    pub session: Signal<Session>,
}

impl AuthState {
    pub fn new(store: SessionStore) -> Self {
        let session = Signal::new(store.snapshot());
        Self { store, session }
    }

    /// Keep the signal in step with the store. Dropping the handle stops it.
    pub fn bridge(&self) -> Subscription {
        let session = self.session;
        self.store.subscribe(move |snapshot| {
            let mut session = session;
            session.set(snapshot.clone());
        })
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().token.clone()
    }

    pub fn role(&self) -> Role {
        self.session.read().role_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn login(&self, response: AuthResponse) {
        self.store.login(response);
    }

    pub fn logout(&self) {
        self.store.logout();
    }

    pub fn set_user(&self, user: Option<User>) {
        self.store.set_user(user);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Role of the signed-in user, `Visitante` for guests.
pub fn use_role() -> Role {
    use_auth().role()
}

/// Permission checks bound to the live session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Permissions {
    session: Signal<Session>,
}

impl Permissions {
    pub fn can(&self, permission: Permission) -> bool {
        self.session.read().can(permission)
    }
}

pub fn use_permissions() -> Permissions {
    Permissions {
        session: use_auth().session,
    }
}

/// Account dashboard tabs visible to the current role.
pub fn use_account_tabs() -> Vec<AccountTab> {
    use_auth().session.read().account_tabs()
}
