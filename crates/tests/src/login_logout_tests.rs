use pretty_assertions::assert_eq;
use shared_types::{AccountTab, Permission, Role, Session};
use std::cell::RefCell;
use std::rc::Rc;

use crate::common::{backend_login, memory_store};

#[test]
fn login_normalizes_backend_role() {
    let (store, _storage) = memory_store();
    store.login(backend_login(Some("Alumno-Femme"), Some("jwt-1")));

    assert!(store.is_authenticated());
    assert_eq!(store.current_role(), Some(Role::Femme));
    assert_eq!(store.token().as_deref(), Some("jwt-1"));
    assert!(store.can(Permission::ViewRehearsals));
    assert!(!store.can(Permission::ManageUsers));
}

#[test]
fn unknown_backend_role_signs_in_as_visitante() {
    let (store, _storage) = memory_store();
    store.login(backend_login(Some("superadmin"), Some("jwt-1")));

    assert!(store.is_authenticated());
    assert_eq!(store.role_or_default(), Role::Visitante);
    assert!(store.account_tabs().is_empty());
    for p in Permission::ALL {
        assert!(!store.can(p), "{p} granted to an unknown role");
    }
}

#[test]
fn cookie_login_gets_placeholder_token() {
    let (store, _storage) = memory_store();
    store.login(backend_login(Some("profesor"), None));

    assert!(store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("session"));
    assert_eq!(store.account_tabs(), vec![AccountTab::Asistencia]);
}

#[test]
fn logout_resets_everything() {
    let (store, storage) = memory_store();
    store.login(backend_login(Some("director"), Some("jwt-1")));
    store.logout();

    assert_eq!(store.snapshot(), Session::empty());
    assert_eq!(store.current_role(), None);
    assert!(!store.can(Permission::ViewDashboard));
    assert_eq!(storage.raw("auth-storage"), None);
}

#[test]
fn logout_when_signed_out_is_harmless() {
    let (store, _storage) = memory_store();
    store.logout();
    store.logout();
    assert_eq!(store.snapshot(), Session::empty());
}

#[test]
fn subscribers_see_each_transition() {
    let (store, _storage) = memory_store();
    let seen: Rc<RefCell<Vec<Option<Role>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = store.subscribe(move |session| sink.borrow_mut().push(session.current_role()));

    store.login(backend_login(Some("director"), Some("a")));
    store.login(backend_login(Some("elenco"), Some("b")));
    store.logout();

    assert_eq!(
        *seen.borrow(),
        vec![Some(Role::Director), Some(Role::Femme), None]
    );
}

#[test]
fn set_user_keeps_token() {
    let (store, _storage) = memory_store();
    store.login(backend_login(Some("alumno"), Some("jwt-1")));

    let mut user = store.user().unwrap();
    user.name = "Lucía Pérez".to_string();
    store.set_user(Some(user));

    assert_eq!(store.token().as_deref(), Some("jwt-1"));
    assert_eq!(store.user().unwrap().name, "Lucía Pérez");
    assert!(store.snapshot().is_consistent());
}

#[test]
fn set_token_rotates_without_touching_user() {
    let (store, _storage) = memory_store();
    store.login(backend_login(Some("alumno"), Some("old")));
    store.set_token(Some("new".to_string()));

    assert_eq!(store.token().as_deref(), Some("new"));
    assert_eq!(store.current_role(), Some(Role::Alumno));
    assert!(store.is_authenticated());
}
