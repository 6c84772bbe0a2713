use pretty_assertions::assert_eq;
use session::{authentication_guard, login_destination, role_guard, GuardDecision};
use shared_types::{AccountTab, AuthConfig, Role};

use crate::common::{backend_login, memory_store};

#[test]
fn guest_on_payments_goes_to_login_and_back() {
    let config = AuthConfig::default();
    let (store, _storage) = memory_store();

    let decision = authentication_guard(&store.snapshot(), "/cuenta/pagos", &config);
    let GuardDecision::Redirect(redirect) = decision else {
        panic!("guest was let through");
    };
    assert_eq!(redirect.to, "/auth/login");
    let from = redirect.state.map(|s| s.from);
    assert_eq!(from.as_deref(), Some("/cuenta/pagos"));

    store.login(backend_login(Some("alumno"), Some("jwt")));
    assert_eq!(login_destination(from.as_deref(), &config), "/cuenta/pagos");
    assert_eq!(
        authentication_guard(&store.snapshot(), "/cuenta/pagos", &config),
        GuardDecision::Render
    );
}

#[test]
fn director_only_page() {
    let config = AuthConfig::default();
    let (store, _storage) = memory_store();

    store.login(backend_login(Some("alumno"), Some("jwt")));
    assert_eq!(
        role_guard(&store.snapshot(), &[Role::Director], "/cuenta/usuarios", Some("/"), &config),
        GuardDecision::to("/")
    );

    store.login(backend_login(Some("DIRECTOR"), Some("jwt")));
    assert_eq!(
        role_guard(&store.snapshot(), &[Role::Director], "/cuenta/usuarios", Some("/"), &config),
        GuardDecision::Render
    );
}

#[test]
fn guards_follow_logout() {
    let config = AuthConfig::default();
    let (store, _storage) = memory_store();
    store.login(backend_login(Some("director"), Some("jwt")));
    store.logout();

    assert_eq!(
        role_guard(&store.snapshot(), &[Role::Director], "/cuenta/resumen", None, &config),
        GuardDecision::to_login("/cuenta/resumen", &config)
    );
}

#[test]
fn tab_roles_agree_with_role_guard() {
    let config = AuthConfig::default();
    for role in Role::ALL {
        let (store, _storage) = memory_store();
        store.login(backend_login(Some(role.as_str()), Some("jwt")));
        let session = store.snapshot();
        for tab in AccountTab::ALL {
            let decision = role_guard(&session, &tab.roles(), tab.path(), Some("/cuenta"), &config);
            assert_eq!(
                decision.is_render(),
                session.account_tabs().contains(&tab),
                "{role} on {tab:?}"
            );
        }
    }
}

#[test]
fn empty_allow_list_redirects_everyone() {
    let config = AuthConfig::default();
    let (store, _storage) = memory_store();
    store.login(backend_login(Some("director"), Some("jwt")));
    assert_eq!(
        role_guard(&store.snapshot(), &[], "/cuenta/resumen", None, &config),
        GuardDecision::to("/")
    );
}

#[test]
fn open_redirects_are_refused() {
    let config = AuthConfig::default();
    for from in ["https://evil.example/", "//evil.example", "/\\evil", "/auth/login"] {
        assert_eq!(login_destination(Some(from), &config), "/", "{from}");
    }
}
