use pretty_assertions::assert_eq;
use session::{handle_api_error, GuardDecision};
use shared_types::{AppError, AuthConfig, Session};

use crate::common::{backend_login, memory_store, reload};

#[test]
fn unauthorized_signs_out_and_sends_to_login() {
    let config = AuthConfig::default();
    let (store, storage) = memory_store();
    store.login(backend_login(Some("director"), Some("expired")));

    let decision = handle_api_error(&store, &AppError::unauthorized("token expired"), &config);

    assert_eq!(decision, Some(GuardDecision::to("/auth/login")));
    assert_eq!(store.snapshot(), Session::empty());
    assert_eq!(reload(&storage).snapshot(), Session::empty());
}

#[test]
fn other_errors_keep_session() {
    let config = AuthConfig::default();
    let (store, _storage) = memory_store();
    store.login(backend_login(Some("alumno"), Some("jwt")));

    for error in [
        AppError::forbidden("no"),
        AppError::not_found("gone"),
        AppError::internal("boom"),
        AppError::from_status(429, "slow down"),
    ] {
        assert_eq!(handle_api_error(&store, &error, &config), None, "{error}");
    }
    assert!(store.is_authenticated());
}
