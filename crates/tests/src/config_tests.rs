use pretty_assertions::assert_eq;
use session::config::read_config;
use session::SessionStore;
use shared_types::{AuthConfig, Role};

use crate::common::{backend_login, temp_dir};

#[test]
fn config_file_drives_store_and_guards() {
    let dir = temp_dir();
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(
        &path,
        format!(
            r#"
            [auth]
            storage_key = "danza"
            login_path = "/entrar"
            placeholder_token = "cookie"
            storage_dir = "{}"
            "#,
            dir.display()
        ),
    )
    .unwrap();

    let config = read_config(&path);
    assert_eq!(config.login_path, "/entrar");

    let store = SessionStore::rehydrate(session::platform_storage(&config), &config);
    store.login(backend_login(Some("profesor"), None));
    assert_eq!(store.token().as_deref(), Some("cookie"));
    assert!(dir.join("danza.json").exists());

    let reloaded = SessionStore::rehydrate(session::platform_storage(&config), &config);
    assert_eq!(reloaded.current_role(), Some(Role::Profesor));

    let decision = session::authentication_guard(&Default::default(), "/cuenta", &config);
    assert_eq!(decision, session::GuardDecision::to_login("/cuenta", &config));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_yields_defaults() {
    let config = read_config(&temp_dir().join("config.toml"));
    assert_eq!(config, AuthConfig::default());
}
