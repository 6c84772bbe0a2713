use crate::api;
use crate::auth::use_auth;
use crate::routes::route_for_target;
use dioxus::prelude::*;
use session::{auth_config, login_destination};

/// Login page with email/password.
/// Accepts an optional `from` query param set by the route guards. After
/// login, navigates back there when it is an internal path, else home.
#[component]
pub fn Login(from: Option<String>) -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Store the origin in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || from);

    let go_to_destination = move || {
        let destination = login_destination(redirect_target.read().as_deref(), auth_config());
        navigator().replace(route_for_target(&destination, auth_config()));
    };

    // Already signed in: nothing to do here
    if auth.is_authenticated() {
        go_to_destination();
    }

    let handle_login = move |evt: FormEvent| {
        let auth = auth.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            match api::login(auth_config(), email(), password()).await {
                Ok(response) => {
                    auth.login(response);
                    go_to_destination();
                }
                Err(e) => {
                    tracing::debug!(kind = %e.kind, "login rejected");
                    error_msg.set(Some(e.message));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Iniciar sesión" }
                p { class: "auth-card-description", "Entra con tu correo y contraseña." }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_login,
                    div { class: "auth-field",
                        label { r#for: "email", "Correo" }
                        input {
                            r#type: "email",
                            id: "email",
                            placeholder: "tu@correo.com",
                            value: email(),
                            oninput: move |e: FormEvent| email.set(e.value()),
                        }
                    }
                    div { class: "auth-field",
                        label { r#for: "password", "Contraseña" }
                        input {
                            r#type: "password",
                            id: "password",
                            value: password(),
                            oninput: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "auth-submit button",
                        disabled: loading(),
                        if loading() { "Entrando..." } else { "Entrar" }
                    }
                }
            }
        }
    }
}
