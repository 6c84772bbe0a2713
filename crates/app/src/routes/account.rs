//! Account dashboard pages. Each tab page is reachable only by the roles
//! that see the tab (see `AccountTabGuard`).

use crate::api;
use crate::auth::{use_account_tabs, use_auth};
use crate::role_gate::PermissionGate;
use crate::routes::{route_for_path, Route};
use dioxus::prelude::*;
use session::auth_config;
use shared_types::{AccountTab, Permission};

#[component]
fn TabPage(tab: AccountTab, description: String, children: Element) -> Element {
    rsx! {
        div { class: "account-page",
            h1 { "{tab.label()}" }
            p { class: "account-page-description", "{description}" }
            {children}
        }
    }
}

/// Landing page of `/cuenta`.
#[component]
pub fn Account() -> Element {
    let auth = use_auth();
    let tabs = use_account_tabs();
    let name = auth.user().map(|u| u.name).unwrap_or_default();

    rsx! {
        div { class: "account-page",
            h1 { "Hola, {name}" }
            if tabs.is_empty() {
                p { "Tu cuenta todavía no tiene un rol asignado. Contacta con la escuela." }
            } else {
                ul { class: "account-shortcuts",
                    for tab in tabs {
                        li { key: "{tab.path()}",
                            Link { to: route_for_path(tab.path()), "{tab.label()}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        TabPage {
            tab: AccountTab::Resumen,
            description: "Actividad de la escuela de un vistazo.",
            PermissionGate {
                required: Permission::ViewReports,
                fallback: rsx! {},
                Link { to: Route::Payments {}, "Ver informe de pagos" }
            }
        }
    }
}

#[component]
pub fn Users() -> Element {
    rsx! {
        TabPage { tab: AccountTab::Usuarios, description: "Alumnos, profesores y roles." }
    }
}

#[component]
pub fn Courses() -> Element {
    rsx! {
        TabPage { tab: AccountTab::Cursos, description: "Cursos, horarios y plazas." }
    }
}

#[component]
pub fn Enrollments() -> Element {
    rsx! {
        TabPage { tab: AccountTab::Inscripciones, description: "Inscripciones pendientes y confirmadas." }
    }
}

#[component]
pub fn Payments() -> Element {
    rsx! {
        TabPage { tab: AccountTab::Pagos, description: "Cuotas y recibos.",
            PermissionGate {
                required: Permission::ManagePayments,
                fallback: rsx! { p { "Tus cuotas y recibos." } },
                p { "Pagos de todos los alumnos." }
            }
        }
    }
}

#[component]
pub fn Attendance() -> Element {
    rsx! {
        TabPage { tab: AccountTab::Asistencia, description: "Pasa lista en tus clases." }
    }
}

/// Profile page. Refreshes the user from the API on mount.
#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let mut error_msg = use_signal(|| Option::<String>::None);

    {
        let auth = auth.clone();
        use_hook(move || {
            let Some(token) = auth.token() else {
                return;
            };
            spawn(async move {
                let config = auth_config();
                match api::current_user(config, &token).await {
                    Ok(user) => auth.set_user(Some(user.into_user())),
                    Err(e) => {
                        api::report(&auth, &e, config);
                        if !e.is_unauthorized() {
                            error_msg.set(Some(e.message.clone()));
                        }
                    }
                }
            });
        });
    }

    let user = auth.user();

    rsx! {
        TabPage { tab: AccountTab::MiCuenta, description: "Tus datos de contacto.",
            if let Some(err) = error_msg() {
                div { class: "auth-error", "{err}" }
            }
            if let Some(user) = user {
                dl { class: "profile-fields",
                    dt { "Nombre" }
                    dd { "{user.name}" }
                    dt { "Correo" }
                    dd { "{user.email}" }
                    dt { "Rol" }
                    dd { "{user.role.label()}" }
                }
            }
        }
    }
}

#[component]
pub fn Rehearsals() -> Element {
    rsx! {
        TabPage { tab: AccountTab::Ensayos, description: "Calendario de ensayos del elenco." }
    }
}
