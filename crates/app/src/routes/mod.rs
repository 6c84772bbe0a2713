pub mod account;
pub mod home;
pub mod login;
pub mod not_found;

use crate::auth::{use_account_tabs, use_auth, use_role};
use crate::role_gate::{AccountTabGuard, AuthGuard};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogIn, LdLogOut, LdUser};
use dioxus_free_icons::Icon;
use session::{auth_config, GuardDecision, Redirect};
use shared_types::{AccountTab, AuthConfig};

use account::{
    Account, Attendance, Courses, Dashboard, Enrollments, Payments, Profile, Rehearsals, Users,
};
use home::Home;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/auth/login?:from")]
    Login { from: Option<String> },
    #[layout(AuthGuard)]
    #[layout(AccountLayout)]
    #[route("/cuenta")]
    Account {},
    #[layout(AccountTabGuard)]
    #[route("/cuenta/resumen")]
    Dashboard {},
    #[route("/cuenta/usuarios")]
    Users {},
    #[route("/cuenta/cursos")]
    Courses {},
    #[route("/cuenta/inscripciones")]
    Enrollments {},
    #[route("/cuenta/pagos")]
    Payments {},
    #[route("/cuenta/asistencia")]
    Attendance {},
    #[route("/cuenta/perfil")]
    Profile {},
    #[route("/cuenta/ensayos")]
    Rehearsals {},
    #[end_layout]
    #[end_layout]
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// The account dashboard tab this route renders, if any.
    pub fn account_tab(&self) -> Option<AccountTab> {
        match self {
            Route::Dashboard {} => Some(AccountTab::Resumen),
            Route::Users {} => Some(AccountTab::Usuarios),
            Route::Courses {} => Some(AccountTab::Cursos),
            Route::Enrollments {} => Some(AccountTab::Inscripciones),
            Route::Payments {} => Some(AccountTab::Pagos),
            Route::Attendance {} => Some(AccountTab::Asistencia),
            Route::Profile {} => Some(AccountTab::MiCuenta),
            Route::Rehearsals {} => Some(AccountTab::Ensayos),
            _ => None,
        }
    }
}

/// Resolve an internal path. Unparseable paths land on the home page.
pub fn route_for_path(path: &str) -> Route {
    path.parse().unwrap_or(Route::Home {})
}

fn same_path(a: &str, b: &str) -> bool {
    a.trim_end_matches('/') == b.trim_end_matches('/')
}

/// Resolve a navigation target, honoring the configured login and home paths.
pub fn route_for_target(path: &str, config: &AuthConfig) -> Route {
    if same_path(path, &config.login_path) {
        Route::Login { from: None }
    } else if same_path(path, &config.home_path) {
        Route::Home {}
    } else {
        route_for_path(path)
    }
}

/// Resolve a guard redirect, carrying the remembered location to the login page.
pub fn route_for_redirect(redirect: &Redirect, config: &AuthConfig) -> Route {
    match (route_for_target(&redirect.to, config), &redirect.state) {
        (Route::Login { .. }, Some(state)) => Route::Login {
            from: Some(state.from.clone()),
        },
        (target, _) => target,
    }
}

/// Navigate for a guard decision, replacing the current history entry.
pub fn follow(decision: &GuardDecision) {
    if let GuardDecision::Redirect(redirect) = decision {
        navigator().replace(route_for_redirect(redirect, auth_config()));
    }
}

/// Navigate for a decision the user asked for, keeping history.
pub fn follow_with_history(decision: &GuardDecision) {
    if let GuardDecision::Redirect(redirect) = decision {
        navigator().push(route_for_redirect(redirect, auth_config()));
    }
}

/// Site header and page frame.
#[component]
fn SiteLayout() -> Element {
    let auth = use_auth();
    let user = auth.user();
    let role = use_role();

    let handle_logout = {
        let auth = auth.clone();
        move |_| {
            auth.logout();
            navigator().replace(Route::Home {});
        }
    };

    rsx! {
        header { class: "site-header",
            Link { to: Route::Home {}, class: "site-brand", "Escuela de Danza" }
            nav { class: "site-nav",
                Link { to: Route::Home {}, "Cursos" }
                if let Some(user) = user {
                    Link { to: Route::Account {}, class: "site-account",
                        Icon { icon: LdUser, width: 16, height: 16 }
                        " {user.name}"
                        span { class: "role-badge", "{role.label()}" }
                    }
                    button { class: "button button-ghost", onclick: handle_logout,
                        Icon { icon: LdLogOut, width: 16, height: 16 }
                        " Salir"
                    }
                } else {
                    Link { to: Route::Login { from: None }, class: "button",
                        Icon { icon: LdLogIn, width: 16, height: 16 }
                        " Entrar"
                    }
                }
            }
        }
        main { class: "site-main",
            Outlet::<Route> {}
        }
    }
}

/// Account dashboard frame with the role's tab menu.
#[component]
fn AccountLayout() -> Element {
    let route: Route = use_route();
    let active = route.account_tab();
    let tabs: Vec<(AccountTab, &str)> = use_account_tabs()
        .into_iter()
        .map(|tab| {
            let class = if active == Some(tab) { "account-tab active" } else { "account-tab" };
            (tab, class)
        })
        .collect();

    rsx! {
        div { class: "account-layout",
            nav { class: "account-tabs",
                for (tab, class) in tabs {
                    Link {
                        key: "{tab.path()}",
                        to: route_for_path(tab.path()),
                        class: "{class}",
                        "{tab.label()}"
                    }
                }
            }
            section { class: "account-content",
                Outlet::<Route> {}
            }
        }
    }
}
