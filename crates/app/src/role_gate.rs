use crate::auth::{use_auth, use_permissions};
use crate::routes::{follow, Route};
use dioxus::prelude::*;
use session::{authentication_guard, auth_config, role_guard, GuardDecision};
use shared_types::{Permission, Role};

/// Check if the current user holds `permission`.
pub fn use_permission_check(permission: Permission) -> bool {
    use_permissions().can(permission)
}

/// Conditionally render children based on a permission.
/// Shows `fallback` if the user's role lacks it.
#[component]
pub fn PermissionGate(required: Permission, fallback: Element, children: Element) -> Element {
    let has_access = use_permission_check(required);

    if has_access {
        rsx! { {children} }
    } else {
        rsx! { {fallback} }
    }
}

fn redirecting() -> Element {
    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirigiendo..." }
        }
    }
}

fn render_decision(decision: GuardDecision, children: Element) -> Element {
    match decision {
        GuardDecision::Render => children,
        redirect => {
            follow(&redirect);
            redirecting()
        }
    }
}

/// Layout guard: renders nested routes only for a signed-in user, otherwise
/// sends them to the login page remembering where they were going.
#[component]
pub fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let decision = authentication_guard(&auth.session.read(), &route.to_string(), auth_config());
    render_decision(decision, rsx! { Outlet::<Route> {} })
}

/// Render `children` only for users holding one of `allowed`.
///
/// Guests go to the login page. Signed-in users with another role go to
/// `fallback`, or home when unset.
#[component]
pub fn RoleGuard(allowed: Vec<Role>, fallback: Option<String>, children: Element) -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let decision = role_guard(
        &auth.session.read(),
        &allowed,
        &route.to_string(),
        fallback.as_deref(),
        auth_config(),
    );
    render_decision(decision, children)
}

/// Layout guard for the account dashboard: the roles that see the current
/// tab in their menu are the roles allowed on its page.
#[component]
pub fn AccountTabGuard() -> Element {
    let route: Route = use_route();
    let allowed = route.account_tab().map(|tab| tab.roles()).unwrap_or_default();
    rsx! {
        RoleGuard { allowed, fallback: "/cuenta".to_string(),
            Outlet::<Route> {}
        }
    }
}
