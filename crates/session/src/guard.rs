//! Navigation guard decisions.
//!
//! Guards are pure functions of the session, the requested location and
//! (for the role guard) an allow-list. The routing layer re-evaluates them
//! on every render, so a session change takes effect on the next render.

use serde::{Deserialize, Serialize};
use shared_types::{AuthConfig, Role, Session};

/// State carried to the login page so it can send the user back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectState {
    pub from: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub to: String,
    pub state: Option<RedirectState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardDecision {
    Render,
    Redirect(Redirect),
}

impl GuardDecision {
    /// Redirect to the login page, remembering `from`.
    pub fn to_login(from: &str, config: &AuthConfig) -> Self {
        GuardDecision::Redirect(Redirect {
            to: config.login_path.clone(),
            state: Some(RedirectState {
                from: from.to_string(),
            }),
        })
    }

    pub fn to(target: impl Into<String>) -> Self {
        GuardDecision::Redirect(Redirect {
            to: target.into(),
            state: None,
        })
    }

    pub fn is_render(&self) -> bool {
        matches!(self, GuardDecision::Render)
    }
}

/// Render only for a session holding a token.
pub fn authentication_guard(session: &Session, requested: &str, config: &AuthConfig) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Render
    } else {
        tracing::debug!(requested, "Unauthenticated, redirecting to login");
        GuardDecision::to_login(requested, config)
    }
}

/// Render only for an authenticated session whose role is in `allowed`.
///
/// Unauthenticated sessions go to login (carrying `requested`); the wrong
/// role goes to `fallback`, or the configured home path. An empty
/// `allowed` list lets nobody through.
pub fn role_guard(
    session: &Session,
    allowed: &[Role],
    requested: &str,
    fallback: Option<&str>,
    config: &AuthConfig,
) -> GuardDecision {
    if !session.is_authenticated() {
        tracing::debug!(requested, "Unauthenticated, redirecting to login");
        return GuardDecision::to_login(requested, config);
    }
    match session.current_role() {
        Some(role) if allowed.contains(&role) => GuardDecision::Render,
        role => {
            let destination = fallback.unwrap_or(&config.home_path);
            tracing::debug!(requested, ?role, ?allowed, destination, "Role not allowed, redirecting");
            GuardDecision::to(destination)
        }
    }
}

/// Where to send a user after a successful login.
///
/// Only same-origin paths are honored, and never the login page itself;
/// anything else goes to the home path.
pub fn login_destination(from: Option<&str>, config: &AuthConfig) -> String {
    match from {
        Some(path) if is_internal_path(path) && !is_login_path(path, config) => path.to_string(),
        _ => config.home_path.clone(),
    }
}

fn is_internal_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

fn is_login_path(path: &str, config: &AuthConfig) -> bool {
    let bare = path.split(['?', '#']).next().unwrap_or(path);
    bare.trim_end_matches('/') == config.login_path.trim_end_matches('/')
}
