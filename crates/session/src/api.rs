//! Boundary with the remote API client.
//!
//! The store never detects an expired token itself. The API client reports
//! every failed call here, and an `Unauthorized` answer signs the user out.

use crate::guard::GuardDecision;
use crate::store::SessionStore;
use shared_types::{AppError, AuthConfig};

/// Sign out on an authorization failure and return the login redirect.
/// Other errors leave the session alone and return `None`.
pub fn handle_api_error(
    store: &SessionStore,
    error: &AppError,
    config: &AuthConfig,
) -> Option<GuardDecision> {
    if !error.is_unauthorized() {
        return None;
    }
    tracing::warn!(message = %error.message, "API rejected the session, signing out");
    store.logout();
    Some(GuardDecision::to(config.login_path.clone()))
}
