use serde::{Deserialize, Serialize};

/// Session and routing settings.
///
/// Read from the `[auth]` table of `config.toml`. Every field has a
/// default so a missing or partial table still yields a usable config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    /// Durable storage key holding the serialized session.
    pub storage_key: String,
    /// Where unauthenticated navigation is sent.
    pub login_path: String,
    /// Fallback for authenticated users lacking the required role.
    pub home_path: String,
    /// Token stored when the backend signs a user in without one
    /// (cookie-based sessions).
    pub placeholder_token: String,
    /// Directory for file-backed session storage on native targets.
    pub storage_dir: Option<String>,
    /// Base URL of the school API.
    pub api_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: "auth-storage".to_string(),
            login_path: "/auth/login".to_string(),
            home_path: "/".to_string(),
            placeholder_token: "session".to_string(),
            storage_dir: None,
            api_url: "http://localhost:8080/api".to_string(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub auth: AuthConfig,
}
