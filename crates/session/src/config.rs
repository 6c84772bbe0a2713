//! `[auth]` settings from `config.toml`, loaded once per process.

use shared_types::{AppConfig, AuthConfig};
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AuthConfig> = OnceLock::new();
static DEFAULT: OnceLock<AuthConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` once and keep the `[auth]` table for the process
/// lifetime. Later calls return the first result.
///
/// If the file is missing or unparseable, defaults are used.
pub fn load_auth_config() -> &'static AuthConfig {
    CONFIG.get_or_init(|| read_config(Path::new(CONFIG_PATH)))
}

/// The loaded config, or defaults if [`load_auth_config`] hasn't run.
pub fn auth_config() -> &'static AuthConfig {
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AuthConfig::default))
}

/// Parse the `[auth]` table out of a TOML document.
pub fn parse_config(contents: &str) -> Result<AuthConfig, toml::de::Error> {
    toml::from_str::<AppConfig>(contents).map(|config| config.auth)
}

/// Read a config file, falling back to defaults on any failure.
pub fn read_config(path: &Path) -> AuthConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => {
                tracing::info!(path = %path.display(), ?config, "Loaded auth config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                AuthConfig::default()
            }
        },
        Err(e) => {
            tracing::info!(path = %path.display(), %e, "No config file, using defaults");
            AuthConfig::default()
        }
    }
}
