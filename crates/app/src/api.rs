//! HTTP client for the school API.
//!
//! Every failed call comes back as an [`AppError`]. Callers holding a
//! session pass authenticated failures through [`report`] so an expired
//! token signs the user out.

use crate::auth::AuthState;
use crate::routes::follow;
use serde::de::DeserializeOwned;
use shared_types::{AppError, AuthConfig, AuthResponse, BackendUser, LoginRequest};

fn endpoint(config: &AuthConfig, path: &str) -> String {
    format!("{}{}", config.api_url.trim_end_matches('/'), path)
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| AppError::internal(format!("Respuesta inválida del servidor: {e}")));
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_from_body(status.as_u16(), &body))
}

/// Build an error from a non-success response. A structured body wins over
/// the bare status.
pub fn error_from_body(status: u16, body: &str) -> AppError {
    AppError::from_server_error(body).unwrap_or_else(|| {
        let message = if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            body.trim().to_string()
        };
        AppError::from_status(status, message)
    })
}

fn unreachable_server(e: reqwest::Error) -> AppError {
    AppError::internal(format!("No se pudo contactar con el servidor: {e}"))
}

/// POST credentials to the login endpoint.
pub async fn login(
    config: &AuthConfig,
    email: String,
    password: String,
) -> Result<AuthResponse, AppError> {
    let response = reqwest::Client::new()
        .post(endpoint(config, "/auth/login"))
        .json(&LoginRequest { email, password })
        .send()
        .await
        .map_err(unreachable_server)?;
    decode(response).await
}

/// GET the signed-in user's profile.
pub async fn current_user(config: &AuthConfig, token: &str) -> Result<BackendUser, AppError> {
    let response = reqwest::Client::new()
        .get(endpoint(config, "/auth/me"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(unreachable_server)?;
    decode(response).await
}

/// Hand a failed authenticated call to the session boundary and follow the
/// redirect it returns, if any.
pub fn report(auth: &AuthState, error: &AppError, config: &AuthConfig) {
    if let Some(decision) = session::handle_api_error(&auth.store, error, config) {
        follow(&decision);
    }
}
