//! Authentication service: register, login, logout.
//!
//! `login` is the only operation that writes the session store; `logout`
//! clears it without a network call — the server holds no session state
//! to tear down.

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse, RegisterRequest};

/// `POST /auth/register`. The response shape is not stable across backend
/// revisions, so the raw payload is returned as-is.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`]; a `detail` list of field
/// validation errors is the common failure here.
pub async fn register(
    client: &ApiClient,
    request: &RegisterRequest,
) -> Result<serde_json::Value, ApiError> {
    client.post("/auth/register", request).await
}

/// `POST /auth/login`. On success the returned token and user are saved
/// to the client's session store before the response is handed back.
///
/// # Errors
///
/// Propagates the normalized [`ApiError`]; the session store is left
/// untouched on failure.
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    let response: LoginResponse = client.post("/auth/login", &request).await?;
    client.session().save(&response.token, &response.user);
    Ok(response)
}

/// Drop the cached session. Purely local.
pub fn logout(client: &ApiClient) {
    client.session().clear();
}
