//! Login against the third-party identity API.
//!
//! The flow is two requests: `POST /auth/login` for tokens, then
//! `GET /users/{id}` for the role, which the login response does not carry.
//! Client-side: real HTTP calls via `gloo-net`. Server-side (SSR): returns
//! `Unavailable`, since login only ever runs from a browser event.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Serialize};

use super::error::{ApiError, AuthError, ValidationError};
use crate::config::ApiConfig;
use crate::state::session::{Role, Session};

pub const MIN_USERNAME_LEN: usize = 3;

/// Trimmed credentials that passed local validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Per-field validation result for the login form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub username: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

/// Validate login input before any network call.
///
/// # Errors
///
/// Returns the failing fields when the username is empty or shorter than
/// [`MIN_USERNAME_LEN`], or the password is empty.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, LoginFieldErrors> {
    let username = username.trim();
    let username_error = if username.is_empty() {
        Some(ValidationError::UsernameRequired)
    } else if username.chars().count() < MIN_USERNAME_LEN {
        Some(ValidationError::UsernameTooShort)
    } else {
        None
    };
    let password_error = password.is_empty().then_some(ValidationError::PasswordRequired);

    if username_error.is_some() || password_error.is_some() {
        return Err(LoginFieldErrors { username: username_error, password: password_error });
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(config: &ApiConfig) -> String {
    format!("{}/auth/login", config.identity_base_url)
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(config: &ApiConfig, user_id: u64) -> String {
    format!("{}/users/{user_id}", config.identity_base_url)
}

/// Tokens granted by a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginGrant {
    pub user_id: u64,
    pub username: String,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponseWire {
    id: u64,
    username: Option<String>,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserDetailWire {
    role: Option<String>,
}

/// Decode a successful `/auth/login` body.
///
/// # Errors
///
/// Returns `MissingAccessToken` when the token is absent or empty and
/// `Api(Decode)` when the body is not a login response.
pub fn decode_login_grant(body: &str, fallback_username: &str) -> Result<LoginGrant, AuthError> {
    let wire: LoginResponseWire = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let access_token = wire.access_token.filter(|t| !t.is_empty()).ok_or(AuthError::MissingAccessToken)?;
    Ok(LoginGrant {
        user_id: wire.id,
        username: wire.username.filter(|u| !u.is_empty()).unwrap_or_else(|| fallback_username.to_owned()),
        access_token,
        refresh_token: wire.refresh_token.unwrap_or_default(),
    })
}

/// Decode the role out of a `/users/{id}` body.
///
/// # Errors
///
/// Returns `UnknownRole` for anything but `admin`/`user` (including a
/// missing role) and `Api(Decode)` for malformed bodies.
pub fn decode_user_role(body: &str) -> Result<Role, AuthError> {
    let wire: UserDetailWire = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let raw = wire.role.unwrap_or_default();
    raw.parse::<Role>().map_err(|_| AuthError::UnknownRole(raw))
}

/// Combine the two login responses into the session to persist.
#[must_use]
pub fn build_session(grant: LoginGrant, role: Role) -> Session {
    Session { access_token: grant.access_token, refresh_token: grant.refresh_token, username: grant.username, role }
}

/// Greeting shown once login completes.
#[must_use]
pub fn welcome_message(session: &Session) -> String {
    format!("Login successful! Welcome, {} ({}).", session.username, session.role)
}

/// Run the full login flow. The caller persists the returned session.
///
/// # Errors
///
/// Returns `AuthError` on rejected credentials, a missing token, an
/// unsupported role, or any transport/decode failure. Nothing is retried.
pub async fn login(config: &ApiConfig, credentials: &Credentials) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&login_endpoint(config))
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let body = super::error::classify_response(status, body).map_err(AuthError::from_login_failure)?;
        let grant = decode_login_grant(&body, &credentials.username)?;

        let resp = gloo_net::http::Request::get(&user_endpoint(config, grant.user_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let role = decode_user_role(&super::error::classify_response(status, body)?)?;

        log::info!("signed in {} as {role}", grant.username);
        Ok(build_session(grant, role))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(AuthError::Api(ApiError::Unavailable))
    }
}
