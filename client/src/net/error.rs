//! Error taxonomy for upstream calls and client-side validation.
//!
//! ERROR HANDLING
//! ==============
//! Every variant renders through `Display` as the string shown inline on the
//! page. Nothing here is retried; callers convert to text and move on.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback shown when the identity API rejects a login without a message.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

/// Failure talking to a news or identity endpoint.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The requested article does not exist upstream.
    #[error("article not found")]
    NotFound,
    /// Upstream answered with a non-2xx status.
    #[error("{}", status_message(.status, .message))]
    Status { status: u16, message: Option<String> },
    /// Transport-level failure (DNS, CORS, connection reset).
    #[error("network error: {0}")]
    Network(String),
    /// Body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// HTTP is only issued from the browser; SSR renders placeholders instead.
    #[error("not available on server")]
    Unavailable,
}

#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn status_message(status: &u16, message: &Option<String>) -> String {
    match message.as_deref() {
        Some(m) if !m.trim().is_empty() => m.trim().to_owned(),
        _ => format!("request failed: {status}"),
    }
}

impl ApiError {
    /// Reinterpret a 404 from the article detail endpoint as a missing article.
    #[must_use]
    pub fn for_article_lookup(self) -> Self {
        match self {
            Self::Status { status: 404, .. } => Self::NotFound,
            other => other,
        }
    }
}

/// Failure during the two-step login flow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Credentials were rejected; carries the upstream message when present.
    #[error("{0}")]
    Rejected(String),
    /// Login succeeded but the response carried no access token.
    #[error("login succeeded but no access token was returned")]
    MissingAccessToken,
    /// Profile lookup returned a role outside `admin`/`user`.
    #[error("unsupported role: {0}")]
    UnknownRole(String),
    /// Transport or decode failure on either request.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AuthError {
    /// Map a failed login response onto the message shown to the user.
    #[must_use]
    pub fn from_login_failure(err: ApiError) -> Self {
        match err {
            ApiError::Status { message: Some(m), .. } if !m.trim().is_empty() => Self::Rejected(m.trim().to_owned()),
            ApiError::Status { .. } | ApiError::NotFound => Self::Rejected(LOGIN_FAILED_MESSAGE.to_owned()),
            other => Self::Api(other),
        }
    }
}

/// Client-side form validation failure. Blocks submission before any request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Password is required")]
    PasswordRequired,
}

/// Classify a completed HTTP exchange into a body or an [`ApiError`].
///
/// # Errors
///
/// Returns `Status` for any non-2xx, pulling the upstream `message` field out
/// of the body when one is present. Endpoints that give 404 a narrower meaning
/// remap it themselves.
pub fn classify_response(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    Err(ApiError::Status { status, message: upstream_message(&body) })
}

/// Extract `{"message": "..."}` from an error body.
#[must_use]
pub fn upstream_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(m) }) if !m.trim().is_empty() => Some(m),
        _ => None,
    }
}
