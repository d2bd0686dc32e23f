//! Auth session persisted in browser storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity API hands back tokens once at login; nothing refreshes or
//! re-verifies them. Every protected page reads the session through
//! [`SessionContext`], which is provided once at the app root, so storage keys
//! are only touched in this module.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use crate::util::storage::{BrowserStorage, KeyValueStorage};

pub const ACCESS_TOKEN_KEY: &str = "userAccessToken";
pub const REFRESH_TOKEN_KEY: &str = "userRefreshToken";
pub const USERNAME_KEY: &str = "userUsername";
pub const ROLE_KEY: &str = "userRole";

const SESSION_KEYS: [&str; 4] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USERNAME_KEY, ROLE_KEY];

/// Role reported by the identity API's user profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Route a freshly authenticated user lands on.
    #[must_use]
    pub fn landing_route(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::User => "/user",
        }
    }

    /// Route used when a page rejects this role.
    #[must_use]
    pub fn home_route(self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::User => "/user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "" => Err(SessionError::MissingRole),
            other => Err(SessionError::UnknownRole(other.to_owned())),
        }
    }
}

/// Client-held proof of authentication plus the cached role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub username: String,
    pub role: Role,
}

/// A stored session whose role cannot be trusted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("role information missing, please sign in again")]
    MissingRole,
    #[error("invalid role {0:?}, please sign in again")]
    UnknownRole(String),
}

/// Session reads and wipes, shared by the browser context and plain stores.
pub trait SessionAccess {
    /// # Errors
    ///
    /// Returns `SessionError` when the stored role cannot be trusted.
    fn load_session(&self) -> Result<Option<Session>, SessionError>;
    fn clear_session(&self);
}

/// Typed accessor/mutator over the four session keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the stored session.
    ///
    /// A missing or empty access token means "not signed in" (`Ok(None)`).
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when a token is present but the role is missing
    /// or not one of `admin`/`user`.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let Some(access_token) = self.storage.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty()) else {
            return Ok(None);
        };
        let role = self.storage.get(ROLE_KEY).unwrap_or_default().parse::<Role>()?;
        Ok(Some(Session {
            access_token,
            refresh_token: self.storage.get(REFRESH_TOKEN_KEY).unwrap_or_default(),
            username: self.storage.get(USERNAME_KEY).unwrap_or_default(),
            role,
        }))
    }

    pub fn save(&self, session: &Session) {
        self.storage.set(ACCESS_TOKEN_KEY, &session.access_token);
        self.storage.set(REFRESH_TOKEN_KEY, &session.refresh_token);
        self.storage.set(USERNAME_KEY, &session.username);
        self.storage.set(ROLE_KEY, session.role.as_str());
    }

    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.storage.remove(key);
        }
    }
}

impl<S: KeyValueStorage> SessionAccess for SessionStore<S> {
    fn load_session(&self) -> Result<Option<Session>, SessionError> {
        self.load()
    }

    fn clear_session(&self) {
        self.clear();
    }
}

/// Session handle injected into every page via Leptos context.
///
/// `current` mirrors the last value read or written so headers can react to
/// login/logout without re-reading storage.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    store: SessionStore<BrowserStorage>,
    current: RwSignal<Option<Session>>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self { store: SessionStore::new(BrowserStorage), current: RwSignal::new(None) }
    }

    /// Read storage and refresh the reactive copy.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionStore::load`] role errors.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let loaded = self.store.load();
        self.current.set(loaded.clone().unwrap_or(None));
        loaded
    }

    pub fn save(&self, session: &Session) {
        self.store.save(session);
        self.current.set(Some(session.clone()));
    }

    pub fn clear(&self) {
        self.store.clear();
        self.current.set(None);
    }

    /// Reactive username of the signed-in user.
    pub fn username(&self) -> Option<String> {
        self.current.with(|s| s.as_ref().map(|s| s.username.clone()))
    }
}

impl SessionAccess for SessionContext {
    fn load_session(&self) -> Result<Option<Session>, SessionError> {
        self.load()
    }

    fn clear_session(&self) {
        self.clear();
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
