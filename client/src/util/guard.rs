//! Route guard for role-gated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page calls [`use_route_guard`] once at mount. The guard
//! reads the injected [`SessionContext`], decides via [`evaluate`], and either
//! exposes the session to the page or navigates away. Pages render a
//! "checking session" placeholder until the decision lands, so protected
//! content never flashes for unauthorized visitors.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Role, Session, SessionAccess, SessionContext, SessionError};

pub const LOGIN_ROUTE: &str = "/";

/// Who may see a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAccess {
    /// Any signed-in role.
    Authenticated,
    AdminOnly,
    UserOnly,
}

/// What the guard decided for a visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow(Session),
    Redirect {
        to: &'static str,
        /// Message shown to the visitor before navigating.
        notice: Option<String>,
        /// Wipe the stored session before navigating.
        clear_session: bool,
    },
}

/// Decide whether a page may render for the stored session.
#[must_use]
pub fn evaluate(lookup: Result<Option<Session>, SessionError>, access: PageAccess) -> GuardOutcome {
    let session = match lookup {
        Ok(Some(session)) => session,
        Ok(None) => {
            return GuardOutcome::Redirect {
                to: LOGIN_ROUTE,
                notice: Some("You must sign in to access this page.".to_owned()),
                clear_session: false,
            };
        }
        Err(e) => {
            return GuardOutcome::Redirect {
                to: LOGIN_ROUTE,
                notice: Some(capitalize(&e.to_string())),
                clear_session: true,
            };
        }
    };

    match (access, session.role) {
        (PageAccess::AdminOnly, Role::User) => GuardOutcome::Redirect {
            to: Role::User.home_route(),
            notice: Some("Access denied. This page is for admins only.".to_owned()),
            clear_session: false,
        },
        (PageAccess::UserOnly, Role::Admin) => GuardOutcome::Redirect {
            to: Role::Admin.home_route(),
            notice: Some("You have admin access. Redirecting to the admin dashboard.".to_owned()),
            clear_session: false,
        },
        _ => GuardOutcome::Allow(session),
    }
}

/// Where the login page should send a visitor who is already signed in.
#[must_use]
pub fn signed_in_landing(lookup: &Result<Option<Session>, SessionError>) -> Option<&'static str> {
    match lookup {
        Ok(Some(session)) => Some(session.role.landing_route()),
        _ => None,
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Render state of a guarded page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardStatus {
    #[default]
    Checking,
    Allowed(Session),
    Redirecting,
}

impl GuardStatus {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Allowed(session) => Some(session),
            _ => None,
        }
    }
}

/// Apply a guard decision to the session and announce it.
///
/// Returns the page status plus the route to navigate to when the visit is
/// rejected.
pub fn carry_out(
    outcome: GuardOutcome,
    session: &impl SessionAccess,
    notify: impl FnOnce(&str),
) -> (GuardStatus, Option<&'static str>) {
    match outcome {
        GuardOutcome::Allow(s) => (GuardStatus::Allowed(s), None),
        GuardOutcome::Redirect { to, notice, clear_session } => {
            if clear_session {
                session.clear_session();
            }
            if let Some(notice) = notice {
                notify(&notice);
            }
            (GuardStatus::Redirecting, Some(to))
        }
    }
}

/// Run the guard once for the current page.
///
/// The check runs in an effect, so it only executes in the browser; the
/// server-rendered markup is always the `Checking` placeholder.
pub fn use_route_guard(access: PageAccess) -> RwSignal<GuardStatus> {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let status = RwSignal::new(GuardStatus::Checking);

    Effect::new(move || {
        if status.get_untracked() != GuardStatus::Checking {
            return;
        }
        let outcome = evaluate(session.load_session(), access);
        let (next, target) = carry_out(outcome, &session, crate::util::notify::alert);
        status.set(next);
        if let Some(to) = target {
            log::info!("route guard redirecting to {to}");
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    status
}

/// Notice shown after an explicit logout.
pub const SIGNED_OUT_NOTICE: &str = "You have been signed out.";

/// Wipe the session, announce it, and return the route to land on.
pub fn sign_out(session: &impl SessionAccess, notify: impl FnOnce(&str)) -> &'static str {
    session.clear_session();
    notify(SIGNED_OUT_NOTICE);
    LOGIN_ROUTE
}

/// Handler that clears the session and returns to the login page.
pub fn use_logout() -> impl Fn() + Clone + 'static {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    move || {
        let to = sign_out(&session, crate::util::notify::alert);
        log::info!("signed out");
        navigate(to, NavigateOptions::default());
    }
}
