use super::*;
use crate::state::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, ROLE_KEY, SessionStore, USERNAME_KEY};
use crate::util::storage::{KeyValueStorage, MemoryStorage};

fn session(role: Role) -> Session {
    Session {
        access_token: "tok".to_owned(),
        refresh_token: "ref".to_owned(),
        username: "kminchelle".to_owned(),
        role,
    }
}

fn redirect_target(outcome: &GuardOutcome) -> Option<&'static str> {
    match outcome {
        GuardOutcome::Redirect { to, .. } => Some(to),
        GuardOutcome::Allow(_) => None,
    }
}

#[test]
fn no_session_redirects_every_protected_page_to_login() {
    let store = SessionStore::new(MemoryStorage::new());
    for access in [PageAccess::Authenticated, PageAccess::AdminOnly, PageAccess::UserOnly] {
        let outcome = evaluate(store.load(), access);
        assert_eq!(redirect_target(&outcome), Some(LOGIN_ROUTE), "{access:?}");
    }
}

#[test]
fn no_session_keeps_storage_untouched() {
    let outcome = evaluate(Ok(None), PageAccess::AdminOnly);
    assert!(matches!(outcome, GuardOutcome::Redirect { clear_session: false, notice: Some(_), .. }));
}

#[test]
fn unknown_role_clears_session_and_redirects_to_login() {
    let storage = MemoryStorage::new();
    storage.set(ACCESS_TOKEN_KEY, "tok");
    storage.set(ROLE_KEY, "guest");
    let outcome = evaluate(SessionStore::new(&storage).load(), PageAccess::UserOnly);
    match outcome {
        GuardOutcome::Redirect { to, notice, clear_session } => {
            assert_eq!(to, LOGIN_ROUTE);
            assert!(clear_session);
            assert_eq!(notice.as_deref(), Some("Invalid role \"guest\", please sign in again"));
        }
        GuardOutcome::Allow(_) => panic!("unknown role must not be allowed"),
    }
}

#[test]
fn missing_role_clears_session() {
    let outcome = evaluate(Err(SessionError::MissingRole), PageAccess::Authenticated);
    assert!(matches!(outcome, GuardOutcome::Redirect { to: "/", clear_session: true, .. }));
}

#[test]
fn user_on_admin_page_goes_to_user_area() {
    let outcome = evaluate(Ok(Some(session(Role::User))), PageAccess::AdminOnly);
    assert_eq!(redirect_target(&outcome), Some("/user"));
}

#[test]
fn admin_on_user_page_goes_to_admin_dashboard() {
    let outcome = evaluate(Ok(Some(session(Role::Admin))), PageAccess::UserOnly);
    assert_eq!(redirect_target(&outcome), Some("/admin/dashboard"));
}

#[test]
fn matching_roles_are_allowed() {
    assert_eq!(evaluate(Ok(Some(session(Role::Admin))), PageAccess::AdminOnly), GuardOutcome::Allow(session(Role::Admin)));
    assert_eq!(evaluate(Ok(Some(session(Role::User))), PageAccess::UserOnly), GuardOutcome::Allow(session(Role::User)));
}

#[test]
fn any_role_may_read_articles() {
    for role in [Role::Admin, Role::User] {
        assert_eq!(evaluate(Ok(Some(session(role))), PageAccess::Authenticated), GuardOutcome::Allow(session(role)));
    }
}

#[test]
fn signed_in_landing_routes_by_role() {
    assert_eq!(signed_in_landing(&Ok(Some(session(Role::Admin)))), Some("/admin"));
    assert_eq!(signed_in_landing(&Ok(Some(session(Role::User)))), Some("/user"));
    assert_eq!(signed_in_landing(&Ok(None)), None);
    assert_eq!(signed_in_landing(&Err(SessionError::MissingRole)), None);
}

#[test]
fn guard_status_exposes_session_only_when_allowed() {
    assert!(GuardStatus::Checking.session().is_none());
    assert!(!GuardStatus::Redirecting.is_allowed());
    let allowed = GuardStatus::Allowed(session(Role::User));
    assert!(allowed.is_allowed());
    assert_eq!(allowed.session().map(|s| s.username.as_str()), Some("kminchelle"));
}

#[test]
fn carrying_out_unknown_role_wipes_storage_and_announces() {
    let storage = MemoryStorage::new();
    storage.set(ACCESS_TOKEN_KEY, "tok");
    storage.set(REFRESH_TOKEN_KEY, "ref");
    storage.set(USERNAME_KEY, "kminchelle");
    storage.set(ROLE_KEY, "guest");
    let store = SessionStore::new(&storage);
    let mut notices = Vec::new();

    let outcome = evaluate(store.load_session(), PageAccess::AdminOnly);
    let (status, target) = carry_out(outcome, &store, |n| notices.push(n.to_owned()));

    assert_eq!(status, GuardStatus::Redirecting);
    assert_eq!(target, Some(LOGIN_ROUTE));
    assert!(storage.is_empty());
    assert_eq!(notices, vec!["Invalid role \"guest\", please sign in again".to_owned()]);
}

#[test]
fn carrying_out_role_mismatch_keeps_session() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(&storage);
    store.save(&session(Role::User));
    let mut notices = Vec::new();

    let outcome = evaluate(store.load_session(), PageAccess::AdminOnly);
    let (status, target) = carry_out(outcome, &store, |n| notices.push(n.to_owned()));

    assert_eq!(status, GuardStatus::Redirecting);
    assert_eq!(target, Some("/user"));
    assert_eq!(storage.len(), 4);
    assert_eq!(notices.len(), 1);
}

#[test]
fn carrying_out_allow_has_no_side_effects() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(&storage);
    store.save(&session(Role::Admin));
    let mut notified = false;

    let outcome = evaluate(store.load_session(), PageAccess::AdminOnly);
    let (status, target) = carry_out(outcome, &store, |_| notified = true);

    assert_eq!(status, GuardStatus::Allowed(session(Role::Admin)));
    assert_eq!(target, None);
    assert!(!notified);
    assert_eq!(storage.len(), 4);
}

#[test]
fn sign_out_clears_all_keys_and_returns_to_login() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(&storage);
    store.save(&session(Role::User));
    assert_eq!(storage.len(), 4);
    let mut notices = Vec::new();

    let to = sign_out(&store, |n| notices.push(n.to_owned()));

    assert_eq!(to, LOGIN_ROUTE);
    assert!(storage.is_empty());
    assert_eq!(store.load_session(), Ok(None));
    assert_eq!(notices, vec![SIGNED_OUT_NOTICE.to_owned()]);
}
