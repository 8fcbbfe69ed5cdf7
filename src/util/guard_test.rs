use std::cell::{Cell, RefCell};

use super::*;
use crate::util::session::MemorySessionStore;

/// Store seeded with an arbitrary (possibly corrupt) snapshot, counting
/// `clear` calls.
struct TrackingStore {
    session: RefCell<Session>,
    clears: Cell<u32>,
}

impl TrackingStore {
    fn with(token: Option<&str>, login_time_ms: Option<i64>) -> Self {
        Self {
            session: RefCell::new(Session {
                token: token.map(str::to_owned),
                login_time_ms,
            }),
            clears: Cell::new(0),
        }
    }
}

impl SessionStore for TrackingStore {
    fn get(&self) -> Session {
        self.session.borrow().clone()
    }

    fn set(&self, token: &str, login_time_ms: i64) {
        *self.session.borrow_mut() = Session {
            token: Some(token.to_owned()),
            login_time_ms: Some(login_time_ms),
        };
    }

    fn clear(&self) {
        self.clears.set(self.clears.get() + 1);
        *self.session.borrow_mut() = Session::default();
    }
}

#[test]
fn absent_pair_is_unauthenticated_without_store_writes() {
    let store = TrackingStore::with(None, None);
    assert_eq!(evaluate(&store, 1_000), SessionState::Unauthenticated);
    assert_eq!(store.clears.get(), 0);
}

#[test]
fn token_without_login_time_heals_with_single_clear() {
    let store = TrackingStore::with(Some("abc"), None);
    assert_eq!(evaluate(&store, 1_000), SessionState::Unauthenticated);
    assert_eq!(store.clears.get(), 1);
    assert_eq!(store.get(), Session::default());
}

#[test]
fn login_time_without_token_heals_with_single_clear() {
    let store = TrackingStore::with(None, Some(0));
    assert_eq!(evaluate(&store, 1_000), SessionState::Unauthenticated);
    assert_eq!(store.clears.get(), 1);
    assert_eq!(store.get(), Session::default());
}

#[test]
fn session_within_ttl_is_authenticated() {
    let store = TrackingStore::with(Some("abc"), Some(0));
    assert_eq!(evaluate(&store, SESSION_TTL_MS - 1), SessionState::Authenticated);
    assert_eq!(evaluate(&store, SESSION_TTL_MS), SessionState::Authenticated);
    assert_eq!(store.clears.get(), 0);
}

#[test]
fn session_past_ttl_expires_and_clears() {
    let store = TrackingStore::with(Some("abc"), Some(0));
    assert_eq!(evaluate(&store, SESSION_TTL_MS + 1), SessionState::Expired);
    assert_eq!(store.clears.get(), 1);
    assert_eq!(store.get(), Session::default());
}

#[test]
fn policies_are_opposites_for_every_state() {
    for state in [
        SessionState::Unauthenticated,
        SessionState::Authenticated,
        SessionState::Expired,
    ] {
        let protected_allows = protected_verdict(state, "/admin/projects") == Verdict::Allow;
        let login_allows = login_verdict(state) == Verdict::Allow;
        assert_ne!(protected_allows, login_allows, "state {state:?}");
    }
}

#[test]
fn protected_redirect_carries_requested_path() {
    assert_eq!(
        protected_verdict(SessionState::Expired, "/admin/projects"),
        Verdict::Redirect("/?from=/admin/projects".to_owned())
    );
}

#[test]
fn login_redirect_target_drops_empty_and_login_paths() {
    assert_eq!(login_redirect_target(""), "/");
    assert_eq!(login_redirect_target("/"), "/");
    assert_eq!(login_redirect_target("/admin/dashboard"), "/?from=/admin/dashboard");
}

#[test]
fn authenticated_login_view_redirects_to_dashboard() {
    assert_eq!(
        login_verdict(SessionState::Authenticated),
        Verdict::Redirect(DASHBOARD_PATH.to_owned())
    );
}

#[test]
fn post_login_target_honors_admin_paths_only() {
    assert_eq!(post_login_target(Some("/admin/projects")), "/admin/projects");
    assert_eq!(post_login_target(Some("https://evil.example")), DASHBOARD_PATH);
    assert_eq!(post_login_target(None), DASHBOARD_PATH);
}

#[test]
fn session_lifecycle_from_login_to_expiry() {
    let store = MemorySessionStore::default();
    store.set("abc", 0);
    assert_eq!(
        store.get(),
        Session {
            token: Some("abc".to_owned()),
            login_time_ms: Some(0),
        }
    );

    assert_eq!(evaluate(&store, 1_799_999), SessionState::Authenticated);
    assert_eq!(
        protected_verdict(evaluate(&store, 1_799_999), "/admin/projects"),
        Verdict::Allow
    );

    let late = evaluate(&store, 1_800_001);
    assert_eq!(late, SessionState::Expired);
    assert_eq!(store.get(), Session::default());
    assert!(matches!(
        protected_verdict(late, "/admin/projects"),
        Verdict::Redirect(_)
    ));
}

#[test]
fn login_entry_allows_then_redirects_after_login() {
    let store = MemorySessionStore::default();
    assert_eq!(login_verdict(evaluate(&store, 0)), Verdict::Allow);

    store.set("abc", 0);
    assert_eq!(
        login_verdict(evaluate(&store, 1)),
        Verdict::Redirect(DASHBOARD_PATH.to_owned())
    );
}

#[test]
fn logout_clears_store_for_login_entry() {
    let store = MemorySessionStore::default();
    store.set("abc", 0);
    store.clear();
    assert_eq!(store.get(), Session::default());
    assert_eq!(login_verdict(evaluate(&store, 1)), Verdict::Allow);
}
