//! Session-validity state machine and route-entry policies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply these verdicts before rendering: the admin shell
//! uses the protected-view policy, the login page the login-view policy.
//! Decisions are pure over a store snapshot and an injected clock; the only
//! side effect is the idempotent self-heal `clear` on corrupt or expired
//! sessions.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::session::{SESSION_TTL_MS, Session, SessionStore};

/// Login entry point.
pub const LOGIN_PATH: &str = "/";
/// Default screen after a successful login.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Classification of the stored session at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
    Expired,
}

/// What the navigation layer should do with the requested view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Redirect(String),
}

/// Classify the stored session as of `now_ms`.
///
/// A half-present pair is corruption and an over-TTL pair is expiry; both
/// wipe the store before the state is reported. A fully absent pair issues
/// no store write at all.
pub fn evaluate<S: SessionStore + ?Sized>(store: &S, now_ms: i64) -> SessionState {
    let Session { token, login_time_ms } = store.get();
    match (token, login_time_ms) {
        (Some(_), Some(login_time_ms)) => {
            if now_ms - login_time_ms > SESSION_TTL_MS {
                store.clear();
                SessionState::Expired
            } else {
                SessionState::Authenticated
            }
        }
        (None, None) => SessionState::Unauthenticated,
        _ => {
            store.clear();
            SessionState::Unauthenticated
        }
    }
}

/// Policy for admin screens: only an authenticated session may enter;
/// everything else bounces to the login entry point, remembering where the
/// visitor was headed.
pub fn protected_verdict(state: SessionState, requested: &str) -> Verdict {
    match state {
        SessionState::Authenticated => Verdict::Allow,
        SessionState::Unauthenticated | SessionState::Expired => {
            Verdict::Redirect(login_redirect_target(requested))
        }
    }
}

/// Policy for the login view: an authenticated session skips straight to
/// the dashboard instead of re-authenticating.
pub fn login_verdict(state: SessionState) -> Verdict {
    match state {
        SessionState::Authenticated => Verdict::Redirect(DASHBOARD_PATH.to_owned()),
        SessionState::Unauthenticated | SessionState::Expired => Verdict::Allow,
    }
}

/// Login target carrying the originally requested path as a `from` query
/// parameter. App routes are URL-safe literals, so no encoding is applied.
pub fn login_redirect_target(requested: &str) -> String {
    if requested.is_empty() || requested == LOGIN_PATH {
        LOGIN_PATH.to_owned()
    } else {
        format!("{LOGIN_PATH}?from={requested}")
    }
}

/// Where to land after a successful login. Only admin-area paths are
/// honored; anything else falls back to the dashboard.
pub fn post_login_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with("/admin") => path.to_owned(),
        _ => DASHBOARD_PATH.to_owned(),
    }
}
