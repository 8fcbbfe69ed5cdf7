//! Browser-persisted session state (auth token + login timestamp).
//!
//! SYSTEM CONTEXT
//! ==============
//! The session pair lives in `localStorage` so it survives page reloads
//! within one browser profile. Route guards read it through the
//! `SessionStore` trait so decision logic stays testable without a browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

/// Validity window after login, in milliseconds (30 minutes).
pub const SESSION_TTL_MS: i64 = 30 * 60 * 1000;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const LOGIN_TIME_KEY: &str = "loginTime";

/// A snapshot of the persisted session pair.
///
/// INVARIANT: `token` and `login_time_ms` are written together and cleared
/// together. A snapshot with exactly one present is corruption; readers must
/// wipe the store before acting on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub login_time_ms: Option<i64>,
}

/// Storage for the session pair plus any colocated session-scoped state.
///
/// `clear` wipes the whole scope and is idempotent. No network, no failure
/// modes: absent or unreadable fields read back as `None`.
pub trait SessionStore {
    fn get(&self) -> Session;
    fn set(&self, token: &str, login_time_ms: i64);
    fn clear(&self);
}

/// Production store backed by `localStorage`.
///
/// Outside the browser (SSR, native tests) every read is empty and every
/// write is a no-op.
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Session {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return Session::default();
            };
            let token = storage.get_item(TOKEN_KEY).ok().flatten();
            let login_time_ms = storage
                .get_item(LOGIN_TIME_KEY)
                .ok()
                .flatten()
                .and_then(|raw| raw.parse::<i64>().ok());
            Session { token, login_time_ms }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Session::default()
        }
    }

    fn set(&self, token: &str, login_time_ms: i64) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(LOGIN_TIME_KEY, &login_time_ms.to_string());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, login_time_ms);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.clear();
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// In-memory store with the same semantics, for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RefCell<Session>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Session {
        self.inner.borrow().clone()
    }

    fn set(&self, token: &str, login_time_ms: i64) {
        *self.inner.borrow_mut() = Session {
            token: Some(token.to_owned()),
            login_time_ms: Some(login_time_ms),
        };
    }

    fn clear(&self) {
        *self.inner.borrow_mut() = Session::default();
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// The login flow records this value and the guard later compares against
/// it, so both must use this one source. Returns 0 outside the browser.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
