//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, validation, submit
//! latching) and delegates rendering details to `components` and decision
//! logic to `util`.

pub mod add_project;
pub mod dashboard;
pub mod edit_project;
pub mod login;
pub mod projects;

/// Delay between a success toast and the follow-up navigation, so the
/// message is seen before the screen changes.
#[cfg(feature = "hydrate")]
pub(crate) const REDIRECT_DELAY_MS: u32 = 700;
