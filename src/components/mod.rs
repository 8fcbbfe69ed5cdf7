//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome and list surfaces while reading
//! shared state from Leptos context providers; route-level orchestration
//! stays in `pages`.

pub mod admin_layout;
pub mod project_card;
pub mod sidebar;
pub mod toast_host;
pub mod topbar;
