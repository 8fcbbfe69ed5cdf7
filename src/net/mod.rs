//! Networking modules for the catalog REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the HTTP calls and bearer-token attachment; `types` defines
//! the shared wire schema.

pub mod api;
pub mod types;
