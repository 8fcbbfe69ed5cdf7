//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs provided as `RwSignal` context from the app
//! root so pages and components depend on small focused models.

pub mod toast;
