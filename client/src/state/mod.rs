//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `todos`, `chat`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod chat;
pub mod todos;
