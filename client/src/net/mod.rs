//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the authenticated request client every resource client builds on,
//! `transport` is the HTTP seam beneath it, `error` the failure taxonomy, and
//! `types` the shared wire schema.

pub mod api;
pub mod chat_api;
pub mod error;
pub mod todo_api;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
