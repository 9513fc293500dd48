//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, cookies,
//! navigation, token decoding) from page and component logic to improve reuse
//! and testability.

pub mod auth;
pub mod cookie_mirror;
pub mod navigation;
pub mod token_claims;
pub mod token_store;
