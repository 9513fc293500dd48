//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap their content in `ProtectedRoute`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod todo_detail;
