//! Reusable UI components.
//!
//! DESIGN
//! ======
//! Components read shared state from context and keep request orchestration
//! local to their event handlers.

pub mod chat_panel;
pub mod nav_bar;
pub mod protected_route;
pub mod todo_form;
pub mod todo_item;
pub mod todo_list;
