use super::*;
use crate::net::types::UserIdentity;

#[test]
fn dashboard_tab_defaults_to_tasks_and_toggles() {
    assert_eq!(DashboardTab::default(), DashboardTab::Tasks);
    assert_eq!(DashboardTab::Tasks.toggled(), DashboardTab::Assistant);
    assert_eq!(DashboardTab::Assistant.toggled(), DashboardTab::Tasks);
    assert_eq!(DashboardTab::Assistant.label(), "Assistant");
}

#[test]
fn greeting_uses_signed_in_name() {
    let auth = AuthState { user: Some(UserIdentity::from_email("ada@example.com")), loading: false, error: None };
    assert_eq!(greeting(&auth), "Welcome back, ada");
}

#[test]
fn greeting_without_user_is_generic() {
    assert_eq!(greeting(&AuthState::default()), "Welcome");
}
