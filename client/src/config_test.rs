use super::*;

#[test]
fn defaults_point_at_local_backend() {
    let config = ClientConfig::from_values(None, None);
    assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
    assert!(!config.restore_session_on_startup);
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn base_url_trailing_slashes_are_trimmed() {
    let config = ClientConfig::from_values(Some("https://api.example.com//"), None);
    assert_eq!(config.api_base_url, "https://api.example.com");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let config = ClientConfig::from_values(Some("   "), None);
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn parse_bool_accepts_common_spellings() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

#[test]
fn restore_flag_reads_policy_value() {
    assert!(ClientConfig::from_values(None, Some("true")).restore_session_on_startup);
    assert!(!ClientConfig::from_values(None, Some("garbage")).restore_session_on_startup);
}
