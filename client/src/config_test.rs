use super::*;

#[test]
fn defaults_when_unset() {
    let config = ClientConfig::from_values(None, None);
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api_base, "/api");
    assert!(!config.login.dev_bypass_admin);
}

#[test]
fn api_base_trailing_slash_trimmed() {
    let config = ClientConfig::from_values(Some("https://api.college.edu/api/"), None);
    assert_eq!(config.api_base, "https://api.college.edu/api");
}

#[test]
fn blank_api_base_uses_default() {
    assert_eq!(ClientConfig::from_values(Some("   "), None).api_base, "/api");
}

#[test]
fn bypass_enabled_by_truthy_values() {
    for raw in ["1", "true", "YES", " on "] {
        assert!(ClientConfig::from_values(None, Some(raw)).login.dev_bypass_admin, "{raw:?}");
    }
}

#[test]
fn bypass_stays_off_for_falsy_or_garbage() {
    for raw in ["0", "false", "off", "maybe", ""] {
        assert!(!ClientConfig::from_values(None, Some(raw)).login.dev_bypass_admin, "{raw:?}");
    }
}

#[test]
fn parse_bool_unknown_is_none() {
    assert_eq!(parse_bool("enabled"), None);
}
