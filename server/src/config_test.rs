use super::*;

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", " On "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// env_parse: uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_parse_unset_returns_default() {
    assert_eq!(env_parse("__TEST_CFG_SURELY_UNSET_4411__", 42_u16), Ok(42));
}

#[test]
fn env_parse_reads_trimmed_value() {
    let key = "__TEST_CFG_PORT_5120__";
    unsafe { std::env::set_var(key, " 8080 ") };
    assert_eq!(env_parse(key, DEFAULT_PORT), Ok(8080));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_garbage_is_invalid() {
    let key = "__TEST_CFG_GARBAGE_5121__";
    unsafe { std::env::set_var(key, "lots") };
    assert_eq!(
        env_parse(key, DEFAULT_DB_MAX_CONNECTIONS),
        Err(ConfigError::Invalid { key: "__TEST_CFG_GARBAGE_5121__", value: "lots".into() })
    );
    unsafe { std::env::remove_var(key) };
}

#[test]
fn config_error_messages() {
    assert_eq!(ConfigError::Missing("DATABASE_URL").to_string(), "DATABASE_URL is required");
    assert_eq!(
        ConfigError::Invalid { key: "PORT", value: "x".into() }.to_string(),
        "invalid PORT: \"x\""
    );
}
