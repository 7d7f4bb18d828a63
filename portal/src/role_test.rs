use super::*;

// =============================================================================
// labels and routes
// =============================================================================

#[test]
fn default_role_is_student() {
    assert_eq!(Role::default(), Role::Student);
}

#[test]
fn slug_is_lowercased_label() {
    for role in Role::ALL {
        assert_eq!(role.slug(), role.label().to_lowercase());
    }
}

#[test]
fn home_route_uses_slug() {
    assert_eq!(Role::Student.home_route(), "/student");
    assert_eq!(Role::Faculty.home_route(), "/faculty");
    assert_eq!(Role::Admin.home_route(), "/admin");
}

#[test]
fn login_path_is_role_scoped() {
    assert_eq!(Role::Faculty.login_path(), "/faculty/login");
}

#[test]
fn query_string_carries_lowercased_role() {
    for role in Role::ALL {
        assert_eq!(role.query_string(), format!("type={}", role.slug()));
    }
}

#[test]
fn login_route_preselects_role() {
    assert_eq!(login_route(Role::Admin), "/login?type=admin");
}

// =============================================================================
// query normalization
// =============================================================================

#[test]
fn from_query_accepts_any_case() {
    assert_eq!(Role::from_query("admin"), Some(Role::Admin));
    assert_eq!(Role::from_query("Admin"), Some(Role::Admin));
    assert_eq!(Role::from_query("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::from_query("fAcUlTy"), Some(Role::Faculty));
}

#[test]
fn from_query_unknown_is_none() {
    assert_eq!(Role::from_query("principal"), None);
    assert_eq!(Role::from_query(""), None);
}

#[test]
fn initial_role_adopts_known_query() {
    assert_eq!(initial_role(Some("faculty")), Role::Faculty);
}

#[test]
fn initial_role_keeps_default_for_unknown_or_missing() {
    assert_eq!(initial_role(Some("janitor")), Role::Student);
    assert_eq!(initial_role(None), Role::Student);
}

#[test]
fn from_slug_is_exact() {
    assert_eq!(Role::from_slug("student"), Some(Role::Student));
    assert_eq!(Role::from_slug("Student"), None);
}

// =============================================================================
// Display / FromStr / serde
// =============================================================================

#[test]
fn display_matches_label() {
    assert_eq!(Role::Admin.to_string(), "Admin");
}

#[test]
fn from_str_round_trips_label() {
    for role in Role::ALL {
        assert_eq!(role.label().parse::<Role>(), Ok(role));
    }
}

#[test]
fn from_str_unknown_reports_value() {
    let err = "Dean".parse::<Role>().unwrap_err();
    assert_eq!(err.to_string(), "unknown role: Dean");
}

#[test]
fn serde_uses_label() {
    assert_eq!(serde_json::to_string(&Role::Faculty).unwrap(), "\"Faculty\"");
    let role: Role = serde_json::from_str("\"Admin\"").unwrap();
    assert_eq!(role, Role::Admin);
}
