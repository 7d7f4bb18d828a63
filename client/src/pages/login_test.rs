use super::*;

#[test]
fn page_title_names_selected_role() {
    assert_eq!(page_title(Role::Student), "Student Login");
    assert_eq!(page_title(Role::Admin), "Admin Login");
}

#[test]
fn bypass_banner_only_for_admin_with_flag() {
    let on = LoginConfig { dev_bypass_admin: true };
    assert_eq!(bypass_banner(on, Role::Admin), "Dev bypass enabled: admin auth skipped");
    assert_eq!(bypass_banner(on, Role::Faculty), "Make sure you have the correct credentials.");
    assert_eq!(
        bypass_banner(LoginConfig::default(), Role::Admin),
        "Make sure you have the correct credentials."
    );
}

#[test]
fn query_role_accepts_known_values_case_insensitively() {
    assert_eq!(query_role(Some("faculty")), Some(Role::Faculty));
    assert_eq!(query_role(Some("ADMIN")), Some(Role::Admin));
}

#[test]
fn query_role_ignores_unknown_and_missing() {
    assert_eq!(query_role(Some("principal")), None);
    assert_eq!(query_role(None), None);
}

#[test]
fn selecting_role_targets_bookmarkable_route() {
    for role in Role::ALL {
        assert_eq!(login_route(role), format!("/login?type={}", role.slug()));
    }
}
