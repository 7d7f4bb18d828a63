use super::*;
use portal::Session;

#[test]
fn no_redirect_while_loading() {
    let state = AuthState { session: None, loading: true };
    assert_eq!(unauth_redirect(&state, Role::Student), None);
}

#[test]
fn redirect_to_role_login_when_session_missing() {
    let state = AuthState { session: None, loading: false };
    assert_eq!(unauth_redirect(&state, Role::Faculty).as_deref(), Some("/login?type=faculty"));
}

#[test]
fn redirect_when_session_belongs_to_other_role() {
    let state = AuthState { session: Some(Session::new("t", Role::Student)), loading: false };
    assert_eq!(unauth_redirect(&state, Role::Admin).as_deref(), Some("/login?type=admin"));
}

#[test]
fn no_redirect_for_matching_session() {
    let state = AuthState { session: Some(Session::new("t", Role::Admin)), loading: false };
    assert_eq!(unauth_redirect(&state, Role::Admin), None);
}
