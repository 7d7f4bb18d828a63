use super::*;
use portal::Role;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

#[test]
fn loaded_clears_loading_flag() {
    let state = AuthState::loaded(Some(Session::new("t", Role::Faculty)));
    assert!(!state.loading);
    assert_eq!(state.session.map(|s| s.role), Some(Role::Faculty));
}
