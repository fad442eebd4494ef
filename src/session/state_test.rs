use super::*;
use crate::test_helpers::usuario;

fn authenticated(admin: bool, refresh_capable: bool) -> SessionState {
    SessionState {
        initialized: true,
        user: Some(usuario(1, admin)),
        access_token: Some("abc".to_owned()),
        refresh_token: refresh_capable.then(|| "def".to_owned()),
        refresh_capable,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_state_is_uninitialized_and_anonymous() {
    let state = SessionState::new(true);
    assert!(!state.initialized);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

// =============================================================
// is_authenticated
// =============================================================

#[test]
fn authenticated_requires_user_and_access_token() {
    assert!(authenticated(false, false).is_authenticated());

    let mut no_user = authenticated(false, false);
    no_user.user = None;
    assert!(!no_user.is_authenticated());

    let mut no_token = authenticated(false, false);
    no_token.access_token = None;
    assert!(!no_token.is_authenticated());
}

#[test]
fn refresh_variant_also_requires_refresh_token() {
    assert!(authenticated(false, true).is_authenticated());

    let mut no_refresh = authenticated(false, true);
    no_refresh.refresh_token = None;
    assert!(!no_refresh.is_authenticated());
}

#[test]
fn base_variant_ignores_refresh_token() {
    let mut state = authenticated(false, false);
    state.refresh_token = None;
    assert!(state.is_authenticated());
}

// =============================================================
// is_admin
// =============================================================

#[test]
fn admin_requires_flag_and_authentication() {
    assert!(authenticated(true, true).is_admin());
    assert!(!authenticated(false, true).is_admin());

    let mut orphan = authenticated(true, true);
    orphan.access_token = None;
    assert!(!orphan.is_admin());
}

#[test]
fn admin_implies_authenticated_for_every_combination() {
    for admin in [false, true] {
        for refresh_capable in [false, true] {
            for drop_access in [false, true] {
                for drop_refresh in [false, true] {
                    let mut state = authenticated(admin, refresh_capable);
                    if drop_access {
                        state.access_token = None;
                    }
                    if drop_refresh {
                        state.refresh_token = None;
                    }
                    assert!(!state.is_admin() || state.is_authenticated());
                }
            }
        }
    }
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_keeps_initialized_flag() {
    let mut state = authenticated(true, true);
    state.clear();
    assert!(state.initialized);
    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
    assert!(state.refresh_token.is_none());
}
