//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards, the request authorizer and user-aware components.
//! Written only by [`super::controller::Session`]; `is_authenticated` and
//! `is_admin` are derived on read and never stored.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::net::types::Usuario;

/// Committed session facts.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Set once the first initialization attempt has settled.
    pub initialized: bool,
    pub user: Option<Usuario>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// Whether a refresh token is part of a valid session.
    pub refresh_capable: bool,
}

impl SessionState {
    #[must_use]
    pub fn new(refresh_capable: bool) -> Self {
        Self { initialized: false, user: None, access_token: None, refresh_token: None, refresh_capable }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
            && self.access_token.is_some()
            && (!self.refresh_capable || self.refresh_token.is_some())
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user.as_ref().is_some_and(|u| u.admin)
    }

    /// Reset to the anonymous sub-state. `initialized` is left untouched.
    pub fn clear(&mut self) {
        self.user = None;
        self.access_token = None;
        self.refresh_token = None;
    }
}
