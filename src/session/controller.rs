//! Session controller: the only writer of session state and the token store.
//!
//! DESIGN
//! ======
//! `Session` is a cheap clonable handle (`Rc`) created once at startup and
//! provided through context. State lives in an `ArcRwSignal` so logout resets
//! it in place and observers keep the same signal.
//!
//! Every token mutation writes the store and the signal together. Identity
//! data and tokens are committed in a single signal update, so readers never
//! see a token without its user.
//!
//! Initialization is memoized: the first caller stores a shared future and
//! later callers await that same future, so concurrent navigations issue at
//! most one identity request.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use leptos::prelude::*;

use super::state::SessionState;
use super::store::{KeyValueStorage, TokenStore};
use crate::config::ClientConfig;
use crate::error::{ApiError, SessionError};
use crate::net::auth_api::AuthApi;
use crate::net::authorizer::{AuthorizedClient, TokenSource};
use crate::net::transport::Transport;
use crate::net::types::{LoginResponse, Usuario};

type PendingInit = Shared<LocalBoxFuture<'static, ()>>;

enum InitPhase {
    NotStarted,
    InFlight(PendingInit),
    Done,
}

struct SessionInner {
    state: ArcRwSignal<SessionState>,
    store: TokenStore,
    api: Rc<dyn AuthApi>,
    refresh_capable: bool,
    init: RefCell<InitPhase>,
}

/// Tokens and user accepted from the server, ready to commit.
struct Credentials {
    user: Usuario,
    access_token: String,
    refresh_token: Option<String>,
}

#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl Session {
    pub fn new(config: &ClientConfig, storage: Rc<dyn KeyValueStorage>, api: Rc<dyn AuthApi>) -> Self {
        let store = TokenStore::new(storage, config.access_token_key, config.refresh_token_key);
        Self {
            inner: Rc::new(SessionInner {
                state: ArcRwSignal::new(SessionState::new(config.refresh_capable)),
                store,
                api,
                refresh_capable: config.refresh_capable,
                init: RefCell::new(InitPhase::NotStarted),
            }),
        }
    }

    // =========================================================================
    // READ ACCESSORS
    // =========================================================================

    /// Reactive read-only view for components.
    #[must_use]
    pub fn state(&self) -> ArcReadSignal<SessionState> {
        self.inner.state.read_only()
    }

    /// Untracked copy of the committed state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.get_untracked()
    }

    #[must_use]
    pub fn refresh_capable(&self) -> bool {
        self.inner.refresh_capable
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.state.with(|s| s.initialized)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.with(SessionState::is_authenticated)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.inner.state.with(SessionState::is_admin)
    }

    #[must_use]
    pub fn user(&self) -> Option<Usuario> {
        self.inner.state.with(|s| s.user.clone())
    }

    /// API client whose requests carry this session's bearer token.
    pub fn client(&self, transport: Rc<dyn Transport>, api_base: impl Into<String>) -> AuthorizedClient {
        AuthorizedClient::new(transport, Rc::new(self.clone()), api_base)
    }

    // =========================================================================
    // INITIALIZE
    // =========================================================================

    /// Restore the session from the token store, once per application lifetime.
    ///
    /// Concurrent callers share the in-flight run. After it settles this
    /// returns immediately. Always ends with `initialized == true`.
    pub async fn initialize(&self) {
        let Some(pending) = self.pending_init() else {
            return;
        };
        pending.await;
        *self.inner.init.borrow_mut() = InitPhase::Done;
    }

    fn pending_init(&self) -> Option<PendingInit> {
        let mut phase = self.inner.init.borrow_mut();
        let existing = match &*phase {
            InitPhase::Done => return None,
            InitPhase::InFlight(pending) => Some(pending.clone()),
            InitPhase::NotStarted => None,
        };
        if existing.is_some() {
            return existing;
        }

        let session = self.clone();
        let pending = async move { session.run_initialize().await }.boxed_local().shared();
        *phase = InitPhase::InFlight(pending.clone());
        drop(phase);

        // Drive to completion even if every guard awaiting it is dropped.
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(pending.clone());

        Some(pending)
    }

    async fn run_initialize(&self) {
        let inner = &self.inner;
        let access_token = inner.store.access_token();
        let refresh_token = if inner.refresh_capable { inner.store.refresh_token() } else { None };

        match (access_token, refresh_token) {
            (Some(access_token), refresh_token) if !inner.refresh_capable || refresh_token.is_some() => {
                log::debug!("stored session found, verifying identity");
                match inner.api.me(&access_token).await {
                    Ok(user) => {
                        log::info!("session restored for user {}", user.id);
                        self.commit(Credentials { user, access_token, refresh_token });
                    }
                    Err(e) => {
                        log::warn!("stored session rejected: {e}");
                        self.logout();
                    }
                }
            }
            _ => {
                log::debug!("no stored session");
                self.logout();
            }
        }

        inner.state.update(|s| s.initialized = true);
    }

    // =========================================================================
    // LOGIN / LOGOUT
    // =========================================================================

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns the failing [`ApiError`] unchanged so the caller can show it; the session
    /// is left anonymous.
    pub async fn login(&self, email: &str, senha: &str) -> Result<Usuario, ApiError> {
        let result = self.inner.api.login(email, senha).await.and_then(|resp| self.accept_login(resp));
        match result {
            Ok(credentials) => {
                let user = credentials.user.clone();
                log::info!("login succeeded for user {}", user.id);
                self.commit(credentials);
                Ok(user)
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                self.logout();
                Err(e)
            }
        }
    }

    fn accept_login(&self, resp: LoginResponse) -> Result<Credentials, ApiError> {
        if resp.access_token.is_empty() {
            return Err(ApiError::Decode("empty access_token".to_owned()));
        }
        let refresh_token = if self.inner.refresh_capable {
            match resp.refresh_token.filter(|t| !t.is_empty()) {
                Some(token) => Some(token),
                None => return Err(ApiError::Decode("missing refresh_token".to_owned())),
            }
        } else {
            None
        };
        Ok(Credentials { user: resp.usuario, access_token: resp.access_token, refresh_token })
    }

    /// Drop the session from memory and storage. Never fails.
    pub fn logout(&self) {
        self.inner.store.clear();
        self.inner.state.update(SessionState::clear);
    }

    fn commit(&self, credentials: Credentials) {
        let Credentials { user, access_token, refresh_token } = credentials;
        self.inner.store.set_access_token(Some(&access_token));
        if self.inner.refresh_capable {
            self.inner.store.set_refresh_token(refresh_token.as_deref());
        }
        self.inner.state.update(|s| {
            s.user = Some(user);
            s.access_token = Some(access_token);
            s.refresh_token = refresh_token;
        });
    }

    // =========================================================================
    // REFRESH / LOAD USER
    // =========================================================================

    /// Replace the access token using the refresh token.
    ///
    /// # Errors
    ///
    /// - [`SessionError::RefreshUnavailable`] when refresh tokens are disabled
    ///   (state untouched).
    /// - [`SessionError::MissingRefreshToken`] or [`SessionError::Api`] otherwise;
    ///   in both cases the whole session is logged out, unless the session was
    ///   replaced while the request was in flight.
    pub async fn refresh(&self) -> Result<(), SessionError> {
        if !self.inner.refresh_capable {
            return Err(SessionError::RefreshUnavailable);
        }
        let Some(refresh_token) = self.inner.state.with_untracked(|s| s.refresh_token.clone()) else {
            self.logout();
            return Err(SessionError::MissingRefreshToken);
        };

        let result = self.inner.api.refresh(&refresh_token).await;

        // A logout or re-login during the request wins over this result,
        // whether it succeeded or failed.
        let current = self.inner.state.with_untracked(|s| s.refresh_token.clone());
        if current.as_deref() != Some(refresh_token.as_str()) {
            log::debug!("discarding refresh result for a replaced session");
            return result.map(drop).map_err(SessionError::from);
        }

        match result {
            Ok(access_token) => {
                self.inner.store.set_access_token(Some(&access_token));
                self.inner.state.update(|s| s.access_token = Some(access_token));
                log::debug!("access token refreshed");
                Ok(())
            }
            Err(e) => {
                log::warn!("token refresh failed, ending session: {e}");
                self.logout();
                Err(e.into())
            }
        }
    }

    /// Re-fetch the user for the committed access token.
    ///
    /// # Errors
    ///
    /// Returns the identity endpoint's [`ApiError`]; state is not modified on
    /// failure, the caller decides whether to log out.
    pub async fn load_user(&self) -> Result<Usuario, ApiError> {
        let Some(access_token) = self.inner.state.with_untracked(|s| s.access_token.clone()) else {
            return Err(ApiError::Auth { status: 401, message: "no access token".to_owned() });
        };
        let user = self.inner.api.me(&access_token).await?;
        self.inner.state.update(|s| {
            if s.access_token.as_deref() == Some(access_token.as_str()) {
                s.user = Some(user.clone());
            }
        });
        Ok(user)
    }
}

impl TokenSource for Session {
    fn access_token(&self) -> Option<String> {
        self.inner.state.with_untracked(|s| s.access_token.clone())
    }
}
