//! Shared fixtures for unit tests: scripted API/transport mocks, a recording
//! notifier and session builders.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::net::auth_api::AuthApi;
use crate::net::authorizer::TokenSource;
use crate::net::transport::{HttpRequest, HttpResponse, Transport};
use crate::net::types::{LoginResponse, Usuario};
use crate::session::controller::Session;
use crate::session::store::MemoryStorage;
use crate::util::notify::{NoticeLevel, Notifier};

#[must_use]
pub fn usuario(id: i64, admin: bool) -> Usuario {
    Usuario {
        id,
        nome: format!("Usuário {id}"),
        email: format!("u{id}@example.com"),
        admin,
        extra: serde_json::Map::new(),
    }
}

#[must_use]
pub fn login_response(user: Usuario, access: &str, refresh: Option<&str>) -> LoginResponse {
    LoginResponse { usuario: user, access_token: access.to_owned(), refresh_token: refresh.map(str::to_owned) }
}

#[must_use]
pub fn config(refresh_capable: bool) -> ClientConfig {
    ClientConfig { refresh_capable, ..ClientConfig::default() }
}

#[must_use]
pub fn session_with(refresh_capable: bool, storage: &MemoryStorage, api: &Rc<MockAuthApi>) -> Session {
    Session::new(&config(refresh_capable), Rc::new(storage.clone()), api.clone())
}

fn unscripted<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("unscripted call".to_owned()))
}

#[must_use]
pub fn unauthorized() -> ApiError {
    ApiError::Auth { status: 401, message: "Token has expired".to_owned() }
}

// =============================================================================
// MockAuthApi
// =============================================================================

/// Scripted `AuthApi`. Every call suspends once before answering so tests can
/// interleave concurrent callers.
#[derive(Default)]
pub struct MockAuthApi {
    pub me_calls: Cell<usize>,
    pub login_calls: Cell<usize>,
    pub refresh_calls: Cell<usize>,
    pub me_tokens: RefCell<Vec<String>>,
    me_results: RefCell<VecDeque<Result<Usuario, ApiError>>>,
    login_results: RefCell<VecDeque<Result<LoginResponse, ApiError>>>,
    refresh_results: RefCell<VecDeque<Result<String, ApiError>>>,
}

impl MockAuthApi {
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn push_me(&self, result: Result<Usuario, ApiError>) {
        self.me_results.borrow_mut().push_back(result);
    }

    pub fn push_login(&self, result: Result<LoginResponse, ApiError>) {
        self.login_results.borrow_mut().push_back(result);
    }

    pub fn push_refresh(&self, result: Result<String, ApiError>) {
        self.refresh_results.borrow_mut().push_back(result);
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for MockAuthApi {
    async fn me(&self, access_token: &str) -> Result<Usuario, ApiError> {
        self.me_calls.set(self.me_calls.get() + 1);
        self.me_tokens.borrow_mut().push(access_token.to_owned());
        tokio::task::yield_now().await;
        self.me_results.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }

    async fn login(&self, _email: &str, _senha: &str) -> Result<LoginResponse, ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        tokio::task::yield_now().await;
        self.login_results.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<String, ApiError> {
        self.refresh_calls.set(self.refresh_calls.get() + 1);
        tokio::task::yield_now().await;
        self.refresh_results.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }
}

// =============================================================================
// MockTransport
// =============================================================================

/// Records requests and answers from a queue; `200 {}` once the queue is empty.
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Result<HttpResponse, ApiError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn push_ok(&self, body: &str) {
        self.push(Ok(HttpResponse { status: 200, body: body.to_owned() }));
    }

    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(req);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse { status: 200, body: "{}".to_owned() }))
    }
}

// =============================================================================
// Token source / notifier
// =============================================================================

pub struct FixedToken(pub Option<String>);

impl TokenSource for FixedToken {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    #[must_use]
    pub fn take(&self) -> Vec<(NoticeLevel, String)> {
        std::mem::take(&mut *self.notices.borrow_mut())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.borrow_mut().push((level, message.to_owned()));
    }
}
