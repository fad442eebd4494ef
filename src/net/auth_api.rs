//! Remote identity, login and refresh endpoints.
//!
//! The session controller talks to the server only through [`AuthApi`], which
//! keeps it testable without a browser. [`HttpAuthApi`] is the real
//! implementation over a [`Transport`].
//!
//! None of these calls go through the request authorizer: login is sent
//! anonymous, `me` and `refresh` carry their own bearer explicitly.

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use std::rc::Rc;

use super::transport::{HttpRequest, Transport};
use super::types::{LoginRequest, LoginResponse, MeResponse, RefreshResponse, Usuario};
use crate::error::ApiError;

fn me_endpoint(api_base: &str) -> String {
    format!("{api_base}/auth/me")
}

fn login_endpoint(api_base: &str) -> String {
    format!("{api_base}/auth/login")
}

fn refresh_endpoint(api_base: &str) -> String {
    format!("{api_base}/auth/refresh")
}

#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// Fetch the user identified by `access_token`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Auth`] when the token is invalid or expired.
    async fn me(&self, access_token: &str) -> Result<Usuario, ApiError>;

    /// Exchange credentials for a user and token pair.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Auth`] for rejected credentials.
    async fn login(&self, email: &str, senha: &str) -> Result<LoginResponse, ApiError>;

    /// Exchange a refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the refresh token is rejected.
    async fn refresh(&self, refresh_token: &str) -> Result<String, ApiError>;
}

#[derive(Clone)]
pub struct HttpAuthApi {
    transport: Rc<dyn Transport>,
    api_base: String,
}

impl HttpAuthApi {
    pub fn new(transport: Rc<dyn Transport>, api_base: impl Into<String>) -> Self {
        Self { transport, api_base: api_base.into() }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn me(&self, access_token: &str) -> Result<Usuario, ApiError> {
        let req = HttpRequest::post(me_endpoint(&self.api_base)).bearer(access_token);
        let body: MeResponse = self.transport.execute(req).await?.into_json()?;
        Ok(body.usuario)
    }

    async fn login(&self, email: &str, senha: &str) -> Result<LoginResponse, ApiError> {
        let payload = LoginRequest { email: email.to_owned(), senha: senha.to_owned() };
        let req = HttpRequest::post(login_endpoint(&self.api_base)).anonymous().json(&payload)?;
        self.transport.execute(req).await?.into_json()
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, ApiError> {
        let req = HttpRequest::post(refresh_endpoint(&self.api_base)).bearer(refresh_token);
        let body: RefreshResponse = self.transport.execute(req).await?.into_json()?;
        if body.access_token.is_empty() {
            return Err(ApiError::Decode("empty access_token".to_owned()));
        }
        Ok(body.access_token)
    }
}
