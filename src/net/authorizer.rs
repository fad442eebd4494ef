//! Request authorizer: bearer-token attachment for outgoing API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every pedidos/usuarios call goes through [`AuthorizedClient`]. It only
//! reads the current access token; it knows nothing about refresh and never
//! retries a 401.

#[cfg(test)]
#[path = "authorizer_test.rs"]
mod authorizer_test;

use std::rc::Rc;

use serde::de::DeserializeOwned;

use super::transport::{AUTHORIZATION, HttpRequest, HttpResponse, Transport};
use crate::error::ApiError;

/// Read-only view of the committed access token.
pub trait TokenSource {
    fn access_token(&self) -> Option<String>;
}

/// Attach `Authorization: Bearer <token>` unless the request opted out or
/// already carries an authorization header. Returns whether a header was added.
pub fn authorize(req: &mut HttpRequest, token: Option<&str>) -> bool {
    if req.skip_authorization || req.header_value(AUTHORIZATION).is_some() {
        return false;
    }
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return false;
    };
    req.headers.push((AUTHORIZATION.to_owned(), format!("Bearer {token}")));
    true
}

/// API client that authorizes every request before handing it to the transport.
#[derive(Clone)]
pub struct AuthorizedClient {
    transport: Rc<dyn Transport>,
    tokens: Rc<dyn TokenSource>,
    api_base: String,
}

impl AuthorizedClient {
    pub fn new(transport: Rc<dyn Transport>, tokens: Rc<dyn TokenSource>, api_base: impl Into<String>) -> Self {
        Self { transport, tokens, api_base: api_base.into() }
    }

    /// Full URL for an API-relative path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// Authorize and send `req`, decoding a JSON success body.
    ///
    /// # Errors
    ///
    /// Returns the transport failure, the classified status error, or a
    /// decode error.
    pub async fn send_json<T: DeserializeOwned>(&self, req: HttpRequest) -> Result<T, ApiError> {
        self.send(req).await?.into_json()
    }

    /// Authorize and send `req`, ignoring the success body.
    ///
    /// # Errors
    ///
    /// Returns the transport failure or the classified status error.
    pub async fn send_unit(&self, req: HttpRequest) -> Result<(), ApiError> {
        self.send(req).await?.into_unit()
    }

    async fn send(&self, mut req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let token = self.tokens.access_token();
        authorize(&mut req, token.as_deref());
        let resp = self.transport.execute(req).await?;
        if resp.status == 401 {
            log::warn!("api call rejected with 401; session token may be stale");
        }
        Ok(resp)
    }
}
