//! HTTP request model and the transport seam.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Tests and non-browser builds plug in their own [`Transport`].
//!
//! ERROR HANDLING
//! ==============
//! A transport only fails with [`ApiError::Network`]; non-success statuses are
//! returned as ordinary responses and classified by the caller.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

pub const AUTHORIZATION: &str = "Authorization";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// An outgoing API request, addressed by full URL.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Set by calls that must never carry the session's bearer token.
    pub skip_authorization: bool,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            skip_authorization: false,
        }
    }

    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn bearer(self, token: &str) -> Self {
        self.header(AUTHORIZATION, format!("Bearer {token}"))
    }

    #[must_use]
    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized.
    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?);
        Ok(self)
    }

    /// Opt out of automatic bearer attachment.
    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.skip_authorization = true;
        self
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a success body, or classify the failure.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for non-success statuses, or
    /// [`ApiError::Decode`] if the body does not match `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if !self.ok() {
            return Err(ApiError::from_response(self.status, &self.body));
        }
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Discard a success body, or classify the failure.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for non-success statuses.
    pub fn into_unit(self) -> Result<(), ApiError> {
        if self.ok() { Ok(()) } else { Err(ApiError::from_response(self.status, &self.body)) }
    }
}

/// Executes requests. Futures are `?Send`: the browser is single-threaded.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `req` and return whatever response arrived.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser transport backed by `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::{Method as GlooMethod, RequestBuilder};

            let method = match req.method {
                Method::Get => GlooMethod::GET,
                Method::Post => GlooMethod::POST,
                Method::Put => GlooMethod::PUT,
                Method::Patch => GlooMethod::PATCH,
                Method::Delete => GlooMethod::DELETE,
            };
            let mut builder = RequestBuilder::new(&req.url).method(method);
            if !req.query.is_empty() {
                builder = builder.query(req.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            for (name, value) in &req.headers {
                builder = builder.header(name, value);
            }
            let request = match &req.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = req;
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}
