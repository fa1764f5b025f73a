//! HTTP transport for the session endpoint.
//!
//! Client-side (hydrate): a real `GET` via `gloo-net` with browser
//! credentials attached. Everywhere else the transport reports
//! `Unavailable`, since the session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! HTTP-level rejections are not errors here: any status code comes back as
//! an `HttpReply`. Only failures to complete the exchange become
//! `TransportError`, which the session manager logs and swallows.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::HttpReply;

/// Failure to complete the session request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("session request failed: {0}")]
    Request(String),
    #[error("reading session response failed: {0}")]
    Body(String),
    #[error("session transport not available outside the browser")]
    Unavailable,
}

/// Fetches the raw session response.
pub trait SessionTransport: Send + Sync {
    fn fetch_session(&self) -> impl Future<Output = Result<HttpReply, TransportError>>;
}

/// Transport backed by the browser's `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSessionTransport {
    endpoint: String,
}

impl HttpSessionTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SessionTransport for HttpSessionTransport {
    async fn fetch_session(&self) -> Result<HttpReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = resp.status();
            if !resp.ok() {
                return Ok(HttpReply::new(status, String::new()));
            }
            let body = resp.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
            Ok(HttpReply::new(status, body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(TransportError::Unavailable)
        }
    }
}
