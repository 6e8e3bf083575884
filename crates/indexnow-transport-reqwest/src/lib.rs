// # Reqwest HTTP Transport
//
// This crate provides a reqwest-backed `HttpTransport` implementation for
// the IndexNow client.
//
// ## Purpose
//
// `indexnow-core` carries no HTTP stack of its own; callers inject one via
// the `HttpTransport` trait. This crate is the ready-made choice for
// applications that do not already hold a configured client.
//
// ## Architecture
//
// The transport converts the core's `http::Request` into a
// `reqwest::Request`, executes it on a shared `reqwest::Client`, and folds
// the response back into an `http::Response<Vec<u8>>`. Network-level
// failures (DNS, connect, timeout, body read) surface as
// `Error::Transport`; a received response is always `Ok`, whatever its
// status code — classification belongs to the `Notifier`.
//
// Per the transport contract there is no retry, no caching, and no state
// beyond the client's connection pool.

use async_trait::async_trait;
use indexnow_core::{Error, HttpTransport, Result};
use std::time::Duration;
use tracing::debug;

/// Default timeout for the whole request/response round-trip (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed HTTP transport
///
/// Cheap to share: the inner `reqwest::Client` is an `Arc` internally, and
/// the transport itself is handed to the `Notifier` behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    /// HTTP client, built once and reused across submissions
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the default timeout
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create a transport with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already-configured client (proxies, TLS settings, ...)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: http::Request<Vec<u8>>) -> Result<http::Response<Vec<u8>>> {
        let request = reqwest::Request::try_from(request)
            .map_err(|e| Error::transport(format!("request conversion failed: {}", e)))?;

        debug!(method = %request.method(), url = %request.url(), "executing request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(format!("failed to read response body: {}", e)))?;

        let mut out = http::Response::new(body.to_vec());
        *out.status_mut() = status;
        *out.version_mut() = version;
        *out.headers_mut() = headers;

        Ok(out)
    }
}
