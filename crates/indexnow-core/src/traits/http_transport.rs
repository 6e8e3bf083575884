// # HTTP Transport Trait
//
// Defines the interface for sending a fully-built HTTP request.
//
// ## Implementations
//
// - reqwest-based: `indexnow-transport-reqwest` crate
// - Test stubs: `tests/common/mod.rs`
//
// ## Usage
//
// ```rust,ignore
// use indexnow_core::{HttpTransport, Notifier};
// use std::sync::Arc;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let transport: Arc<dyn HttpTransport> = /* HttpTransport implementation */;
//     let notifier = Notifier::new(transport);
//
//     let response = notifier
//         .submit_url("example.com", "abc123", "https://example.com/page")
//         .await?;
//     println!("accepted: HTTP {}", response.status());
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::error::Result;

/// Trait for HTTP transport implementations
///
/// The `Notifier` builds complete requests (method, URL, headers, body) and
/// hands them to this trait for transmission; the transport owns everything
/// network-level: connection pooling, TLS, timeouts, cancellation.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Contract
///
/// - **Single-shot**: execute exactly one request per `send` call
/// - **Stateless**: no caching of responses, no request history
/// - **No retry**: a failed call is reported, never re-attempted; whether to
///   resubmit is the caller's decision
/// - **Error mapping**: network-level failures (DNS, connect, timeout) are
///   returned as [`Error::Transport`](crate::Error::Transport); a received
///   response is always `Ok`, whatever its status code — classification of
///   status codes is owned by the `Notifier`
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send one HTTP request and return the response
    ///
    /// # Parameters
    ///
    /// - `request`: a fully-built request; the transport must not alter its
    ///   method, URL, headers, or body
    ///
    /// # Returns
    ///
    /// - `Ok(response)`: a response was received (any status code)
    /// - `Err(Error::Transport)`: the network call itself failed
    async fn send(&self, request: http::Request<Vec<u8>>) -> Result<http::Response<Vec<u8>>>;
}
