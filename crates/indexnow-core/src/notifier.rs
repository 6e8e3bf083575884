//! The IndexNow notifier
//!
//! The Notifier is responsible for:
//! - Building submission requests (single-URL GET, batch POST)
//! - Sending them through the injected [`HttpTransport`]
//! - Classifying the response status code into success or a typed error
//!
//! ## Call Flow
//!
//! ```text
//! submit_url / submit_list
//!         │
//!         ▼  validate (no request on failure)
//!   build request          (pure: same inputs → same request)
//!         │
//!         ▼
//!   HttpTransport::send    (exactly one outbound request)
//!         │
//!         ▼
//!   classify status        (200/202 → Ok(response), else → Error::Submission)
//! ```
//!
//! Configuration is immutable after construction, so one `Notifier` can be
//! shared across concurrent tasks without coordination.

use std::sync::Arc;

use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{Method, Request, Response};
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::error::{Error, Result};
use crate::messages::StatusMessageTable;
use crate::submission::{UrlListSubmission, UrlSubmission};
use crate::traits::HttpTransport;

/// Search engine host used when none is configured
pub const DEFAULT_SEARCH_ENGINE: &str = "www.bing.com";

/// Endpoint path, shared by both submission shapes
const INDEXNOW_PATH: &str = "/indexNow";

/// Status codes the protocol defines as accepted
const SUCCESS_STATUSES: &[u16] = &[200, 202];

/// `User-Agent` attached to every outbound request
const USER_AGENT_VALUE: &str = concat!(
    "RustIndexNow/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/indexnow-rs/indexnow)"
);

/// IndexNow submission client
///
/// Holds only immutable configuration; every call is independent and
/// stateless with respect to prior calls. Timeouts, connection handling and
/// cancellation belong to the injected transport.
pub struct Notifier {
    /// Transport used to send built requests
    transport: Arc<dyn HttpTransport>,

    /// Host of the participating search engine (e.g. "www.bing.com")
    search_engine: String,

    /// Status → explanation mapping used for classification
    messages: StatusMessageTable,
}

impl Notifier {
    /// Create a notifier targeting the default search engine with the
    /// built-in status messages
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            search_engine: DEFAULT_SEARCH_ENGINE.to_string(),
            messages: StatusMessageTable::new(),
        }
    }

    /// Target a different participating search engine
    pub fn with_search_engine(mut self, search_engine: impl Into<String>) -> Self {
        self.search_engine = search_engine.into();
        self
    }

    /// Replace the status-message table
    pub fn with_messages(mut self, messages: StatusMessageTable) -> Self {
        self.messages = messages;
        self
    }

    /// Submit one URL to IndexNow
    ///
    /// Issues `GET https://{engine}/indexNow?host=..&key=..&url=..` with the
    /// query form-encoded.
    ///
    /// # Parameters
    ///
    /// - `host`: host the URL belongs to (non-empty)
    /// - `key`: per-site key proving ownership (non-empty)
    /// - `url`: the changed URL (non-empty)
    ///
    /// # Returns
    ///
    /// - `Ok(response)`: the engine answered 200 or 202; the raw response is
    ///   returned unchanged
    /// - `Err(Error::Submission)`: any other status, with the explanation
    ///   resolved from the configured table and the full response attached
    /// - `Err(Error::InvalidInput)`: a precondition failed; no request was sent
    /// - `Err(Error::Transport)`: the network call itself failed
    pub async fn submit_url(&self, host: &str, key: &str, url: &str) -> Result<Response<Vec<u8>>> {
        let submission = UrlSubmission::new(host, key, url);
        submission.validate()?;

        let request = self.build_url_request(&submission)?;
        self.dispatch(request).await
    }

    /// Submit a set of URLs to IndexNow
    ///
    /// Issues `POST https://{engine}/indexNow` with a JSON body
    /// `{host, key, urlList, keyLocation?}`; `keyLocation` appears in the
    /// body only when supplied.
    ///
    /// # Parameters
    ///
    /// - `host`: host the URLs belong to (non-empty)
    /// - `key`: per-site key proving ownership (non-empty)
    /// - `url_list`: non-empty ordered list of non-empty URLs
    /// - `key_location`: where the key file is hosted, if not at the default
    ///   location (non-empty when given)
    ///
    /// # Returns
    ///
    /// Same contract as [`submit_url`](Self::submit_url).
    pub async fn submit_list(
        &self,
        host: &str,
        key: &str,
        url_list: &[String],
        key_location: Option<&str>,
    ) -> Result<Response<Vec<u8>>> {
        let submission = UrlListSubmission::new(
            host,
            key,
            url_list.to_vec(),
            key_location.map(str::to_string),
        );
        submission.validate()?;

        let request = self.build_list_request(&submission)?;
        self.dispatch(request).await
    }

    /// Build the single-URL GET request (pure)
    fn build_url_request(&self, submission: &UrlSubmission) -> Result<Request<Vec<u8>>> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("host", &submission.host)
            .append_pair("key", &submission.key)
            .append_pair("url", &submission.url)
            .finish();

        let request = Request::builder()
            .method(Method::GET)
            .uri(format!(
                "https://{}{}?{}",
                self.search_engine, INDEXNOW_PATH, query
            ))
            .header(USER_AGENT, USER_AGENT_VALUE)
            .body(Vec::new())?;

        Ok(request)
    }

    /// Build the batch POST request (pure)
    ///
    /// serde_json leaves Unicode code points and forward slashes unescaped,
    /// which is exactly the body shape the protocol expects.
    fn build_list_request(&self, submission: &UrlListSubmission) -> Result<Request<Vec<u8>>> {
        let body = serde_json::to_vec(submission)?;

        let request = Request::builder()
            .method(Method::POST)
            .uri(format!("https://{}{}", self.search_engine, INDEXNOW_PATH))
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body)?;

        Ok(request)
    }

    /// Send a built request and classify the response
    async fn dispatch(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>> {
        debug!(
            method = %request.method(),
            uri = %request.uri(),
            "submitting to IndexNow endpoint"
        );

        let response = self.transport.send(request).await?;
        let status = response.status().as_u16();

        if SUCCESS_STATUSES.contains(&status) {
            debug!(status, "submission accepted");
            return Ok(response);
        }

        let message = self.messages.resolve(status);
        warn!(status, reason = message, "submission rejected");
        Err(Error::submission(message, response))
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("search_engine", &self.search_engine)
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}
