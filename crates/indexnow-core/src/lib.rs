// # indexnow-core
//
// Core library for the IndexNow submission client.
//
// ## Architecture Overview
//
// This library provides everything needed to notify a search engine that a
// URL (or a batch of URLs) has changed, per the IndexNow protocol:
// - **HttpTransport**: Trait for sending one HTTP request (injected)
// - **Notifier**: Builds submission requests, sends them through the
//   transport, and classifies the response status code
// - **StatusMessageTable**: Immutable status-code → explanation mapping
// - **UrlSubmission / UrlListSubmission**: Validated payload types
//
// ## Design Principles
//
// 1. **Separation of Concerns**: The core knows the wire protocol; the HTTP
//    stack lives behind the `HttpTransport` trait (see the
//    `indexnow-transport-reqwest` crate for a ready-made implementation)
// 2. **Single-Shot**: One outbound request per call, no retries, no backoff,
//    no submission history
// 3. **Stateless**: A `Notifier` holds only immutable configuration, so
//    concurrent callers can share one instance without coordination
// 4. **Library-First**: No logging subscriber, no runtime, no global state

pub mod error;
pub mod messages;
pub mod notifier;
pub mod submission;
pub mod traits;

// Re-export core types for convenience
pub use error::{Error, Result};
pub use messages::StatusMessageTable;
pub use notifier::Notifier;
pub use submission::{UrlListSubmission, UrlSubmission};
pub use traits::HttpTransport;
