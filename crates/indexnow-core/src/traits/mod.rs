//! Core traits for the IndexNow client
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`HttpTransport`]: Send one HTTP request and return the response

pub mod http_transport;

pub use http_transport::HttpTransport;
