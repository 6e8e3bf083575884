//! Test doubles and common utilities for submission contract tests
//!
//! This module provides a scripted transport stub that records every request
//! it is handed, so tests can assert on the exact wire shape the notifier
//! builds without any real network.

#![allow(dead_code)] // not every test binary uses every helper

use indexnow_core::error::{Error, Result};
use indexnow_core::traits::HttpTransport;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// A transport that replays scripted responses and records requests
pub struct StubTransport {
    /// Responses handed out in order, one per send() call
    responses: Mutex<VecDeque<http::Response<Vec<u8>>>>,
    /// Every request the notifier sent, in order
    requests: Mutex<Vec<http::Request<Vec<u8>>>>,
    /// Call counter for send()
    send_call_count: AtomicUsize,
}

impl StubTransport {
    /// Create a stub with an explicit response script
    pub fn new(responses: Vec<http::Response<Vec<u8>>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            send_call_count: AtomicUsize::new(0),
        })
    }

    /// Create a stub that answers every call with the given status
    /// (script of one; panics if sent to twice)
    pub fn with_status(status: u16) -> Arc<Self> {
        Self::new(vec![response(status)])
    }

    /// Create a stub scripted with one empty-bodied response per status
    pub fn with_statuses(statuses: &[u16]) -> Arc<Self> {
        Self::new(statuses.iter().map(|s| response(*s)).collect())
    }

    /// Get the number of times send() was called
    pub fn send_call_count(&self) -> usize {
        self.send_call_count.load(Ordering::SeqCst)
    }

    /// Access the recorded requests
    pub fn recorded(&self) -> MutexGuard<'_, Vec<http::Request<Vec<u8>>>> {
        self.requests.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl HttpTransport for StubTransport {
    async fn send(&self, request: http::Request<Vec<u8>>) -> Result<http::Response<Vec<u8>>> {
        self.send_call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("StubTransport: no scripted response left");
        Ok(response)
    }
}

/// A transport whose network call always fails
pub struct FailingTransport {
    message: &'static str,
}

impl FailingTransport {
    pub fn new(message: &'static str) -> Arc<Self> {
        Arc::new(Self { message })
    }
}

#[async_trait::async_trait]
impl HttpTransport for FailingTransport {
    async fn send(&self, _request: http::Request<Vec<u8>>) -> Result<http::Response<Vec<u8>>> {
        Err(Error::transport(self.message))
    }
}

/// Build an empty-bodied response with the given status
pub fn response(status: u16) -> http::Response<Vec<u8>> {
    http::Response::builder()
        .status(status)
        .body(Vec::new())
        .expect("valid response")
}

/// Build a response with headers and a body, for inspection tests
pub fn response_with(
    status: u16,
    headers: &[(&str, &str)],
    body: &[u8],
) -> http::Response<Vec<u8>> {
    let mut builder = http::Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(body.to_vec()).expect("valid response")
}

/// Decode a form-encoded query string back into (name, value) pairs
pub fn decode_query(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
