//! Status-code → explanation mapping for IndexNow responses
//!
//! The IndexNow protocol documents a small fixed set of failure statuses.
//! The table is immutable once built and injected into the
//! [`Notifier`](crate::Notifier), so deployments can override individual
//! messages (e.g. for localization) without touching classification logic.

use std::collections::HashMap;

/// Built-in explanations for the failure statuses the protocol documents
const DEFAULT_MESSAGES: &[(u16, &str)] = &[
    (400, "IndexNow Bad Request: Invalid format"),
    (
        403,
        "IndexNow Forbidden: In case of key not valid (e.g. key not found, file found but key not in the file)",
    ),
    (
        422,
        "IndexNow Unprocessable Entity: In case of URLs which don\u{2019}t belong to the host or the key is not matching the schema in the protocol",
    ),
    (429, "IndexNow Too Many Requests (potential Spam)"),
];

/// Fallback for statuses outside the table
const UNEXPECTED_MESSAGE: &str = "Unexpected Server Response";

/// Immutable mapping from HTTP status code to human-readable explanation
#[derive(Debug, Clone)]
pub struct StatusMessageTable {
    messages: HashMap<u16, String>,
    fallback: String,
}

impl StatusMessageTable {
    /// Create a table with the protocol's built-in messages
    /// ({400, 403, 422, 429}) and the default fallback
    pub fn new() -> Self {
        Self {
            messages: DEFAULT_MESSAGES
                .iter()
                .map(|(status, msg)| (*status, (*msg).to_string()))
                .collect(),
            fallback: UNEXPECTED_MESSAGE.to_string(),
        }
    }

    /// Replace the whole mapping
    pub fn with_messages(mut self, messages: HashMap<u16, String>) -> Self {
        self.messages = messages;
        self
    }

    /// Override or add a single entry
    pub fn with_message(mut self, status: u16, message: impl Into<String>) -> Self {
        self.messages.insert(status, message.into());
        self
    }

    /// Replace the fallback used for unmapped statuses
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Resolve the explanation for a status code, falling back to the
    /// generic message when the code is not in the table
    pub fn resolve(&self, status: u16) -> &str {
        self.messages
            .get(&status)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// The fallback message for unmapped statuses
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for StatusMessageTable {
    fn default() -> Self {
        Self::new()
    }
}
