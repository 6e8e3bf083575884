//! Submission payload types
//!
//! Single-URL and batch submissions are distinct types rather than one union:
//! their wire shapes differ (form-encoded GET query vs JSON POST body), and
//! merging them would obscure the contract.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single-URL submission (`GET /indexNow?host=..&key=..&url=..`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlSubmission {
    /// Host the submitted URL belongs to
    pub host: String,
    /// Per-site key proving ownership of the host
    pub key: String,
    /// The changed URL
    pub url: String,
}

impl UrlSubmission {
    pub fn new(host: impl Into<String>, key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            key: key.into(),
            url: url.into(),
        }
    }

    /// Validate the non-empty preconditions
    pub fn validate(&self) -> Result<()> {
        non_empty("host", &self.host)?;
        non_empty("key", &self.key)?;
        non_empty("url", &self.url)?;
        Ok(())
    }
}

/// A batch submission (`POST /indexNow` with a JSON body)
///
/// `keyLocation` is omitted from the serialized body when absent, never
/// emitted as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlListSubmission {
    /// Host the submitted URLs belong to
    pub host: String,
    /// Per-site key proving ownership of the host
    pub key: String,
    /// Ordered list of changed URLs
    pub url_list: Vec<String>,
    /// URL where the key file is hosted, if not at the default location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_location: Option<String>,
}

impl UrlListSubmission {
    pub fn new(
        host: impl Into<String>,
        key: impl Into<String>,
        url_list: Vec<String>,
        key_location: Option<String>,
    ) -> Self {
        Self {
            host: host.into(),
            key: key.into(),
            url_list,
            key_location,
        }
    }

    /// Validate the non-empty preconditions
    pub fn validate(&self) -> Result<()> {
        non_empty("host", &self.host)?;
        non_empty("key", &self.key)?;

        if self.url_list.is_empty() {
            return Err(Error::invalid_input("urlList cannot be empty"));
        }
        for (i, url) in self.url_list.iter().enumerate() {
            if url.is_empty() {
                return Err(Error::invalid_input(format!(
                    "urlList entry {} cannot be empty",
                    i
                )));
            }
        }

        if let Some(location) = &self.key_location {
            non_empty("keyLocation", location)?;
        }

        Ok(())
    }
}

fn non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_input(format!("{} cannot be empty", field)));
    }
    Ok(())
}
