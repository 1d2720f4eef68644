// ABOUTME: Error types for page inspection operations.
// ABOUTME: Provides the InspectError enum covering URL, network, HTTP, and parse failures.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while constructing an inspector or fetching a page.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The input could not be parsed into a valid absolute URL.
    /// Returned synchronously at construction, never from a fetch.
    #[error("invalid url {url}: {reason}")]
    Url { url: String, reason: String },

    /// The request failed at the transport layer (DNS, connect, timeout).
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: StatusCode },

    /// The response body could not be built into a document tree.
    #[error("failed to parse document from {url}")]
    Parse { url: String },
}

impl InspectError {
    /// Creates a Url error from the offending input and a parser diagnostic.
    pub fn url(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        InspectError::Url {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a Network error wrapping the underlying transport failure.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        InspectError::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an Http error carrying the response status.
    pub fn http(url: impl Into<String>, status: StatusCode) -> Self {
        InspectError::Http {
            url: url.into(),
            status,
        }
    }

    /// Creates a Parse error for a body the document backend rejected.
    pub fn parse(url: impl Into<String>) -> Self {
        InspectError::Parse { url: url.into() }
    }

    /// Returns true if this is a Url error.
    pub fn is_url(&self) -> bool {
        matches!(self, InspectError::Url { .. })
    }

    /// Returns true if this is a Network error.
    pub fn is_network(&self) -> bool {
        matches!(self, InspectError::Network { .. })
    }

    /// Returns true if this is an Http error.
    pub fn is_http(&self) -> bool {
        matches!(self, InspectError::Http { .. })
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, InspectError::Parse { .. })
    }

    /// The URL the failing operation was working on.
    pub fn url_str(&self) -> &str {
        match self {
            InspectError::Url { url, .. }
            | InspectError::Network { url, .. }
            | InspectError::Http { url, .. }
            | InspectError::Parse { url } => url,
        }
    }

    /// The HTTP status code, when the server answered with one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            InspectError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
