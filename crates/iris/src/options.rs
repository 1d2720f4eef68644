// ABOUTME: Configuration options for the inspector including Options and InspectorBuilder.
// ABOUTME: InspectorBuilder provides a fluent API for constructing Inspector instances.

use std::time::Duration;

use crate::client::Inspector;
use crate::error::InspectError;

/// Configuration options for an [`Inspector`].
///
/// Every recognized knob is a field here with a stated default; there is
/// no open-ended option map.
#[derive(Debug, Clone)]
pub struct Options {
    /// Request timeout covering connect and body read.
    pub timeout: Duration,
    /// User-Agent header sent with the request.
    pub user_agent: String,
    /// Accept TLS certificates that fail verification.
    pub accept_invalid_certs: bool,
    /// Pre-built HTTP client to use instead of constructing one from the
    /// fields above.
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("unfurl-iris/", env!("CARGO_PKG_VERSION")).to_string(),
            accept_invalid_certs: false,
            http_client: None,
        }
    }
}

/// Builder for constructing Inspector instances with custom configuration.
#[derive(Debug, Clone)]
pub struct InspectorBuilder {
    url: String,
    opts: Options,
}

impl InspectorBuilder {
    /// Create a builder for the given page URL with default options.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Accept TLS certificates that fail verification.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.opts.accept_invalid_certs = accept;
        self
    }

    /// Use a custom HTTP client, bypassing the other transport options.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Inspector, normalizing the URL.
    ///
    /// Fails with [`InspectError::Url`] when the URL cannot be parsed.
    pub fn build(self) -> Result<Inspector, InspectError> {
        Inspector::new(&self.url, self.opts)
    }
}
