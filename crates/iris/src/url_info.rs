// ABOUTME: URL normalization performed at inspector construction time.
// ABOUTME: Provides UrlInfo exposing the canonical url, scheme, host, port, and root URL.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::InspectError;

static SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").unwrap());

// Matches an authority that spells out a port, scheme default or not.
static EXPLICIT_PORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://(?:[^/?#@]*@)?(?:\[[^\]]+\]|[^/?#:@]+):\d+(?:[/?#]|$)")
        .unwrap()
});

/// The normalized form of an input URL, computed once at construction.
///
/// Inputs without a scheme get `http://` prepended before parsing. The
/// canonical string form follows the parser (lower-cased scheme and host,
/// default ports elided, a bare origin gains its trailing `/`). `port` and
/// `root_url` keep any port the input wrote out, even a scheme default the
/// parser elides from the string form.
#[derive(Debug, Clone)]
pub struct UrlInfo {
    url: String,
    scheme: String,
    host: String,
    port: Option<u16>,
    root_url: String,
}

impl UrlInfo {
    /// Parses and normalizes an input URL string.
    ///
    /// Fails with [`InspectError::Url`] when the input cannot be parsed
    /// into an absolute URL with a host.
    pub fn parse(input: &str) -> Result<Self, InspectError> {
        let with_scheme = if SCHEME_RE.is_match(input) {
            input.to_string()
        } else {
            format!("http://{}", input)
        };

        let parsed =
            Url::parse(&with_scheme).map_err(|e| InspectError::url(input, e))?;
        let host = match parsed.host_str() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => return Err(InspectError::url(input, "missing host")),
        };

        let scheme = parsed.scheme().to_string();
        // The parser elides scheme-default ports; an input that wrote one
        // out still reports it.
        let port = match parsed.port() {
            Some(p) => Some(p),
            None if EXPLICIT_PORT_RE.is_match(&with_scheme) => parsed.port_or_known_default(),
            None => None,
        };
        let root_url = match port {
            Some(p) => format!("{}://{}:{}", scheme, host, p),
            None => format!("{}://{}", scheme, host),
        };

        Ok(UrlInfo {
            url: parsed.to_string(),
            scheme,
            host,
            port,
            root_url,
        })
    }

    /// The canonical string form of the URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The URL scheme, `http` when the input had none.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host with any port stripped.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The explicit port from the input, `None` when the input did not
    /// specify one. A written scheme-default port is reported.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Scheme plus host plus optional port, without path, query, or fragment.
    pub fn root_url(&self) -> &str {
        &self.root_url
    }
}
