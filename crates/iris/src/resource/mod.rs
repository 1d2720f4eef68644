// ABOUTME: Resource fetching over HTTP with redirect tracking and charset decoding.
// ABOUTME: Maps transport failures to Network errors and non-2xx responses to Http errors.

use bytes::Bytes;
use reqwest::StatusCode;
use url::Url;

use crate::error::InspectError;

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: StatusCode,
    /// URL the response was ultimately served from, after redirects.
    pub final_url: Url,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decodes the body to text using the content-type charset when declared,
    /// falling back to statistical detection.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Fetch a page from the given URL.
///
/// Transport failures (DNS, connect, timeout, body read) become
/// [`InspectError::Network`]; any non-2xx status becomes
/// [`InspectError::Http`] without reading the body. No retries.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchResult, InspectError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| InspectError::network(url, e))?;

    let status = response.status();
    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    if !status.is_success() {
        return Err(InspectError::http(url, status));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| InspectError::network(url, e))?;

    Ok(FetchResult {
        status,
        final_url,
        content_type,
        body,
    })
}

/// Decode body bytes to a String using the content-type charset or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = charset_param(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract the `charset=` parameter from a content-type value, preserving
/// the case it was written in. Shared with the markup charset extractor.
pub(crate) fn charset_param(value: &str) -> Option<String> {
    for part in value.split(';') {
        let trimmed = part.trim();
        let matched = match trimmed.get(..8) {
            Some(prefix) => prefix.eq_ignore_ascii_case("charset="),
            None => false,
        };
        if matched {
            let charset = trimmed[8..].trim().trim_matches('"').trim_matches('\'');
            if charset.is_empty() {
                return None;
            }
            return Some(charset.to_string());
        }
    }
    None
}
