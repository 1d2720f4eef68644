// ABOUTME: Resolution of raw href/src values against the page URL.
// ABOUTME: Passes absolute URLs through and joins every other form onto the document base.

use url::Url;

/// Resolves a raw href/src value against the URL the page was served from.
///
/// Fully-qualified http(s) URLs pass through byte-for-byte. Everything else
/// goes through standard reference resolution: scheme-relative values
/// inherit the page's scheme, absolute paths resolve against the root, and
/// relative paths against the document location. Unresolvable values yield
/// `None` so callers can drop them.
pub fn resolve_url(base: &Url, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return Url::parse(raw).ok().map(|_| raw.to_string());
    }

    base.join(raw).ok().map(|resolved| resolved.to_string())
}
