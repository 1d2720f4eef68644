// ABOUTME: Meta-tag readers and URL-valued collectors for page metadata.
// ABOUTME: Provides title, description, keywords, Open Graph, and link/image/feed extraction.

use url::Url;

use crate::document::ParsedDocument;
use crate::extractors::description::extract_secondary_description;
use crate::resolve::resolve_url;

/// Normalizes whitespace by collapsing runs into single spaces and trimming.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The trimmed `content` of the first matching meta element with a
/// non-empty value. Empty or whitespace-only content counts as no match.
fn meta_content(doc: &ParsedDocument, selector: &str) -> Option<String> {
    for el in doc.select_all(selector) {
        if let Some(content) = el.attr("content") {
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Reads a meta element by its `name` attribute.
pub fn meta_name(doc: &ParsedDocument, name: &str) -> Option<String> {
    meta_content(doc, &format!("meta[name='{}']", name))
}

/// Reads a meta element by its `property` attribute.
pub fn meta_property(doc: &ParsedDocument, property: &str) -> Option<String> {
    meta_content(doc, &format!("meta[property='{}']", property))
}

/// Text of the first `title` element, trimmed.
pub fn extract_title(doc: &ParsedDocument) -> Option<String> {
    let title = doc.select_first("title")?.text();
    let trimmed = title.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The declared meta description when present, else the secondary
/// description synthesized from body paragraphs.
pub fn extract_description(doc: &ParsedDocument) -> Option<String> {
    meta_name(doc, "description").or_else(|| extract_secondary_description(doc))
}

/// Keywords split on commas, each entry trimmed, empties dropped.
/// Yields an empty vec when the element is absent or its content is blank.
pub fn extract_keywords(doc: &ParsedDocument) -> Vec<String> {
    match meta_name(doc, "keywords") {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

/// The `og:image` value resolved to absolute form; `None` when the tag is
/// missing or its value cannot be resolved.
pub fn extract_og_image(doc: &ParsedDocument, base: &Url) -> Option<String> {
    meta_property(doc, "og:image").and_then(|raw| resolve_url(base, &raw))
}

/// Every anchor href, resolved, in document order. Duplicates preserved,
/// unresolvable values dropped.
pub fn extract_links(doc: &ParsedDocument, base: &Url) -> Vec<String> {
    collect_resolved(doc, "a[href]", "href", base)
}

/// Every image src, resolved, in document order.
pub fn extract_images(doc: &ParsedDocument, base: &Url) -> Vec<String> {
    collect_resolved(doc, "img[src]", "src", base)
}

/// RSS and Atom discovery links, resolved, in document order.
pub fn extract_feeds(doc: &ParsedDocument, base: &Url) -> Vec<String> {
    collect_resolved(
        doc,
        "link[type='application/rss+xml'], link[type='application/atom+xml']",
        "href",
        base,
    )
}

fn collect_resolved(
    doc: &ParsedDocument,
    selector: &str,
    attr: &str,
    base: &Url,
) -> Vec<String> {
    doc.select_all(selector)
        .into_iter()
        .filter_map(|el| el.attr(attr).and_then(|raw| resolve_url(base, raw)))
        .collect()
}
