// ABOUTME: Parsed-document capability layer over the HTML backend.
// ABOUTME: Exposes selector queries, node text/attr reads, and the markup-declared charset.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::resource::charset_param;

/// Thread-safe cache of compiled CSS selectors.
///
/// Invalid selectors cache as `None` so they are rejected once.
static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn cached_selector(css: &str) -> Option<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap();
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap();
    // Another thread may have inserted while we compiled.
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// A parsed HTML document behind a narrow query surface.
///
/// Extraction code works entirely through [`ParsedDocument`] and [`Node`],
/// so the parsing backend never leaks into field logic. The charset is the
/// one declared in the markup itself; transport headers play no part here.
pub struct ParsedDocument {
    html: Html,
    charset: Option<String>,
}

impl ParsedDocument {
    /// Parses markup into a document tree. The backend recovers from
    /// malformed input, so this always yields a queryable tree.
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        let charset = detect_charset(&html);
        ParsedDocument { html, charset }
    }

    /// The charset declared in the markup, as written, or `None`.
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// First element matching the selector, in document order.
    pub fn select_first(&self, css: &str) -> Option<Node<'_>> {
        let sel = cached_selector(css)?;
        self.html.select(&sel).next().map(|element| Node { element })
    }

    /// All elements matching the selector, in document order.
    pub fn select_all(&self, css: &str) -> Vec<Node<'_>> {
        match cached_selector(css) {
            Some(sel) => self
                .html
                .select(&sel)
                .map(|element| Node { element })
                .collect(),
            None => Vec::new(),
        }
    }
}

/// A single element within a [`ParsedDocument`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    /// The raw value of an attribute, untrimmed.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// True when any descendant element (at any depth) has the given tag.
    pub fn has_descendant(&self, tag: &str) -> bool {
        match cached_selector(tag) {
            Some(sel) => self.element.select(&sel).next().is_some(),
            None => false,
        }
    }
}

/// Finds the charset declared in the markup. A `<meta charset>` attribute
/// wins over an http-equiv content-type declaration.
fn detect_charset(html: &Html) -> Option<String> {
    if let Some(sel) = cached_selector("meta[charset]") {
        if let Some(elem) = html.select(&sel).next() {
            if let Some(value) = elem.value().attr("charset") {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }

    if let Some(sel) = cached_selector("meta[http-equiv]") {
        for elem in html.select(&sel) {
            let is_content_type = elem
                .value()
                .attr("http-equiv")
                .map(|v| v.trim().eq_ignore_ascii_case("content-type"))
                .unwrap_or(false);
            if !is_content_type {
                continue;
            }
            if let Some(content) = elem.value().attr("content") {
                if let Some(charset) = charset_param(content) {
                    return Some(charset);
                }
            }
        }
    }

    None
}
