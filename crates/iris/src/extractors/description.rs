// ABOUTME: Secondary description heuristic for pages without description metadata.
// ABOUTME: Picks the longest paragraph, skipping any with script elements among its descendants.

use crate::document::ParsedDocument;
use crate::extractors::fields::normalize_whitespace;

/// Synthesizes a description from body text.
///
/// Scans every paragraph in document order and keeps the one with the
/// longest trimmed, whitespace-collapsed text. Paragraphs containing a
/// `script` element at any depth are excluded outright, even when such a
/// paragraph would be the longest. The first paragraph wins an exact
/// length tie. Returns `None` when no candidate remains.
pub fn extract_secondary_description(doc: &ParsedDocument) -> Option<String> {
    let mut best: Option<String> = None;

    for paragraph in doc.select_all("p") {
        if paragraph.has_descendant("script") {
            continue;
        }

        let text = normalize_whitespace(&paragraph.text());
        if text.is_empty() {
            continue;
        }

        let longer = match &best {
            Some(current) => text.chars().count() > current.chars().count(),
            None => true,
        };
        if longer {
            best = Some(text);
        }
    }

    best
}
