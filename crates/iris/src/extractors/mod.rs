// ABOUTME: Field extraction rules applied to a parsed document.
// ABOUTME: Includes meta-tag readers, URL-valued collectors, and the description fallback.

//! Field extraction module.
//!
//! Each extractor is a pure function from a [`crate::document::ParsedDocument`]
//! (plus the page URL for URL-valued fields) to one metadata field. Extractors
//! are independent: a page missing one field still yields every other.
//!
//! Submodules:
//! - `fields`: meta-tag readers and the link/image/feed collectors.
//! - `description`: the longest-paragraph fallback used when no description
//!   meta element exists.

pub mod description;
pub mod fields;
