// ABOUTME: MetaDocument struct holding the metadata extracted from one fetched page.
// ABOUTME: Includes convenience predicates for downstream consumers.

use serde::{Deserialize, Serialize};

/// The metadata extracted from one fetched page.
///
/// Scalar fields are `None` when the page does not declare them; list
/// fields are empty. URL-valued entries (`links`, `images`, `feeds`,
/// `og_image`) are already resolved to absolute form.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MetaDocument {
    pub title: Option<String>,
    /// The declared meta description, or the secondary description
    /// synthesized from body text when no meta element exists.
    pub description: Option<String>,
    /// The declared meta description only; never synthesized.
    pub meta_description: Option<String>,
    pub author: Option<String>,
    /// Charset declared in the markup, as written there.
    pub charset: Option<String>,
    pub keywords: Vec<String>,
    pub links: Vec<String>,
    pub images: Vec<String>,
    pub feeds: Vec<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_type: Option<String>,
    pub og_updated_time: Option<String>,
    pub og_locale: Option<String>,
}

impl MetaDocument {
    /// Returns true if nothing usable was extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.links.is_empty()
    }

    /// Returns true if the document has an author.
    pub fn has_author(&self) -> bool {
        self.author.as_ref().map_or(false, |a| !a.is_empty())
    }

    /// Returns true if the document has an Open Graph image.
    pub fn has_image(&self) -> bool {
        self.og_image.as_ref().map_or(false, |u| !u.is_empty())
    }

    /// Returns true if the document declares any feed.
    pub fn has_feeds(&self) -> bool {
        !self.feeds.is_empty()
    }
}
