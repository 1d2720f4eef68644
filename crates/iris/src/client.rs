// ABOUTME: The Inspector client that fetches a page and aggregates extracted metadata.
// ABOUTME: Construction normalizes the URL synchronously; fetch() retrieves, parses, and extracts.

use url::Url;

use crate::document::ParsedDocument;
use crate::error::InspectError;
use crate::extractors::fields::{
    extract_description, extract_feeds, extract_images, extract_keywords, extract_links,
    extract_og_image, extract_title, meta_name, meta_property,
};
use crate::options::{InspectorBuilder, Options};
use crate::resource::fetch;
use crate::result::MetaDocument;
use crate::url_info::UrlInfo;

/// A single-page metadata inspector.
///
/// Construction normalizes the URL synchronously and never touches the
/// network; [`Inspector::fetch`] performs one HTTP request, parses the
/// response, and aggregates every extractor into a [`MetaDocument`].
///
/// Instances are fully independent. No state is shared between inspectors,
/// so two inspectors for the same URL never observe each other's results.
/// `fetch` takes `&mut self`, keeping operations within one instance
/// strictly sequential; a later fetch overwrites the stored result.
#[derive(Debug)]
pub struct Inspector {
    info: UrlInfo,
    opts: Options,
    http_client: reqwest::Client,
    body: Option<String>,
    meta: Option<MetaDocument>,
}

impl Inspector {
    /// Create a new InspectorBuilder for the given page URL.
    pub fn builder(url: impl Into<String>) -> InspectorBuilder {
        InspectorBuilder::new(url)
    }

    /// Create a new Inspector with the given options.
    ///
    /// Fails with [`InspectError::Url`] when the URL cannot be normalized.
    pub fn new(url: &str, opts: Options) -> Result<Self, InspectError> {
        let info = UrlInfo::parse(url)?;

        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .danger_accept_invalid_certs(opts.accept_invalid_certs)
                .cookie_store(true)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Ok(Self {
            info,
            opts,
            http_client,
            body: None,
            meta: None,
        })
    }

    /// The canonical string form of the page URL.
    pub fn url(&self) -> &str {
        self.info.url()
    }

    /// The URL scheme, `http` when the input had none.
    pub fn scheme(&self) -> &str {
        self.info.scheme()
    }

    /// The host with any port stripped.
    pub fn host(&self) -> &str {
        self.info.host()
    }

    /// The explicit port from the input URL, if any.
    pub fn port(&self) -> Option<u16> {
        self.info.port()
    }

    /// Scheme plus host plus optional port, without path, query, or fragment.
    pub fn root_url(&self) -> &str {
        self.info.root_url()
    }

    /// The configuration this inspector was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Fetch the page and extract its metadata.
    ///
    /// Returns the populated [`MetaDocument`] and retains a copy for
    /// [`Inspector::meta`]. URL-valued fields resolve against the URL the
    /// response was finally served from, so redirected pages resolve
    /// correctly. A failed fetch leaves any previously stored result
    /// untouched. Non-2xx responses yield [`InspectError::Http`]; transport
    /// failures yield [`InspectError::Network`]. No retries.
    pub async fn fetch(&mut self) -> Result<MetaDocument, InspectError> {
        let result = fetch(&self.http_client, self.info.url()).await?;

        let body = result.text();
        let doc = ParsedDocument::parse(&body);
        let meta = aggregate(&doc, &result.final_url);

        self.body = Some(body);
        self.meta = Some(meta.clone());
        Ok(meta)
    }

    /// The result of the last completed fetch.
    pub fn meta(&self) -> Option<&MetaDocument> {
        self.meta.as_ref()
    }

    /// The decoded response body of the last completed fetch.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The parsed document of the last completed fetch, rebuilt on demand
    /// from the retained body.
    pub fn parsed_document(&self) -> Option<ParsedDocument> {
        self.body.as_deref().map(ParsedDocument::parse)
    }
}

/// Runs every extractor against one parsed document and assembles the
/// result. Extraction never fails: missing fields degrade to `None` and
/// unresolvable entries are dropped from list fields.
fn aggregate(doc: &ParsedDocument, base: &Url) -> MetaDocument {
    MetaDocument {
        title: extract_title(doc),
        description: extract_description(doc),
        meta_description: meta_name(doc, "description"),
        author: meta_name(doc, "author"),
        charset: doc.charset().map(str::to_string),
        keywords: extract_keywords(doc),
        links: extract_links(doc, base),
        images: extract_images(doc, base),
        feeds: extract_feeds(doc, base),
        og_title: meta_property(doc, "og:title"),
        og_description: meta_property(doc, "og:description"),
        og_image: extract_og_image(doc, base),
        og_type: meta_property(doc, "og:type"),
        og_updated_time: meta_property(doc, "og:updated_time"),
        og_locale: meta_property(doc, "og:locale"),
    }
}
