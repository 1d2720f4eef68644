// ABOUTME: Main library entry point for the Iris page metadata inspector.
// ABOUTME: Re-exports the public API: Inspector, InspectorBuilder, MetaDocument, InspectError, Options.

//! Iris - a single-page metadata inspector.
//!
//! This crate fetches one web page and extracts a normalized set of
//! metadata: title, description (with a body-text fallback), author,
//! charset, keywords, Open Graph attributes, and the page's links, images,
//! and feed discovery links, all URL-valued fields resolved to absolute
//! form.
//!
//! # Example
//!
//! ```no_run
//! use unfurl_iris::{InspectError, Inspector};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), InspectError> {
//!     let mut inspector = Inspector::builder("www.example.com").build()?;
//!     let meta = inspector.fetch().await?;
//!     println!("{:?}", meta.title);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod document;
pub mod error;
pub mod extractors;
pub mod options;
pub mod resolve;
pub mod resource;
pub mod result;
pub mod url_info;

pub use crate::client::Inspector;
pub use crate::document::ParsedDocument;
pub use crate::error::InspectError;
pub use crate::options::{InspectorBuilder, Options};
pub use crate::result::MetaDocument;
pub use crate::url_info::UrlInfo;
