//! Document and element facade for the crawlform pipeline.
//!
//! Wraps the external HTML parser (`scraper`) behind the small surface the
//! submission pipeline needs: parsing with a base URL, document-order
//! traversal, and CSS selector evaluation. Everything here is a read-only
//! view over a parsed tree; nothing is cached across calls.

mod document;
mod element;
mod error;

pub use document::Document;
pub use element::{closest, descendant_elements, has_attr, inner_text};
pub use error::DomError;

pub use scraper::ElementRef;
