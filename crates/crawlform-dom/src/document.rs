//! Parsed HTML document with a resolved base URL.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use crate::error::DomError;

/// A parsed HTML document together with the base URL used to resolve
/// relative links.
///
/// The base URL is the document's `<base href>`, when present, resolved
/// against the URL the document was fetched from; otherwise the fetch URL
/// itself.
pub struct Document {
    tree: Html,
    base_url: Url,
}

impl Document {
    /// Parse an HTML document fetched from `url`.
    pub fn parse(html: &str, url: Url) -> Self {
        let tree = Html::parse_document(html);
        let base_url = base_href(&tree)
            .and_then(|href| url.join(href).ok())
            .unwrap_or_else(|| url.clone());
        if base_url != url {
            debug!(%base_url, "document declares a <base href>");
        }
        Self { tree, base_url }
    }

    /// Base URL for resolving relative links in this document.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// All elements with the given (lowercase) tag name, in document order.
    pub fn elements_by_tag(&self, tag: &str) -> Vec<ElementRef<'_>> {
        self.tree
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == tag)
            .collect()
    }

    /// Evaluate a CSS selector against the document, returning matches in
    /// document order.
    pub fn select(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, DomError> {
        let parsed = Selector::parse(selector).map_err(|e| DomError::InvalidSelector {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;
        Ok(self.tree.select(&parsed).collect())
    }
}

fn base_href(tree: &Html) -> Option<&str> {
    tree.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "base")
        .and_then(|el| el.value().attr("href"))
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
