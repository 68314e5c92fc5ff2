//! Form submission errors.
//!
//! Every variant is terminal for the single invocation that produced it;
//! nothing is retried internally. The crawl pipeline logs the failure and
//! moves on to other pending work.

use crawlform_dom::DomError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("No <form> element found in document")]
    NoFormFound,

    #[error("No <form> element matched selector {0:?}")]
    NoFormMatchedBySelector(String),

    #[error("Form index {index} out of range: document has {count} form(s)")]
    FormIndexOutOfRange { index: usize, count: usize },

    #[error("Form data should be a map or a sequence of name/value pairs: {0}")]
    InvalidOverrideData(String),

    #[error("{count} elements match the click criteria {criteria}")]
    AmbiguousClickable { criteria: String, count: usize },

    #[error("No clickable element matching the click criteria {criteria}")]
    NoClickableElement { criteria: String },

    #[error("Selector error: {0}")]
    Selector(#[from] DomError),

    #[error("Invalid form URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
