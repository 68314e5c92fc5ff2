//! Caller configuration for form submission.

use std::collections::HashMap;

use serde::Deserialize;

use crate::data::FormData;

/// Criteria for selecting the form element to submit.
///
/// Criteria are tried in a fixed order: `name`, then `id`, then `css`, then
/// `index`. A `name` or `id` that matches nothing falls through silently; a
/// `css` selector that matches nothing is a hard error. See
/// [`crate::locate_form`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormCriteria {
    /// Match the form's `name` attribute exactly.
    pub name: Option<String>,
    /// Match the form's `id` attribute exactly.
    pub id: Option<String>,
    /// CSS selector; the first matching element's enclosing form is used.
    pub css: Option<String>,
    /// Position within the document's forms, in document order. An explicit
    /// `None` selects no form at all and the submission is silently skipped,
    /// unlike an out-of-range index, which is an error.
    pub index: Option<usize>,
}

impl Default for FormCriteria {
    fn default() -> Self {
        Self {
            name: None,
            id: None,
            css: None,
            index: Some(0),
        }
    }
}

impl FormCriteria {
    /// Select the first form in the document.
    pub fn first() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn matching(css: impl Into<String>) -> Self {
        Self {
            css: Some(css.into()),
            ..Self::default()
        }
    }

    pub fn at(index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::default()
        }
    }
}

/// Which control counts as "clicked" when the form is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ClickTarget {
    /// Position within the form's full control list (inputs, selects and
    /// textareas in document order), not just the clickable subset.
    Position(usize),
    /// Attribute-equality constraints; every pair must match exactly.
    Attributes(HashMap<String, String>),
}

/// Caller-supplied configuration for deriving a submission request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmitOptions {
    /// Which form to submit.
    pub form: FormCriteria,
    /// Overrides applied on top of scraped field values.
    pub data: Option<FormData>,
    /// Skip clickable resolution entirely: no submit control contributes a
    /// pair, and click criteria are never evaluated.
    pub dont_click: bool,
    /// Which submit control to treat as clicked.
    pub click: Option<ClickTarget>,
    /// Explicit destination URL, resolved against the document base URL and
    /// overriding the form's `action`.
    pub url: Option<String>,
    /// Explicit HTTP method, overriding the form's `method` attribute.
    pub method: Option<String>,
    /// Extra request headers carried onto the descriptor. A `Content-Type`
    /// here suppresses the POST default.
    pub headers: HashMap<String, String>,
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
