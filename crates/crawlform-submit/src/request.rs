//! The outgoing request descriptor and end-to-end assembly.

use std::collections::HashMap;

use crawlform_dom::Document;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::clickable::resolve_clickable;
use crate::data::{FormData, FormValue};
use crate::encode;
use crate::error::FormError;
use crate::fields::enumerate_fields;
use crate::locate::locate_form;
use crate::options::SubmitOptions;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// An outgoing request derived from a form submission, ready for the
/// transport layer.
#[derive(Debug, Clone, Serialize)]
pub struct FormRequest {
    /// Absolute destination URL, query string included for GET submissions.
    pub url: Url,
    /// Uppercase HTTP method.
    pub method: String,
    /// Request headers; `Content-Type` is set whenever a body is.
    pub headers: HashMap<String, String>,
    /// URL-encoded body for POST submissions.
    pub body: Option<Vec<u8>>,
}

impl FormRequest {
    /// Build a request directly from name/value pairs, without a document.
    ///
    /// Defaults to POST when pairs are present and no method is given, GET
    /// otherwise.
    pub fn new(url: Url, method: Option<&str>, pairs: &[(String, FormValue)]) -> Self {
        let method = match method {
            Some(method) => method.to_ascii_uppercase(),
            None if pairs.is_empty() => "GET".to_string(),
            None => "POST".to_string(),
        };
        Self::assemble(url, method, pairs, HashMap::new())
    }

    /// Derive the submission request for a form in `document`.
    ///
    /// Runs the full pipeline: locate the form, enumerate its fields,
    /// resolve the clicked control, merge overrides, and encode. Returns
    /// `Ok(None)` when the criteria deliberately select no form
    /// (`index: None`); every other miss is an error.
    pub fn from_document(
        document: &Document,
        options: &SubmitOptions,
    ) -> Result<Option<Self>, FormError> {
        let empty = FormData::new();
        let data = options.data.as_ref().unwrap_or(&empty);

        let Some(form) = locate_form(document, &options.form)? else {
            debug!("no form selected, skipping submission");
            return Ok(None);
        };

        let mut pairs = enumerate_fields(form, data);

        if !options.dont_click {
            if let Some(clicked) = resolve_clickable(form, options.click.as_ref())? {
                // Unnamed submit controls contribute nothing, and an
                // overridden name stays with the override.
                if let Some(name) = clicked.name {
                    if !data.contains(&name) {
                        pairs.push((name, FormValue::Single(clicked.value)));
                    }
                }
            }
        }

        for (name, value) in data.entries() {
            if let Some(value) = value {
                pairs.push((name.to_string(), value.clone()));
            }
        }

        let url = encode::destination_url(form, document.base_url(), options.url.as_deref())?;
        let method = options
            .method
            .as_deref()
            .map(str::to_ascii_uppercase)
            .unwrap_or_else(|| encode::form_method(form));

        debug!(%url, %method, pairs = pairs.len(), "assembled form submission");
        Ok(Some(Self::assemble(
            url,
            method,
            &pairs,
            options.headers.clone(),
        )))
    }

    fn assemble(
        mut url: Url,
        method: String,
        pairs: &[(String, FormValue)],
        mut headers: HashMap<String, String>,
    ) -> Self {
        let mut body = None;
        if !pairs.is_empty() {
            let encoded = encode::urlencode(&encode::expand_pairs(pairs));
            if method == "POST" {
                headers
                    .entry("Content-Type".to_string())
                    .or_insert_with(|| FORM_CONTENT_TYPE.to_string());
                body = Some(encoded.into_bytes());
            } else {
                let query = match url.query() {
                    Some(existing) => format!("{existing}&{encoded}"),
                    None => encoded,
                };
                url.set_query(Some(&query));
            }
        }
        Self {
            url,
            method,
            headers,
            body,
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
