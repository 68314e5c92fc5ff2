//! Payload encoding and destination resolution.

use crawlform_dom::ElementRef;
use url::Url;

use crate::data::FormValue;
use crate::error::FormError;

/// Expand pairs into flat entries: a `Many` value becomes one entry per
/// element, all under the same name, in order.
pub(crate) fn expand_pairs(pairs: &[(String, FormValue)]) -> Vec<(String, String)> {
    let mut flat = Vec::with_capacity(pairs.len());
    for (name, value) in pairs {
        for entry in value.expand() {
            flat.push((name.clone(), entry.clone()));
        }
    }
    flat
}

/// Serialize entries as `application/x-www-form-urlencoded`.
pub(crate) fn urlencode(entries: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in entries {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// Resolve the submission's destination URL.
///
/// An explicit `url` wins over the form's `action`; both resolve against the
/// document base URL. A form with no `action` submits to the base URL
/// itself.
pub(crate) fn destination_url(
    form: ElementRef<'_>,
    base_url: &Url,
    url: Option<&str>,
) -> Result<Url, FormError> {
    if let Some(url) = url {
        return Ok(base_url.join(url)?);
    }
    match form.value().attr("action") {
        Some(action) => Ok(base_url.join(strip_html_whitespace(action))?),
        None => Ok(base_url.clone()),
    }
}

/// The form's `method` attribute, uppercased, defaulting to GET.
pub(crate) fn form_method(form: ElementRef<'_>) -> String {
    match form.value().attr("method") {
        Some(method) => method.to_ascii_uppercase(),
        None => "GET".to_string(),
    }
}

/// Trim ASCII whitespace as HTML defines it: space, tab, LF, FF and CR.
fn strip_html_whitespace(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r'))
}

#[cfg(test)]
#[path = "encode_tests.rs"]
mod tests;
