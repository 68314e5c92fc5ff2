//! Form selection.

use crawlform_dom::{self as dom, Document, ElementRef};
use tracing::debug;

use crate::error::FormError;
use crate::options::FormCriteria;

/// Select the form targeted by `criteria`.
///
/// Fails with [`FormError::NoFormFound`] when the document has no forms at
/// all. Otherwise criteria apply in a fixed priority order, first match
/// wins:
///
/// 1. `name`: a miss falls through silently.
/// 2. `id`: a miss falls through silently.
/// 3. `css`: a selector that matches nothing (or matches nodes with no
///    enclosing form) is [`FormError::NoFormMatchedBySelector`].
/// 4. `index`: out of range is [`FormError::FormIndexOutOfRange`], while an
///    explicit `None` selects nothing and the caller treats `Ok(None)` as
///    "no submission possible", not as a failure.
pub fn locate_form<'a>(
    document: &'a Document,
    criteria: &FormCriteria,
) -> Result<Option<ElementRef<'a>>, FormError> {
    let forms = document.elements_by_tag("form");
    if forms.is_empty() {
        return Err(FormError::NoFormFound);
    }

    if let Some(name) = criteria.name.as_deref() {
        if let Some(form) = forms.iter().find(|f| f.value().attr("name") == Some(name)) {
            debug!(name, "form located by name");
            return Ok(Some(*form));
        }
    }

    if let Some(id) = criteria.id.as_deref() {
        if let Some(form) = forms.iter().find(|f| f.value().attr("id") == Some(id)) {
            debug!(id, "form located by id");
            return Ok(Some(*form));
        }
    }

    if let Some(css) = criteria.css.as_deref() {
        let matches = document.select(css)?;
        let Some(first) = matches.first() else {
            return Err(FormError::NoFormMatchedBySelector(css.to_string()));
        };
        // The selector may land on an element inside the form; walk up to
        // the enclosing form element.
        return match dom::closest(*first, "form") {
            Some(form) => {
                debug!(css, "form located by selector");
                Ok(Some(form))
            }
            None => Err(FormError::NoFormMatchedBySelector(css.to_string())),
        };
    }

    match criteria.index {
        Some(index) => match forms.get(index) {
            Some(form) => {
                debug!(index, "form located by position");
                Ok(Some(*form))
            }
            None => Err(FormError::FormIndexOutOfRange {
                index,
                count: forms.len(),
            }),
        },
        None => Ok(None),
    }
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;
