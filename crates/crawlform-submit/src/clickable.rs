//! Clickable resolution: which submit control counts as "clicked".

use crawlform_dom::{self as dom, ElementRef};
use tracing::debug;

use crate::error::FormError;
use crate::options::ClickTarget;

/// The submit control treated as clicked, with the name/value pair it
/// contributes to the payload. An unnamed control resolves successfully but
/// contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clickable {
    pub name: Option<String>,
    pub value: String,
}

impl Clickable {
    fn of(element: ElementRef<'_>) -> Self {
        Self {
            name: element.value().attr("name").map(str::to_string),
            value: element.value().attr("value").unwrap_or("").to_string(),
        }
    }
}

/// Resolve the clicked submit control for `form`.
///
/// With no target given, the first clickable in document order wins. A form
/// with no clickables at all resolves to `None` without error; explicit
/// criteria that match nothing or match more than one element are errors.
pub fn resolve_clickable(
    form: ElementRef<'_>,
    target: Option<&ClickTarget>,
) -> Result<Option<Clickable>, FormError> {
    let clickables: Vec<ElementRef<'_>> = dom::descendant_elements(form)
        .into_iter()
        .filter(|el| is_clickable(*el))
        .collect();
    if clickables.is_empty() {
        return Ok(None);
    }

    let Some(target) = target else {
        return Ok(Some(Clickable::of(clickables[0])));
    };

    if let ClickTarget::Position(nr) = target {
        // The position indexes the form's full control list, not the
        // clickable subset; the element found there need not itself be a
        // submit control.
        if let Some(control) = form_controls(form).get(*nr) {
            debug!(nr = *nr, "clickable resolved by position");
            return Ok(Some(Clickable::of(*control)));
        }
    }

    // No position hit: fall back to attribute-equality filtering over all
    // descendants of the form. A failed position lookup degrades to an
    // `nr="<n>"` attribute constraint.
    let filter: Vec<(String, String)> = match target {
        ClickTarget::Position(nr) => vec![("nr".to_string(), nr.to_string())],
        ClickTarget::Attributes(attrs) => {
            let mut pairs: Vec<(String, String)> = attrs
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            pairs.sort();
            pairs
        }
    };
    let matched: Vec<ElementRef<'_>> = dom::descendant_elements(form)
        .into_iter()
        .filter(|el| {
            filter
                .iter()
                .all(|(k, v)| el.value().attr(k) == Some(v.as_str()))
        })
        .collect();

    match matched.len() {
        1 => {
            debug!(criteria = %describe(&filter), "clickable resolved by attributes");
            Ok(Some(Clickable::of(matched[0])))
        }
        0 => Err(FormError::NoClickableElement {
            criteria: describe(&filter),
        }),
        count => Err(FormError::AmbiguousClickable {
            criteria: describe(&filter),
            count,
        }),
    }
}

fn is_clickable(element: ElementRef<'_>) -> bool {
    let tag = element.value().name();
    match element.value().attr("type") {
        Some(kind) => (tag == "input" || tag == "button") && kind.eq_ignore_ascii_case("submit"),
        None => tag == "button",
    }
}

/// The form's input controls in document order, clickable or not.
fn form_controls(form: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    dom::descendant_elements(form)
        .into_iter()
        .filter(|el| matches!(el.value().name(), "input" | "select" | "textarea"))
        .collect()
}

fn describe(filter: &[(String, String)]) -> String {
    let parts: Vec<String> = filter
        .iter()
        .map(|(name, value)| format!("{name}={value:?}"))
        .collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
#[path = "clickable_tests.rs"]
mod tests;
