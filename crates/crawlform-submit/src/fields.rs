//! Field enumeration and value derivation.

use crawlform_dom::{self as dom, ElementRef};
use tracing::trace;

use crate::data::{FormData, FormValue};

/// Enumerate the submittable fields of `form` in document order.
///
/// Inputs typed `submit`, `image` or `reset` never contribute here (submit
/// controls are the clickable resolver's concern), unchecked checkboxes and
/// radios are excluded, and unnamed fields cannot be submitted. Fields whose
/// name is overridden in `data` are skipped: overrides replace scraped
/// values, they do not append to them.
pub fn enumerate_fields(form: ElementRef<'_>, data: &FormData) -> Vec<(String, FormValue)> {
    let mut pairs = Vec::new();
    for element in dom::descendant_elements(form) {
        let Some((name, value)) = field_value(element) else {
            continue;
        };
        if name.is_empty() || data.contains(&name) {
            continue;
        }
        trace!(field = %name, "scraped form field");
        pairs.push((name, value));
    }
    pairs
}

fn field_value(element: ElementRef<'_>) -> Option<(String, FormValue)> {
    match element.value().name() {
        "input" => input_value(element),
        "textarea" => {
            let name = element.value().attr("name")?.to_string();
            Some((name, FormValue::Single(dom::inner_text(element))))
        }
        "select" => select_value(element),
        _ => None,
    }
}

fn input_value(input: ElementRef<'_>) -> Option<(String, FormValue)> {
    // An input with no type attribute behaves as a text field.
    let kind = input.value().attr("type").unwrap_or("");
    if matches_any(kind, &["submit", "image", "reset"]) {
        return None;
    }
    if matches_any(kind, &["checkbox", "radio"]) && !dom::has_attr(input, "checked") {
        return None;
    }
    let name = input.value().attr("name")?.to_string();
    let value = input.value().attr("value").unwrap_or("").to_string();
    Some((name, FormValue::Single(value)))
}

fn select_value(select: ElementRef<'_>) -> Option<(String, FormValue)> {
    let name = select.value().attr("name")?.to_string();
    let options: Vec<ElementRef<'_>> = dom::descendant_elements(select)
        .into_iter()
        .filter(|el| el.value().name() == "option")
        .collect();

    if dom::has_attr(select, "multiple") {
        // Re-derive the selected set from the markup itself; the value is
        // every selected option in document order.
        let selected = options
            .iter()
            .filter(|option| dom::has_attr(**option, "selected"))
            .map(|option| option_value(*option))
            .collect();
        return Some((name, FormValue::Many(selected)));
    }

    // Single select: the first selected option wins; with none selected,
    // browsers submit the first option. A select with no options at all
    // contributes nothing.
    options
        .iter()
        .find(|option| dom::has_attr(**option, "selected"))
        .or_else(|| options.first())
        .map(|option| (name, FormValue::Single(option_value(*option))))
}

fn option_value(option: ElementRef<'_>) -> String {
    match option.value().attr("value") {
        Some(value) => value.to_string(),
        None => dom::inner_text(option).trim().to_string(),
    }
}

fn matches_any(value: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| value.eq_ignore_ascii_case(c))
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
