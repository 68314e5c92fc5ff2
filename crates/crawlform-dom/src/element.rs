//! Traversal helpers over parser element references.

use scraper::ElementRef;

/// Descendant elements of `el` in document order, excluding `el` itself.
pub fn descendant_elements<'a>(el: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .collect()
}

/// The nearest element with tag `tag`, starting at `el` itself and walking
/// ancestors toward the root.
pub fn closest<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    if el.value().name() == tag {
        return Some(el);
    }
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == tag)
}

/// Whether the attribute is present on the element, whatever its value.
pub fn has_attr(el: ElementRef<'_>, name: &str) -> bool {
    el.value().attr(name).is_some()
}

/// Text content of the element and its descendants, concatenated.
pub fn inner_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
