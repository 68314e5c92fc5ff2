use super::*;
use scraper::Html;

fn first<'a>(tree: &'a Html, tag: &str) -> ElementRef<'a> {
    tree.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag)
        .unwrap()
}

#[test]
fn test_descendant_elements_excludes_self() {
    let tree = Html::parse_document("<html><body><form><input name=a></form></body></html>");
    let form = first(&tree, "form");
    let descendants = descendant_elements(form);
    assert_eq!(descendants.len(), 1);
    assert_eq!(descendants[0].value().name(), "input");
}

#[test]
fn test_descendant_elements_document_order() {
    let tree = Html::parse_document(
        "<html><body><form>\
            <input name=a><div><input name=b></div><input name=c>\
        </form></body></html>",
    );
    let names: Vec<_> = descendant_elements(first(&tree, "form"))
        .into_iter()
        .filter_map(|el| el.value().attr("name"))
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_closest_matches_self() {
    let tree = Html::parse_document("<html><body><form></form></body></html>");
    let form = first(&tree, "form");
    assert_eq!(closest(form, "form").map(|el| el.value().name()), Some("form"));
}

#[test]
fn test_closest_walks_ancestors() {
    let tree = Html::parse_document("<html><body><form><div><input></div></form></body></html>");
    let input = first(&tree, "input");
    let form = closest(input, "form").unwrap();
    assert_eq!(form.value().name(), "form");
}

#[test]
fn test_closest_none_when_no_ancestor() {
    let tree = Html::parse_document("<html><body><div><input></div></body></html>");
    let input = first(&tree, "input");
    assert!(closest(input, "form").is_none());
}

#[test]
fn test_has_attr_valueless() {
    let tree = Html::parse_document("<html><body><input checked></body></html>");
    let input = first(&tree, "input");
    assert!(has_attr(input, "checked"));
    assert!(!has_attr(input, "disabled"));
}

#[test]
fn test_inner_text_concatenates() {
    let tree = Html::parse_document("<html><body><p>one <b>two</b> three</p></body></html>");
    assert_eq!(inner_text(first(&tree, "p")), "one two three");
}
