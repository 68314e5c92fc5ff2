use super::*;
use crate::locate::locate_form;
use crate::options::FormCriteria;
use crawlform_dom::Document;
use url::Url;

fn document(body: &str) -> Document {
    let html = format!("<html><body>{body}</body></html>");
    Document::parse(&html, Url::parse("http://example.com/page").unwrap())
}

fn fields(doc: &Document) -> Vec<(String, FormValue)> {
    let form = locate_form(doc, &FormCriteria::default()).unwrap().unwrap();
    enumerate_fields(form, &FormData::new())
}

fn single(name: &str, value: &str) -> (String, FormValue) {
    (name.to_string(), FormValue::Single(value.to_string()))
}

#[test]
fn test_text_inputs_included() {
    let doc = document(r#"<form><input type="text" name="q" value="cats"></form>"#);
    assert_eq!(fields(&doc), vec![single("q", "cats")]);
}

#[test]
fn test_input_without_type_is_a_text_field() {
    let doc = document(r#"<form><input name="q" value="v"></form>"#);
    assert_eq!(fields(&doc), vec![single("q", "v")]);
}

#[test]
fn test_missing_value_is_empty_string() {
    let doc = document(r#"<form><input type="text" name="q"></form>"#);
    assert_eq!(fields(&doc), vec![single("q", "")]);
}

#[test]
fn test_submit_image_reset_excluded() {
    let doc = document(
        r#"<form>
            <input type="submit" name="s" value="Go">
            <input type="IMAGE" name="i" value="x">
            <input type="reset" name="r">
            <input type="text" name="q" value="keep">
        </form>"#,
    );
    assert_eq!(fields(&doc), vec![single("q", "keep")]);
}

#[test]
fn test_unchecked_checkbox_and_radio_excluded() {
    let doc = document(
        r#"<form>
            <input type="checkbox" name="a" value="1">
            <input type="radio" name="b" value="2">
        </form>"#,
    );
    assert!(fields(&doc).is_empty());
}

#[test]
fn test_checked_checkbox_and_radio_included() {
    let doc = document(
        r#"<form>
            <input type="checkbox" name="a" value="1" checked>
            <input type="radio" name="b" value="2" checked>
        </form>"#,
    );
    assert_eq!(fields(&doc), vec![single("a", "1"), single("b", "2")]);
}

#[test]
fn test_checked_checkbox_without_value() {
    let doc = document(r#"<form><input type="checkbox" name="a" checked></form>"#);
    assert_eq!(fields(&doc), vec![single("a", "")]);
}

#[test]
fn test_textarea_value_is_text_content() {
    let doc = document("<form><textarea name=\"msg\">hello\nworld</textarea></form>");
    assert_eq!(fields(&doc), vec![single("msg", "hello\nworld")]);
}

#[test]
fn test_select_defaults_to_first_option() {
    let doc = document(
        r#"<form><select name="lang">
            <option value="en">English</option>
            <option value="de">German</option>
        </select></form>"#,
    );
    assert_eq!(fields(&doc), vec![single("lang", "en")]);
}

#[test]
fn test_select_with_selected_option() {
    let doc = document(
        r#"<form><select name="lang">
            <option value="en">English</option>
            <option value="de" selected>German</option>
        </select></form>"#,
    );
    assert_eq!(fields(&doc), vec![single("lang", "de")]);
}

#[test]
fn test_select_option_value_falls_back_to_text() {
    let doc = document(
        r#"<form><select name="lang">
            <option>  English  </option>
        </select></form>"#,
    );
    assert_eq!(fields(&doc), vec![single("lang", "English")]);
}

#[test]
fn test_empty_select_contributes_nothing() {
    let doc = document(r#"<form><select name="lang"></select></form>"#);
    assert!(fields(&doc).is_empty());
}

#[test]
fn test_multi_select_document_order() {
    // Two selected options produce two entries under the same name, in
    // document order regardless of their declared values.
    let doc = document(
        r#"<form><select name="tag" multiple>
            <option value="b" selected>B</option>
            <option value="a" selected>A</option>
            <option value="c">C</option>
        </select></form>"#,
    );
    assert_eq!(
        fields(&doc),
        vec![(
            "tag".to_string(),
            FormValue::Many(vec!["b".to_string(), "a".to_string()])
        )]
    );
}

#[test]
fn test_multi_select_nothing_selected() {
    let doc = document(
        r#"<form><select name="tag" multiple>
            <option value="a">A</option>
        </select></form>"#,
    );
    // The pair exists but expands to no encoded entries.
    assert_eq!(
        fields(&doc),
        vec![("tag".to_string(), FormValue::Many(Vec::new()))]
    );
}

#[test]
fn test_unnamed_fields_dropped() {
    let doc = document(
        r#"<form>
            <input type="text" value="anonymous">
            <select><option value="x">X</option></select>
            <textarea>orphan</textarea>
            <input type="text" name="q" value="kept">
        </form>"#,
    );
    assert_eq!(fields(&doc), vec![single("q", "kept")]);
}

#[test]
fn test_overridden_fields_skipped() {
    let doc = document(
        r#"<form>
            <input type="text" name="q" value="old">
            <input type="text" name="page" value="1">
        </form>"#,
    );
    let form = locate_form(&doc, &FormCriteria::default()).unwrap().unwrap();
    let data = FormData::from_iter([("q", "new")]);
    assert_eq!(enumerate_fields(form, &data), vec![single("page", "1")]);
}

#[test]
fn test_suppressed_fields_skipped() {
    let doc = document(r#"<form><input type="text" name="q" value="old"></form>"#);
    let form = locate_form(&doc, &FormCriteria::default()).unwrap().unwrap();
    let mut data = FormData::new();
    data.suppress("q");
    assert!(enumerate_fields(form, &data).is_empty());
}

#[test]
fn test_document_order_preserved() {
    let doc = document(
        r#"<form>
            <input name="a" value="1">
            <div><textarea name="b">2</textarea></div>
            <input name="c" value="3">
        </form>"#,
    );
    let names: Vec<_> = fields(&doc).into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}
