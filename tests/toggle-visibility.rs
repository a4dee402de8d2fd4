mod data;

use collapse::{Document, Error};
use data::{check, uncheck, versions_page};

fn styles(doc: &Document, class_name: &str) -> Vec<String> {
    doc.find_by_class(class_name)
        .iter()
        .map(|sel| sel.attr_or("style", "").to_string())
        .collect()
}

#[test]
fn collapsed_while_unchecked() {
    let doc = versions_page();

    doc.toggle_visibility().unwrap();

    assert!(styles(&doc, "old").iter().all(|s| s == "display: none"));
    assert!(styles(&doc, "switch").iter().all(|s| s == "display: list-item"));
}

#[test]
fn expanded_while_checked() {
    let doc = versions_page();
    check(&doc);

    doc.toggle_visibility().unwrap();

    assert!(styles(&doc, "old").iter().all(|s| s == "display: list-item"));
    assert!(styles(&doc, "switch").iter().all(|s| s == "display: none"));
}

#[test]
fn groups_stay_complementary_across_toggles() {
    let doc = versions_page();

    for _ in 0..3 {
        check(&doc);
        doc.toggle_visibility().unwrap();
        assert!(styles(&doc, "old").iter().all(|s| s == "display: list-item"));
        assert!(styles(&doc, "switch").iter().all(|s| s == "display: none"));

        uncheck(&doc);
        doc.toggle_visibility().unwrap();
        assert!(styles(&doc, "old").iter().all(|s| s == "display: none"));
        assert!(styles(&doc, "switch").iter().all(|s| s == "display: list-item"));
    }
}

#[test]
fn repeated_calls_are_idempotent() {
    let doc = versions_page();

    doc.toggle_visibility().unwrap();
    let once = doc.html();
    doc.toggle_visibility().unwrap();

    assert_eq!(doc.html(), once);
}

#[test]
fn untouched_elements_keep_their_markup() {
    let doc = versions_page();

    doc.toggle_visibility().unwrap();

    assert!(!doc.select("h1").attr("style").is_some());
    assert!(styles(&doc, "new").iter().all(|s| s.is_empty()));
}

#[test]
fn preserves_unrelated_style_declarations() {
    let doc = Document::from(
        r#"<ul>
        <li class="old" style="color: grey">cuda:8.0</li>
        <li class="switch" style="font-style: italic; display: none">show all</li>
    </ul>
    <input type="checkbox" id="show_all">"#,
    );

    doc.toggle_visibility().unwrap();

    assert_eq!(
        &*doc.find_by_class("old").attr("style").unwrap(),
        "color: grey; display: none"
    );
    assert_eq!(
        &*doc.find_by_class("switch").attr("style").unwrap(),
        "font-style: italic; display: list-item"
    );
}

#[test]
fn empty_groups_are_a_normal_outcome() {
    let doc = Document::from(r#"<p>nothing to fold</p><input type="checkbox" id="show_all">"#);
    let before = doc.html();

    doc.toggle_visibility().unwrap();

    assert_eq!(doc.html(), before);
}

#[test]
fn missing_control_fails_without_mutating() {
    let doc = Document::from(r#"<ul><li class="old">cuda:8.0</li></ul>"#);
    let before = doc.html();

    let err = doc.toggle_visibility().unwrap_err();

    assert_eq!(err, Error::ControlNotFound("show_all".to_owned()));
    assert_eq!(doc.html(), before);
}

#[test]
fn checked_attribute_needs_no_value() {
    let doc = Document::from(
        r#"<ul><li class="old">cuda:8.0</li></ul>
           <input type="checkbox" id="show_all" checked>"#,
    );

    doc.toggle_visibility().unwrap();

    assert_eq!(
        &*doc.find_by_class("old").attr("style").unwrap(),
        "display: list-item"
    );
}
