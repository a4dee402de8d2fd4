mod data;

use collapse::Document;
use data::versions_page;

#[test]
fn finds_whole_tokens_only() {
    let doc = Document::from(
        r#"<ul>
        <li class="old">a</li>
        <li class="oldest">b</li>
        <li class="very old">c</li>
        <li class="bold">d</li>
    </ul>"#,
    );

    let sel = doc.find_by_class("old");
    assert_eq!(sel.length(), 2);
    assert_eq!(&*sel.text(), "ac");
}

#[test]
fn results_follow_document_order() {
    let doc = Document::from(
        r#"<div class="x">1<span class="x">2</span></div><p class="x">3</p>"#,
    );

    let texts: Vec<String> = doc
        .find_by_class("x")
        .iter()
        .map(|sel| sel.text().to_string())
        .collect();

    assert_eq!(texts, vec!["12", "2", "3"]);
}

#[test]
fn matches_multi_class_attributes() {
    let doc = versions_page();
    let mut group = doc.select(".versions").select("li");
    group.set_attr("class", "entry old");

    assert_eq!(doc.find_by_class("old").length(), 9);
    assert_eq!(doc.find_by_class("entry").length(), 9);
}

#[test]
fn missing_class_yields_empty_selection() {
    let doc = versions_page();
    let sel = doc.find_by_class("archived");

    assert!(!sel.exists());
    assert_eq!(sel.length(), 0);
}

#[test]
fn scoped_lookup_ignores_matches_outside_the_selection() {
    let doc = Document::from(
        r#"<ul id="a"><li class="old">in</li></ul>
           <ul id="b"><li class="old">out</li></ul>"#,
    );

    let scoped = doc.select("#a").find_by_class("old");
    assert_eq!(scoped.length(), 1);
    assert_eq!(&*scoped.text(), "in");
}

#[test]
fn falls_back_for_class_names_css_cannot_express() {
    // Leading digits and embedded colons are fine in HTML class attributes
    // but do not parse as CSS class selectors.
    let doc = Document::from(
        r#"<ul>
        <li class="2024">a</li>
        <li class="2024-archive">b</li>
        <li class="build:old">c</li>
    </ul>"#,
    );

    let years = doc.find_by_class("2024");
    assert_eq!(years.length(), 1);
    assert_eq!(&*years.text(), "a");

    let tagged = doc.find_by_class("build:old");
    assert_eq!(tagged.length(), 1);
    assert_eq!(&*tagged.text(), "c");
}

#[test]
fn try_select_rejects_invalid_selectors() {
    let doc = versions_page();

    assert!(doc.try_select("li.switch").is_some());
    assert!(doc.try_select("").is_none());
    assert!(doc.try_select(".2024").is_none());
}

#[test]
fn fixture_groups_have_the_expected_sizes() {
    let doc = versions_page();

    assert_eq!(doc.find_by_class("new").length(), 5);
    assert_eq!(doc.find_by_class("old").length(), 3);
    assert_eq!(doc.find_by_class("switch").length(), 1);
}
