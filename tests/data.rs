#![allow(dead_code)]
use collapse::Document;

/// A rendered module-versions page: five current builds, three archived
/// ones, and a hint row carrying the `show_all` checkbox.
pub fn versions_page() -> Document {
    Document::from(
        r#"<!DOCTYPE html>
<html>
<head><title>module: cuda</title></head>
<body>
<h1>cuda</h1>
<ul class="versions">
  <li class="new">cuda:12.4</li>
  <li class="new">cuda:12.1</li>
  <li class="new">cuda:11.8</li>
  <li class="new">cuda:11.2</li>
  <li class="new">cuda:10.2</li>
  <li class="old">cuda:10.0</li>
  <li class="old">cuda:9.2</li>
  <li class="old">cuda:8.0</li>
  <li class="switch"><label><input type="checkbox" id="show_all"> show all versions</label></li>
</ul>
</body>
</html>"#,
    )
}

pub fn check(doc: &Document) {
    let mut control = doc.select("#show_all");
    control.set_attr("checked", "checked");
}

pub fn uncheck(doc: &Document) {
    let mut control = doc.select("#show_all");
    control.remove_attr("checked");
}
