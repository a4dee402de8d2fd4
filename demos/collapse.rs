use collapse::Document;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let html = r#"
<h1>cuda</h1>
<ul class="versions">
  <li class="new">cuda:12.4</li>
  <li class="new">cuda:12.1</li>
  <li class="old">cuda:9.2</li>
  <li class="old">cuda:8.0</li>
  <li class="switch"><label><input type="checkbox" id="show_all"> show all versions</label></li>
</ul>
"#;

    let document = Document::from(html);

    document.toggle_visibility().unwrap();
    println!("collapsed:\n{}", document.html());

    let mut control = document.select("#show_all");
    control.set_attr("checked", "checked");

    document.toggle_visibility().unwrap();
    println!("expanded:\n{}", document.html());
}
