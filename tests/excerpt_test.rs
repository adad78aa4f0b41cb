//! Integration tests for element excerpts.

use xmlschema_errors::{render_excerpt, ElementRef, ExcerptOptions, MAX_EXCERPT_LINES};

fn document_with_items(count: usize) -> String {
    let mut xml = String::from("<xs:sequence xmlns:xs=\"http://www.w3.org/2001/XMLSchema\">\n");
    for i in 0..count {
        xml.push_str(&format!("  <xs:element name=\"e{i}\"/>\n"));
    }
    xml.push_str("</xs:sequence>");
    xml
}

#[test]
fn test_node_within_limit_renders_unmodified() {
    let xml = document_with_items(5);
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let excerpt = render_excerpt(doc.root_element().into(), &ExcerptOptions::default());
    assert_eq!(excerpt, xml);
}

#[test]
fn test_node_over_limit_is_truncated() {
    let xml = document_with_items(40);
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let elem = ElementRef::from(doc.root_element());
    assert_eq!(elem.line_count(), 42);

    let excerpt = render_excerpt(elem, &ExcerptOptions::default());
    let lines: Vec<&str> = excerpt.lines().collect();

    assert_eq!(lines.len(), MAX_EXCERPT_LINES + 2);
    let head: Vec<&str> = xml.lines().take(MAX_EXCERPT_LINES).collect();
    assert_eq!(&lines[..MAX_EXCERPT_LINES], &head[..]);
    assert_eq!(lines[MAX_EXCERPT_LINES], "    ...");
    assert_eq!(lines[MAX_EXCERPT_LINES + 1], "  </xs:sequence>");
}

#[test]
fn test_nested_node_excerpt() {
    let xml = "<root>\n  <child>\n    <leaf/>\n  </child>\n</root>";
    let doc = roxmltree::Document::parse(xml).unwrap();
    let child = doc.root_element().first_element_child().unwrap();

    let excerpt = render_excerpt(child.into(), &ExcerptOptions::default());
    assert_eq!(excerpt, "<child>\n    <leaf/>\n  </child>");

    let truncated = render_excerpt(child.into(), &ExcerptOptions::new().with_max_lines(1));
    assert_eq!(truncated, "<child>\n    ...\n  </child>");
}

#[test]
fn test_custom_cap_and_indent() {
    let xml = document_with_items(10);
    let excerpt = render_excerpt(
        ElementRef::from(&xml),
        &ExcerptOptions::new().with_max_lines(3).with_indent("  "),
    );
    let lines: Vec<&str> = excerpt.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|line| line.starts_with("  ")));
    assert_eq!(lines[3], "      ...");
    assert_eq!(lines[4], "    </xs:sequence>");
}

#[test]
fn test_rendering_is_pure() {
    let xml = document_with_items(30);
    let options = ExcerptOptions::default();
    let first = render_excerpt(ElementRef::from(&xml), &options);
    let second = render_excerpt(ElementRef::from(&xml), &options);
    assert_eq!(first, second);
}

#[test]
fn test_text_node_reference() {
    let doc = roxmltree::Document::parse("<a>hello</a>").unwrap();
    let text = doc.root_element().first_child().unwrap();
    let elem = ElementRef::from(text);

    assert_eq!(elem.source(), "hello");
    assert_eq!(elem.tag_name(), None);
}
