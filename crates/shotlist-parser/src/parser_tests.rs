//! Tests for the full parse pipeline: tokenizing, tree building, and error
//! reporting through [`crate::parse`].

use shotlist_core::markup::{DOCUMENT_TAG, Element, Node};

use crate::{Span, error::ErrorCode, parse};

fn parse_root(source: &str) -> Element {
    match parse(source) {
        Ok(Node::Element(root)) => root,
        Ok(Node::Text(_)) => panic!("Expected an element root"),
        Err(err) => panic!("Expected parsing to succeed, but got error: {err}"),
    }
}

fn error_codes(source: &str) -> Vec<ErrorCode> {
    let err = parse(source).expect_err("Expected parsing to fail");
    err.diagnostics()
        .iter()
        .filter_map(|diagnostic| diagnostic.code())
        .collect()
}

#[test]
fn test_root_is_document() {
    let root = parse_root("<p>x</p>");

    assert_eq!(root.tag(), DOCUMENT_TAG);
    assert_eq!(root.span(), Span::new(0..8));
}

#[test]
fn test_empty_source() {
    let root = parse_root("");

    assert_eq!(root.tag(), DOCUMENT_TAG);
    assert!(root.children().is_empty());
}

#[test]
fn test_full_document() {
    let source = r#"<!DOCTYPE html>
<html>
  <head><title>Storyboard</title></head>
  <body>
    <h1>Act One</h1>
    <p>Fade in on <a href="/city">the city</a>.</p>
  </body>
</html>"#;
    let root = parse_root(source);

    let title = root.find("title").expect("title element");
    assert_eq!(title.text_content(), "Storyboard");

    let body = root.find("body").expect("body element");
    let tags: Vec<&str> = body
        .children()
        .iter()
        .filter_map(Node::as_element)
        .map(Element::tag)
        .collect();
    assert_eq!(tags, vec!["h1", "p"]);

    let link = body.find("a").expect("a element");
    assert_eq!(link.attribute("href"), Some("/city"));
    assert_eq!(link.text_content(), "the city");
}

#[test]
fn test_text_references_decoded() {
    let root = parse_root("<p>Tom &amp; Jerry &mdash; &#169;</p>");
    let p = root.find("p").expect("p element");

    assert_eq!(p.text_content(), "Tom & Jerry \u{2014} \u{a9}");
}

#[test]
fn test_unclosed_document_recovers() {
    let root = parse_root("<body><dl><dt>Scene<dd><p>Shot one<p>Shot two");
    let dl = root.find("dl").expect("dl element");

    let shape: Vec<&str> = dl
        .children()
        .iter()
        .filter_map(Node::as_element)
        .map(Element::tag)
        .collect();
    assert_eq!(shape, vec!["dt", "dd"]);

    let dd = dl.find("dd").expect("dd element");
    assert_eq!(dd.children().len(), 2);
    assert_eq!(dd.text_content(), "Shot oneShot two");
}

#[test]
fn test_stray_end_tags_do_not_fail() {
    let root = parse_root("</div><p>text</span></p></p>");

    assert_eq!(root.children().len(), 1);
    assert_eq!(root.text_content(), "text");
}

#[test]
fn test_script_content_is_raw() {
    let root = parse_root("<script>if (a<b) { s = '<p>'; }</script><p>after</p>");
    let script = root.find("script").expect("script element");

    assert_eq!(script.text_content(), "if (a<b) { s = '<p>'; }");
    assert!(script.find("p").is_none());
}

#[test]
fn test_unclosed_script_is_a_warning() {
    let root = parse_root("<script>never closed");
    let script = root.find("script").expect("script element");

    assert_eq!(script.text_content(), "never closed");
}

#[test]
fn test_unterminated_comment_fails() {
    assert_eq!(error_codes("<p>a</p><!-- never closed"), vec![ErrorCode::E001]);
}

#[test]
fn test_unterminated_attribute_value_fails() {
    // The `</a>` left behind by the broken start tag adds an E100 warning.
    assert_eq!(
        error_codes(r#"<a href="/home>Home</a>"#),
        vec![ErrorCode::E002, ErrorCode::E100]
    );
}

#[test]
fn test_unterminated_tag_fails() {
    assert_eq!(error_codes("<p>x</p><p class=x"), vec![ErrorCode::E003]);
}

#[test]
fn test_error_includes_warnings() {
    let err = parse("</span><p class=x").expect_err("Expected parsing to fail");

    let codes: Vec<ErrorCode> = err
        .diagnostics()
        .iter()
        .filter_map(|diagnostic| diagnostic.code())
        .collect();
    assert!(codes.contains(&ErrorCode::E100));
    assert!(codes.contains(&ErrorCode::E003));
}

#[test]
fn test_error_span_points_at_problem() {
    let source = "<p>ok</p>\n<!-- oops";
    let err = parse(source).expect_err("Expected parsing to fail");

    let diagnostic = &err.diagnostics()[0];
    let label = &diagnostic.labels()[0];
    assert_eq!(label.span().start(), 10);
}
