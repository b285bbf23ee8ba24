//! HTML rendering.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::markup::{Element, Node};
use crate::view::APP_TITLE;

/// Render an element tree to an HTML fragment.
pub fn render(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

/// Render an element tree as the body of a complete HTML5 document.
pub fn render_document(root: &Element) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        encode_text(APP_TITLE),
        render(root)
    )
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag.name());
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');
    for child in &el.children {
        match child {
            Node::Element(e) => write_element(e, out),
            Node::Text(t) => out.push_str(&encode_text(t)),
        }
    }
    out.push_str("</");
    out.push_str(el.tag.name());
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Tag;

    #[test]
    fn test_render_nested() {
        let el = Element::new(Tag::Div)
            .class("app")
            .child(Element::new(Tag::Heading(1)).child("Title"));
        assert_eq!(render(&el), "<div class=\"app\"><h1>Title</h1></div>");
    }

    #[test]
    fn test_render_escapes_text_and_attrs() {
        let el = Element::new(Tag::P)
            .attr("title", "a \"quoted\" <b>")
            .child("1 < 2 & 'x'");
        assert_eq!(
            render(&el),
            "<p title=\"a &quot;quoted&quot; &lt;b&gt;\">1 &lt; 2 &amp; 'x'</p>"
        );
    }

    #[test]
    fn test_render_escapes_markup_like_text() {
        let el = Element::new(Tag::P).child("<script>alert(\"x\")</script>");
        assert_eq!(
            render(&el),
            "<p>&lt;script&gt;alert(\"x\")&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn test_document_wraps_fragment() {
        let el = Element::new(Tag::P).child("hi");
        let doc = render_document(&el);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Quantum Circuit Editor</title>"));
        assert!(doc.contains("<body>\n<p>hi</p>\n</body>"));
    }
}
