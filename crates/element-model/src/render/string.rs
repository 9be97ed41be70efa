//! Markup text serialization.

use log::debug;

use element_model_core::{
    Element, ElementNode,
    markup::{is_void_element, push_escaped},
};

use super::Indent;

/// Renders an element tree to markup text.
///
/// Text and attribute values are escaped, `null` attributes are omitted and
/// void elements self-close without their children. Callbacks are ignored.
/// With an indentation unit, every tag and text node sits on its own line
/// prefixed by one unit per depth level.
///
/// # Examples
///
/// ```
/// # use element_model::render::{Indent, render_to_string};
/// # use element_model::{Element, ElementNode};
/// let element: Element = Element::Html(ElementNode::new("div").with_elem(Element::text("Hello")));
///
/// assert_eq!(render_to_string(&element, &Indent::None), "<div>Hello</div>");
/// assert_eq!(render_to_string(&element, &Indent::Spaces(2)), "<div>\n  Hello\n</div>\n");
/// ```
pub fn render_to_string<'a, H: 'a>(
    element: impl Into<Option<&'a Element<H>>>,
    indent: &Indent,
) -> String {
    let Some(element) = element.into() else {
        return String::new();
    };

    let mut renderer = StringRenderer::new(indent.unit());
    renderer.render(element, 0);
    debug!(bytes = renderer.out.len(), dense = indent.is_dense(); "Rendered markup text");
    renderer.out
}

struct StringRenderer {
    out: String,
    unit: Option<String>,
}

impl StringRenderer {
    fn new(unit: Option<String>) -> Self {
        Self {
            out: String::new(),
            unit,
        }
    }

    fn render<H>(&mut self, element: &Element<H>, depth: usize) {
        match element {
            Element::Sequence(elements) => {
                for element in elements {
                    self.render(element, depth);
                }
            }
            Element::Text(text) => {
                self.open_line(depth);
                push_escaped(&mut self.out, text);
                self.close_line();
            }
            Element::Html(node) | Element::Svg(node) => self.render_node(node, depth),
        }
    }

    fn render_node<H>(&mut self, node: &ElementNode<H>, depth: usize) {
        self.open_line(depth);
        self.out.push('<');
        self.out.push_str(node.tag());
        for (name, value) in node.attributes() {
            let Some(text) = value.coerce() else {
                continue;
            };
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            push_escaped(&mut self.out, &text);
            self.out.push('"');
        }

        if is_void_element(node.tag()) {
            self.out.push_str(" />");
            self.close_line();
            return;
        }

        self.out.push('>');
        self.close_line();

        if let Some(elem) = node.elem() {
            self.render(elem, depth + 1);
        }

        self.open_line(depth);
        self.out.push_str("</");
        self.out.push_str(node.tag());
        self.out.push('>');
        self.close_line();
    }

    fn open_line(&mut self, depth: usize) {
        if let Some(unit) = &self.unit {
            for _ in 0..depth {
                self.out.push_str(unit);
            }
        }
    }

    fn close_line(&mut self) {
        if self.unit.is_some() {
            self.out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use element_model_core::AttrValue;

    use super::*;

    fn html(tag: &str) -> ElementNode {
        ElementNode::new(tag)
    }

    #[test]
    fn test_void_element_drops_children() {
        let element = Element::Html(html("br").with_elem(Element::text("x")));
        assert_eq!(render_to_string(&element, &Indent::None), "<br />");
    }

    #[test]
    fn test_sequence_concatenates() {
        let element: Element = Element::sequence([
            Element::Html(html("p").with_elem(Element::text("One"))),
            Element::Html(html("p").with_elem(Element::text("Two"))),
        ]);
        assert_eq!(render_to_string(&element, &Indent::None), "<p>One</p><p>Two</p>");
    }

    #[test]
    fn test_indented_nesting() {
        let element = Element::Html(html("ul").with_elem(vec![
            Element::Html(html("li").with_elem(Element::text("a"))),
            Element::Html(html("li")),
            Element::Html(html("hr")),
        ]));
        let expected = "<ul>\n\t<li>\n\t\ta\n\t</li>\n\t<li>\n\t</li>\n\t<hr />\n</ul>\n";
        assert_eq!(render_to_string(&element, &Indent::from("\t")), expected);
    }

    #[test]
    fn test_attributes_coerced_escaped_and_ordered() {
        let element = Element::Html(
            html("input")
                .with_attr("value", "\"a\" & 'b'")
                .with_attr("hidden", AttrValue::Null)
                .with_attr("size", 0)
                .with_attr("checked", true)
                .with_attr("data-x", AttrValue::Undefined),
        );
        assert_eq!(
            render_to_string(&element, &Indent::None),
            r#"<input value="&quot;a&quot; &amp; &#039;b&#039;" size="0" checked="true" data-x="undefined" />"#
        );
    }

    #[test]
    fn test_text_escaped() {
        let element: Element = Element::text("<b>&</b>");
        assert_eq!(render_to_string(&element, &Indent::None), "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn test_svg_elements_and_callbacks() {
        let calls = Rc::new(Cell::new(0));
        let observed = Rc::clone(&calls);
        let element = Element::Svg(
            html("svg")
                .with_attr("width", 600)
                .with_callback(move |_: &()| observed.set(observed.get() + 1))
                .with_elem(Element::Svg(html("rect").with_attr("x", 1.5))),
        );
        assert_eq!(
            render_to_string(&element, &Indent::None),
            r#"<svg width="600"><rect x="1.5"></rect></svg>"#
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_none_and_empty_render_nothing() {
        assert_eq!(render_to_string(None::<&Element>, &Indent::Spaces(2)), "");
        assert_eq!(render_to_string(&Element::<()>::empty(), &Indent::Spaces(2)), "");
    }

    #[test]
    fn test_zero_spaces_is_dense() {
        let element = Element::Html(html("div").with_elem(Element::text("Hello")));
        assert_eq!(render_to_string(&element, &Indent::Spaces(0)), "<div>Hello</div>");
    }
}
