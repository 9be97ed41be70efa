//! Live node construction through a [`Document`].

use log::{debug, trace};

use element_model_core::{Element, ElementNode, Namespace};

use crate::document::Document;

/// Renders an element tree as children of `parent`.
///
/// When `clear_first` is set the existing children of `parent` are removed
/// first; otherwise the new nodes are appended after them. `None` renders
/// nothing, so with `clear_first` it only clears.
///
/// Each element node is appended to its parent before its own children are
/// rendered, and its callback runs once all of them are attached. Callbacks
/// therefore fire in post-order within a subtree and in document order
/// across siblings.
///
/// # Errors
///
/// Returns the first error raised by `document`, unmodified. Nodes created
/// before the failure stay attached.
pub fn render_to_tree<'a, D>(
    document: &mut D,
    parent: &D::Node,
    element: impl Into<Option<&'a Element<D::Node>>>,
    clear_first: bool,
) -> Result<(), D::Error>
where
    D: Document,
    D::Node: 'a,
{
    if clear_first {
        document.clear_children(parent)?;
    }

    let Some(element) = element.into() else {
        debug!(clear_first; "Nothing to render");
        return Ok(());
    };

    debug!(clear_first, nodes = element.node_count(); "Rendering element tree");
    render_element(document, parent, element)
}

fn render_element<D: Document>(
    document: &mut D,
    parent: &D::Node,
    element: &Element<D::Node>,
) -> Result<(), D::Error> {
    match element {
        Element::Sequence(elements) => elements
            .iter()
            .try_for_each(|element| render_element(document, parent, element)),
        Element::Text(text) => {
            let node = document.create_text_node(text)?;
            document.append_child(parent, &node)
        }
        Element::Html(node) => render_node(document, parent, Namespace::Html, node),
        Element::Svg(node) => render_node(document, parent, Namespace::Svg, node),
    }
}

fn render_node<D: Document>(
    document: &mut D,
    parent: &D::Node,
    namespace: Namespace,
    node: &ElementNode<D::Node>,
) -> Result<(), D::Error> {
    trace!(namespace:% = namespace, tag = node.tag(); "Creating element");
    let created = document.create_element(namespace, node.tag())?;

    for (name, value) in node.attributes() {
        if let Some(text) = value.coerce() {
            document.set_attribute(&created, name, &text)?;
        }
    }

    document.append_child(parent, &created)?;

    if let Some(elem) = node.elem() {
        render_element(document, &created, elem)?;
    }

    if let Some(callback) = node.callback() {
        callback.on_created(&created);
    }

    Ok(())
}
