//! An in-memory [`Document`] implementation.
//!
//! [`MemoryDocument`] stores nodes in an arena addressed by [`NodeId`]
//! handles. It starts with a single `body` element and serializes subtrees
//! the way a browser's `innerHTML` does:
//!
//! - text escapes `&`, `<` and `>`
//! - attribute values escape `&` and `"`
//! - void elements in the HTML namespace print without an end tag
//!
//! Children removed by [`Document::clear_children`] are freed together with
//! their subtrees and their slots are reused by later nodes. Handles to freed
//! nodes go stale: lookups return `None` and operations fail with
//! [`DomError::NotFound`]. Nodes detached by moving them elsewhere stay alive.
//!
//! # Example
//!
//! ```
//! # use element_model::dom::MemoryDocument;
//! # use element_model::render::render_to_tree;
//! # use element_model::{Element, ElementNode};
//! let mut document = MemoryDocument::new();
//! let body = document.body();
//! let element = Element::Html(ElementNode::new("p").with_elem(Element::text("a < b")));
//!
//! render_to_tree(&mut document, &body, &element, true).unwrap();
//! assert_eq!(document.inner_html(body), "<p>a &lt; b</p>");
//! ```

use std::fmt;

use indexmap::IndexMap;
use log::trace;
use thiserror::Error;

use element_model_core::{Namespace, markup::is_void_element};

use crate::document::Document;

/// Handle to a node of a [`MemoryDocument`].
///
/// The generation distinguishes nodes that occupied the same arena slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Errors raised by [`MemoryDocument`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("Invalid character in name '{0}'")]
    InvalidCharacter(String),

    #[error("Node {0} does not exist")]
    NotFound(NodeId),

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("Cannot append node {child} to node {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}

#[derive(Debug)]
enum NodeData {
    Element {
        namespace: Namespace,
        tag: String,
        attributes: IndexMap<String, String>,
    },
    Text(String),
}

#[derive(Debug)]
struct NodeEntry {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    entry: Option<NodeEntry>,
}

/// An arena-backed document tree.
///
/// # Invariants
///
/// - Slots in the free list hold no entry
/// - A slot's generation changes every time its node is freed
#[derive(Debug)]
pub struct MemoryDocument {
    slots: Vec<Slot>,
    free_list: Vec<usize>,
    body: NodeId,
}

impl MemoryDocument {
    /// Creates a document holding only an empty `body` element.
    pub fn new() -> Self {
        let body = NodeEntry {
            data: NodeData::Element {
                namespace: Namespace::Html,
                tag: "body".to_string(),
                attributes: IndexMap::new(),
            },
            parent: None,
            children: Vec::new(),
        };
        Self {
            slots: vec![Slot {
                generation: 0,
                entry: Some(body),
            }],
            free_list: Vec::new(),
            body: NodeId {
                index: 0,
                generation: 0,
            },
        }
    }

    /// Returns the `body` element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Returns the tag name of an element node.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.get(node)?.data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    /// Returns the namespace of an element node.
    pub fn namespace(&self, node: NodeId) -> Option<Namespace> {
        match &self.get(node)?.data {
            NodeData::Element { namespace, .. } => Some(*namespace),
            NodeData::Text(_) => None,
        }
    }

    /// Returns the value of an attribute of an element node.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.get(node)?.data {
            NodeData::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            NodeData::Text(_) => None,
        }
    }

    /// Returns the content of a text node.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.get(node)?.data {
            NodeData::Text(text) => Some(text),
            NodeData::Element { .. } => None,
        }
    }

    /// Returns the parent of a node, if attached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node)?.parent
    }

    /// Returns the children of a node. Unknown handles have no children.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node)
            .map(|entry| entry.children.as_slice())
            .unwrap_or_default()
    }

    /// Serializes the children of `node`.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(node) {
            self.serialize(*child, &mut out);
        }
        out
    }

    /// Serializes `node` itself, including its children.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.serialize(node, &mut out);
        out
    }

    /// Returns the number of live nodes, `body` included.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    fn get(&self, node: NodeId) -> Option<&NodeEntry> {
        self.slots
            .get(node.index)
            .filter(|slot| slot.generation == node.generation)?
            .entry
            .as_ref()
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut NodeEntry> {
        self.slots
            .get_mut(node.index)
            .filter(|slot| slot.generation == node.generation)?
            .entry
            .as_mut()
    }

    fn serialize(&self, node: NodeId, out: &mut String) {
        let Some(entry) = self.get(node) else {
            return;
        };

        match &entry.data {
            NodeData::Text(text) => push_escaped_text(out, text),
            NodeData::Element {
                namespace,
                tag,
                attributes,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    push_escaped_attribute(out, value);
                    out.push('"');
                }
                out.push('>');

                if *namespace == Namespace::Html && is_void_element(tag) {
                    return;
                }

                for child in &entry.children {
                    self.serialize(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }

    fn entry(&self, node: NodeId) -> Result<&NodeEntry, DomError> {
        self.get(node).ok_or(DomError::NotFound(node))
    }

    fn entry_mut(&mut self, node: NodeId) -> Result<&mut NodeEntry, DomError> {
        self.get_mut(node).ok_or(DomError::NotFound(node))
    }

    /// Stores a new node, reusing a free slot if available.
    fn push_node(&mut self, data: NodeData) -> NodeId {
        let entry = NodeEntry {
            data,
            parent: None,
            children: Vec::new(),
        };

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index];
            slot.entry = Some(entry);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        self.slots.push(Slot {
            generation: 0,
            entry: Some(entry),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    /// Frees `node` and its whole subtree, returning the slots to the free list.
    fn release(&mut self, node: NodeId) {
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            let Some(slot) = self
                .slots
                .get_mut(id.index)
                .filter(|slot| slot.generation == id.generation)
            else {
                continue;
            };
            let Some(entry) = slot.entry.take() else {
                continue;
            };
            slot.generation = slot.generation.wrapping_add(1);
            self.free_list.push(id.index);
            pending.extend(entry.children);
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn detach(&mut self, node: NodeId) -> Result<(), DomError> {
        if let Some(parent) = self.entry_mut(node)?.parent.take() {
            self.entry_mut(parent)?.children.retain(|child| *child != node);
        }
        Ok(())
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;
    type Error = DomError;

    fn create_element(&mut self, namespace: Namespace, tag: &str) -> Result<NodeId, DomError> {
        check_name(tag)?;
        let id = self.push_node(NodeData::Element {
            namespace,
            tag: tag.to_string(),
            attributes: IndexMap::new(),
        });
        trace!(node:% = id, namespace:% = namespace, tag = tag; "Created element");
        Ok(id)
    }

    fn create_text_node(&mut self, text: &str) -> Result<NodeId, DomError> {
        Ok(self.push_node(NodeData::Text(text.to_string())))
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        check_name(name)?;
        match &mut self.entry_mut(*element)?.data {
            NodeData::Element { attributes, .. } => {
                attributes.insert(name.to_string(), value.to_string());
                Ok(())
            }
            NodeData::Text(_) => Err(DomError::NotAnElement(*element)),
        }
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        let (parent, child) = (*parent, *child);
        self.entry(child)?;
        let hierarchy_error = DomError::HierarchyRequest { parent, child };

        if matches!(self.entry(parent)?.data, NodeData::Text(_))
            || self.is_inclusive_ancestor(child, parent)
        {
            return Err(hierarchy_error);
        }

        self.detach(child)?;
        self.entry_mut(child)?.parent = Some(parent);
        self.entry_mut(parent)?.children.push(child);
        Ok(())
    }

    fn clear_children(&mut self, parent: &NodeId) -> Result<(), DomError> {
        let children = std::mem::take(&mut self.entry_mut(*parent)?.children);
        trace!(node:% = parent, count = children.len(); "Clearing children");
        for child in children {
            self.release(child);
        }
        Ok(())
    }
}

/// Rejects names a document cannot create elements or attributes for.
fn check_name(name: &str) -> Result<(), DomError> {
    let invalid = name.is_empty()
        || name
            .chars()
            .any(|ch| ch.is_whitespace() || matches!(ch, '<' | '>' | '/' | '=' | '"' | '\''));
    if invalid {
        Err(DomError::InvalidCharacter(name.to_string()))
    } else {
        Ok(())
    }
}

fn push_escaped_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

fn push_escaped_attribute(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(document: &mut MemoryDocument, tag: &str) -> NodeId {
        document
            .create_element(Namespace::Html, tag)
            .expect("valid tag")
    }

    #[test]
    fn test_new_document_has_empty_body() {
        let document = MemoryDocument::new();
        assert_eq!(document.tag(document.body()), Some("body"));
        assert!(document.children(document.body()).is_empty());
        assert_eq!(document.inner_html(document.body()), "");
    }

    #[test]
    fn test_append_and_serialize() {
        let mut document = MemoryDocument::new();
        let body = document.body();
        let div = element(&mut document, "div");
        document.set_attribute(&div, "id", "Id").unwrap();
        let text = document.create_text_node("x & <y>").unwrap();
        document.append_child(&div, &text).unwrap();
        document.append_child(&body, &div).unwrap();

        assert_eq!(document.inner_html(body), r#"<div id="Id">x &amp; &lt;y&gt;</div>"#);
        assert_eq!(document.parent(div), Some(body));
        assert_eq!(document.text(text), Some("x & <y>"));
    }

    #[test]
    fn test_attribute_escaping_and_replacement() {
        let mut document = MemoryDocument::new();
        let span = element(&mut document, "span");
        document.set_attribute(&span, "title", "a").unwrap();
        document.set_attribute(&span, "class", "b").unwrap();
        document.set_attribute(&span, "title", "\"q\" & <r>").unwrap();

        assert_eq!(
            document.outer_html(span),
            r#"<span title="&quot;q&quot; &amp; <r>" class="b"></span>"#
        );
        assert_eq!(document.attribute(span, "class"), Some("b"));
    }

    #[test]
    fn test_void_elements_only_in_html_namespace() {
        let mut document = MemoryDocument::new();
        let br = element(&mut document, "br");
        let svg_br = document.create_element(Namespace::Svg, "br").unwrap();

        assert_eq!(document.outer_html(br), "<br>");
        assert_eq!(document.outer_html(svg_br), "<br></br>");
        assert_eq!(document.namespace(svg_br), Some(Namespace::Svg));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut document = MemoryDocument::new();
        assert_eq!(
            document.create_element(Namespace::Html, ""),
            Err(DomError::InvalidCharacter(String::new()))
        );
        assert!(document.create_element(Namespace::Html, "a b").is_err());

        let div = element(&mut document, "div");
        assert_eq!(
            document.set_attribute(&div, "on=x", "1"),
            Err(DomError::InvalidCharacter("on=x".to_string()))
        );

        let text = document.create_text_node("t").unwrap();
        assert_eq!(
            document.set_attribute(&text, "id", "1"),
            Err(DomError::NotAnElement(text))
        );
    }

    #[test]
    fn test_append_moves_node() {
        let mut document = MemoryDocument::new();
        let body = document.body();
        let first = element(&mut document, "div");
        let second = element(&mut document, "div");
        let child = element(&mut document, "p");
        document.append_child(&body, &first).unwrap();
        document.append_child(&body, &second).unwrap();
        document.append_child(&first, &child).unwrap();
        document.append_child(&second, &child).unwrap();

        assert!(document.children(first).is_empty());
        assert_eq!(document.children(second), &[child]);
        assert_eq!(document.parent(child), Some(second));
    }

    #[test]
    fn test_hierarchy_errors() {
        let mut document = MemoryDocument::new();
        let outer = element(&mut document, "div");
        let inner = element(&mut document, "div");
        let text = document.create_text_node("t").unwrap();
        document.append_child(&outer, &inner).unwrap();

        assert_eq!(
            document.append_child(&inner, &outer),
            Err(DomError::HierarchyRequest {
                parent: inner,
                child: outer
            })
        );
        assert!(document.append_child(&outer, &outer).is_err());
        assert!(document.append_child(&text, &inner).is_err());

        let missing = NodeId {
            index: 99,
            generation: 0,
        };
        assert_eq!(
            document.append_child(&outer, &missing),
            Err(DomError::NotFound(missing))
        );
    }

    #[test]
    fn test_clear_children_detaches() {
        let mut document = MemoryDocument::new();
        let body = document.body();
        let div = element(&mut document, "div");
        document.append_child(&body, &div).unwrap();
        document.clear_children(&body).unwrap();

        assert_eq!(document.inner_html(body), "");
        assert_eq!(document.parent(div), None);
        assert_eq!(document.tag(div), None);
    }

    #[test]
    fn test_cleared_slots_are_reused() {
        let mut document = MemoryDocument::new();
        let body = document.body();

        for _ in 0..3 {
            document.clear_children(&body).unwrap();
            let div = element(&mut document, "div");
            let text = document.create_text_node("t").unwrap();
            document.append_child(&div, &text).unwrap();
            document.append_child(&body, &div).unwrap();
        }

        assert_eq!(document.node_count(), 3);
        assert_eq!(document.slots.len(), 3);
        assert_eq!(document.inner_html(body), "<div>t</div>");
    }

    #[test]
    fn test_stale_handle_does_not_alias_reused_slot() {
        let mut document = MemoryDocument::new();
        let body = document.body();
        let old = element(&mut document, "div");
        document.append_child(&body, &old).unwrap();
        document.clear_children(&body).unwrap();

        let new = element(&mut document, "span");
        assert_ne!(old, new);
        assert_eq!(document.tag(new), Some("span"));
        assert_eq!(document.tag(old), None);
        assert_eq!(
            document.append_child(&body, &old),
            Err(DomError::NotFound(old))
        );
    }

    #[test]
    fn test_moved_node_survives_clear() {
        let mut document = MemoryDocument::new();
        let body = document.body();
        let holder = element(&mut document, "div");
        let child = element(&mut document, "p");
        document.append_child(&body, &holder).unwrap();
        document.append_child(&holder, &child).unwrap();

        document.append_child(&body, &child).unwrap();
        document.clear_children(&holder).unwrap();

        assert_eq!(document.inner_html(body), "<div></div><p></p>");
    }
}
