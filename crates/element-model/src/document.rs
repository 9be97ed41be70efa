//! The live document capability used by the tree renderer.
//!
//! The tree renderer never builds nodes itself. It drives a [`Document`]
//! implementation through five operations: create an element, create a text
//! node, set an attribute, append a child and clear a node's children.
//! Failures of these operations propagate out of the renderer unchanged.
//!
//! [`crate::dom::MemoryDocument`] is an in-memory implementation.

use std::error::Error;

use element_model_core::Namespace;

/// A mutable document tree the tree renderer can build into.
pub trait Document {
    /// Handle to a node of this document.
    type Node;

    /// Error raised by document operations.
    type Error: Error;

    /// Creates a detached element named `tag` in the given namespace.
    fn create_element(&mut self, namespace: Namespace, tag: &str)
    -> Result<Self::Node, Self::Error>;

    /// Creates a detached text node. `text` is literal content, not markup.
    fn create_text_node(&mut self, text: &str) -> Result<Self::Node, Self::Error>;

    /// Sets attribute `name` of `element` to `value`.
    fn set_attribute(
        &mut self,
        element: &Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), Self::Error>;

    /// Appends `child` as the last child of `parent`.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node)
    -> Result<(), Self::Error>;

    /// Removes all children of `parent`.
    fn clear_children(&mut self, parent: &Self::Node) -> Result<(), Self::Error>;
}
