//! The element model tree.
//!
//! An [`Element`] is one of:
//! - [`Element::Sequence`]: an ordered list of elements, flattened on render
//! - [`Element::Html`] / [`Element::Svg`]: an [`ElementNode`] in the HTML or SVG namespace
//! - [`Element::Text`]: a text leaf
//!
//! Exactly one kind per node holds by construction. The only structural rule the
//! types cannot express is that tag names are non-empty.
//!
//! # Example
//!
//! ```
//! # use element_model_core::{Element, ElementNode};
//! let page: Element = Element::sequence([
//!     Element::Html(ElementNode::new("h1").with_elem(Element::text("Title"))),
//!     Element::Html(
//!         ElementNode::new("p")
//!             .with_attr("class", "lead")
//!             .with_elem(Element::text("Hello")),
//!     ),
//! ]);
//! assert_eq!(page.node_count(), 4);
//! ```

use std::{fmt, rc::Rc};

use indexmap::IndexMap;

use crate::attribute::AttrValue;

/// Attribute map of an element node, in insertion order.
pub type Attributes = IndexMap<String, AttrValue>;

/// A shared element callback.
pub type Callback<H> = Rc<dyn ElementCallback<H>>;

/// The markup namespace of an element node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// HTML namespace (`html` member)
    Html,
    /// SVG namespace (`svg` member)
    Svg,
}

impl Namespace {
    /// Returns the element model member name carrying the tag for this namespace.
    pub fn member_name(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Svg => "svg",
        }
    }

    /// Returns the namespace URI.
    pub fn uri(&self) -> &'static str {
        match self {
            Self::Html => "http://www.w3.org/1999/xhtml",
            Self::Svg => "http://www.w3.org/2000/svg",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.member_name())
    }
}

/// Capability invoked once for each live node created by the tree renderer.
///
/// `H` is the node handle type of the target document. Any `Fn(&H)` closure
/// implements this trait.
pub trait ElementCallback<H> {
    /// Called with the newly created node, after its children are attached.
    fn on_created(&self, node: &H);
}

impl<H, F> ElementCallback<H> for F
where
    F: Fn(&H),
{
    fn on_created(&self, node: &H) {
        self(node);
    }
}

/// An element node: a tag with attributes, children and an optional callback.
pub struct ElementNode<H = ()> {
    tag: String,
    attributes: Attributes,
    elem: Option<Box<Element<H>>>,
    callback: Option<Callback<H>>,
}

impl<H> ElementNode<H> {
    /// Creates a node with the given tag and no attributes, children or callback.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            elem: None,
            callback: None,
        }
    }

    /// Returns the tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the attributes in insertion order, including null entries.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the child content, if any.
    pub fn elem(&self) -> Option<&Element<H>> {
        self.elem.as_deref()
    }

    /// Returns the callback, if any.
    pub fn callback(&self) -> Option<&Callback<H>> {
        self.callback.as_ref()
    }

    /// Sets an attribute, keeping the position of an existing entry with the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Replaces all attributes.
    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }

    /// Sets the child content.
    pub fn set_elem(&mut self, elem: Option<Element<H>>) {
        self.elem = elem.map(Box::new);
    }

    /// Sets the callback.
    pub fn set_callback(&mut self, callback: Option<Callback<H>>) {
        self.callback = callback;
    }

    /// Returns the node with an additional attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Returns the node with the given attributes.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Returns the node with the given child content.
    pub fn with_elem(mut self, elem: impl Into<Element<H>>) -> Self {
        self.elem = Some(Box::new(elem.into()));
        self
    }

    /// Returns the node with the given callback.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: ElementCallback<H> + 'static,
    {
        self.callback = Some(Rc::new(callback));
        self
    }
}

impl<H> Clone for ElementNode<H> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            attributes: self.attributes.clone(),
            elem: self.elem.clone(),
            callback: self.callback.clone(),
        }
    }
}

impl<H> PartialEq for ElementNode<H> {
    fn eq(&self, other: &Self) -> bool {
        let same_callback = match (&self.callback, &other.callback) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.tag == other.tag
            && self.attributes == other.attributes
            && self.elem == other.elem
            && same_callback
    }
}

impl<H> fmt::Debug for ElementNode<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementNode")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("elem", &self.elem)
            .field("callback", &self.callback.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

/// A value of the element model.
pub enum Element<H = ()> {
    /// Ordered children, rendered as their concatenation.
    Sequence(Vec<Element<H>>),
    /// An element in the HTML namespace.
    Html(ElementNode<H>),
    /// An element in the SVG namespace.
    Svg(ElementNode<H>),
    /// A text leaf.
    Text(String),
}

impl<H> Element<H> {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a sequence from the given elements.
    pub fn sequence(elements: impl IntoIterator<Item = Element<H>>) -> Self {
        Self::Sequence(elements.into_iter().collect())
    }

    /// Creates an empty sequence, which renders nothing.
    pub fn empty() -> Self {
        Self::Sequence(Vec::new())
    }

    /// Returns the namespace and node for element variants.
    pub fn as_node(&self) -> Option<(Namespace, &ElementNode<H>)> {
        match self {
            Self::Html(node) => Some((Namespace::Html, node)),
            Self::Svg(node) => Some((Namespace::Svg, node)),
            Self::Sequence(_) | Self::Text(_) => None,
        }
    }

    /// Returns the namespace for element variants.
    pub fn namespace(&self) -> Option<Namespace> {
        self.as_node().map(|(namespace, _)| namespace)
    }

    /// Counts element and text nodes, looking through sequences.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Sequence(elements) => elements.iter().map(Self::node_count).sum(),
            Self::Html(node) | Self::Svg(node) => {
                1 + node.elem().map_or(0, Self::node_count)
            }
            Self::Text(_) => 1,
        }
    }
}

impl<H> From<Vec<Element<H>>> for Element<H> {
    fn from(elements: Vec<Element<H>>) -> Self {
        Self::Sequence(elements)
    }
}

impl<H> Clone for Element<H> {
    fn clone(&self) -> Self {
        match self {
            Self::Sequence(elements) => Self::Sequence(elements.clone()),
            Self::Html(node) => Self::Html(node.clone()),
            Self::Svg(node) => Self::Svg(node.clone()),
            Self::Text(text) => Self::Text(text.clone()),
        }
    }
}

impl<H> PartialEq for Element<H> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Html(a), Self::Html(b)) | (Self::Svg(a), Self::Svg(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl<H> fmt::Debug for Element<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(elements) => f.debug_tuple("Sequence").field(elements).finish(),
            Self::Html(node) => f.debug_tuple("Html").field(node).finish(),
            Self::Svg(node) => f.debug_tuple("Svg").field(node).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}
