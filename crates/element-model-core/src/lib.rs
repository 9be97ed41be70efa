//! Element Model Core Types and Definitions
//!
//! This crate provides the foundational types for the element model, a
//! declarative tree format for HTML, SVG and text markup. It includes:
//!
//! - **Elements**: The recursive element tree ([`element::Element`])
//! - **Attributes**: Attribute values and their string coercion ([`attribute::AttrValue`])
//! - **Markup**: HTML escaping and the void element set ([`markup`] module)

pub mod attribute;
pub mod element;
pub mod markup;

pub use attribute::AttrValue;
pub use element::{Attributes, Callback, Element, ElementCallback, ElementNode, Namespace};
