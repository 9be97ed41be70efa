//! Element Model - validation and rendering for declarative HTML/SVG trees.
//!
//! An element model value describes markup as data: element nodes in the HTML
//! or SVG namespace, text leaves, and arbitrarily nested sequences. This crate
//! validates untyped values, converts them to typed [`Element`] trees, and
//! renders those trees either into a live [`document::Document`] or to markup
//! text.

pub mod config;
pub mod document;
pub mod dom;
pub mod render;
pub mod validate;
pub mod value;

mod error;

pub use element_model_core::{
    AttrValue, Attributes, Callback, Element, ElementCallback, ElementNode, Namespace, attribute,
    markup,
};

pub use error::{ElementModelError, TagKind, ValidationError, ValidationErrorKind};
pub use render::{Indent, render_to_string, render_to_tree};
pub use validate::{validate, validate_element};

use log::{debug, info, trace};
use serde_json::Value;

use config::AppConfig;
use document::Document;

/// Builder for parsing and rendering element model trees.
///
/// Applies an [`AppConfig`]: typed trees and parsed input are validated
/// before use unless validation is disabled, and string output uses the
/// configured indentation.
///
/// # Examples
///
/// ```
/// use element_model::{Element, ElementModel, config::AppConfig};
///
/// let model = ElementModel::new(AppConfig::default());
/// let element: Element = model
///     .parse(r#"[{"html": "p", "elem": {"text": "One"}}, {"html": "br"}]"#)
///     .expect("Failed to parse");
///
/// let markup = model.render_string(&element).expect("Failed to render");
/// assert_eq!(markup, "<p>One</p><br />");
/// ```
#[derive(Debug, Default)]
pub struct ElementModel {
    config: AppConfig,
}

impl ElementModel {
    /// Create a new element model builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse JSON text into a typed element tree.
    ///
    /// The value is validated first when validation is enabled; otherwise
    /// non-conforming parts are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ElementModelError::Json`] for malformed JSON text and
    /// [`ElementModelError::Validation`] for structural violations.
    pub fn parse<H>(&self, source: &str) -> Result<Element<H>, ElementModelError> {
        info!(bytes = source.len(); "Parsing element model");

        let json: Value = serde_json::from_str(source)
            .map_err(|err| ElementModelError::new_json_error(err, source))?;

        let element = if self.config.render().validate() {
            value::from_value(&json)?
        } else {
            value::from_value_unchecked(&json)
        };

        debug!(nodes = element.node_count(); "Element model parsed successfully");
        trace!(element:?; "Parsed element");
        Ok(element)
    }

    /// Render an element tree to markup text with the configured indentation.
    ///
    /// # Errors
    ///
    /// Returns [`ElementModelError::Validation`] if validation is enabled
    /// and the tree has an empty tag name.
    pub fn render_string<H>(&self, element: &Element<H>) -> Result<String, ElementModelError> {
        let indent = self.config.render().indent();
        info!(indent:% = indent; "Rendering markup text");

        if self.config.render().validate() {
            validate_element(element)?;
        }

        Ok(render_to_string(element, indent))
    }

    /// Render an element tree as children of `parent` in a live document.
    ///
    /// See [`render_to_tree`] for ordering and `clear_first` semantics.
    ///
    /// # Errors
    ///
    /// Returns [`ElementModelError::Validation`] if validation is enabled and
    /// fails, in which case the document is left untouched, and
    /// [`ElementModelError::Document`] for document failures.
    pub fn render_tree<D>(
        &self,
        document: &mut D,
        parent: &D::Node,
        element: &Element<D::Node>,
        clear_first: bool,
    ) -> Result<(), ElementModelError>
    where
        D: Document,
        D::Error: 'static,
    {
        info!(clear_first; "Rendering element tree");

        if self.config.render().validate() {
            validate_element(element)?;
        }

        render_to_tree(document, parent, element, clear_first)
            .map_err(|err| ElementModelError::Document(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::RenderConfig, dom::MemoryDocument};

    fn model(indent: Indent, validate: bool) -> ElementModel {
        ElementModel::new(AppConfig::new(RenderConfig::new(indent, validate)))
    }

    #[test]
    fn test_parse_validates_by_default() {
        let err = ElementModel::default()
            .parse::<()>(r#"{"html": "p", "bogus": 1}"#)
            .unwrap_err();
        assert!(matches!(err, ElementModelError::Validation(_)));
        assert_eq!(err.to_string(), "Unknown element member 'bogus'");
    }

    #[test]
    fn test_parse_without_validation_is_lenient() {
        let element: Element = model(Indent::None, false)
            .parse(r#"{"html": "p", "bogus": 1}"#)
            .unwrap();
        assert_eq!(element, Element::Html(ElementNode::new("p")));
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = ElementModel::default().parse::<()>("{").unwrap_err();
        assert!(matches!(err, ElementModelError::Json { .. }));
    }

    #[test]
    fn test_render_string_uses_indent() {
        let element: Element = Element::Html(ElementNode::new("div").with_elem(Element::text("Hello")));
        let markup = model(Indent::Spaces(2), true).render_string(&element).unwrap();
        assert_eq!(markup, "<div>\n  Hello\n</div>\n");
    }

    #[test]
    fn test_render_string_rejects_empty_tag() {
        let element: Element = Element::Html(ElementNode::new(""));
        let err = ElementModel::default().render_string(&element).unwrap_err();
        assert_eq!(err.to_string(), r#"Invalid html tag "" (type 'string')"#);

        let markup = model(Indent::None, false).render_string(&element).unwrap();
        assert_eq!(markup, "<></>");
    }

    #[test]
    fn test_render_tree_wraps_document_errors() {
        let mut document = MemoryDocument::new();
        let body = document.body();
        let element = Element::Html(ElementNode::new("a b"));

        let err = ElementModel::default()
            .render_tree(&mut document, &body, &element, true)
            .unwrap_err();
        assert!(matches!(err, ElementModelError::Document(_)));
    }

    #[test]
    fn test_render_tree_validation_leaves_document_untouched() {
        let mut document = MemoryDocument::new();
        let body = document.body();
        ElementModel::default()
            .render_tree(&mut document, &body, &Element::Html(ElementNode::new("p")), true)
            .unwrap();

        let err = ElementModel::default()
            .render_tree(&mut document, &body, &Element::Html(ElementNode::new("")), true)
            .unwrap_err();
        assert!(matches!(err, ElementModelError::Validation(_)));
        assert_eq!(document.inner_html(body), "<p></p>");
    }
}
