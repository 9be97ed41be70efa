//! Conversion between untyped JSON values and typed elements.
//!
//! Element model data that crosses an untyped boundary (files, network
//! payloads, configuration) arrives as a [`serde_json::Value`]. This module
//! turns such values into [`Element`]s, either after full validation
//! ([`from_value`]) or leniently ([`from_value_unchecked`]), and provides the
//! value descriptions used in validation messages.
//!
//! Object member order is the insertion order of the source document; the
//! crate enables `serde_json`'s `preserve_order` feature for this.

use serde_json::{Map, Value};

use element_model_core::{AttrValue, Attributes, Element, ElementNode, attribute::format_number};

use crate::{error::ValidationError, validate::validate};

/// Returns the coarse runtime type name of a value.
///
/// Objects, arrays and `null` are all `object`.
pub fn type_of(value: &Value) -> &'static str {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
    }
}

/// Returns the compact JSON text of a value, members in insertion order.
///
/// Numbers are written the way attribute values are, so integral floats
/// print without a fraction (`1.0` becomes `1`, `1e2` becomes `100`).
pub fn value_text(value: &Value) -> String {
    let mut text = String::new();
    write_value(&mut text, value);
    text
}

fn write_value(text: &mut String, value: &Value) {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(number) => text.push_str(&format_number(number)),
            None => text.push_str(&number.to_string()),
        },
        Value::String(string) => write_string(text, string),
        Value::Array(values) => {
            text.push('[');
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    text.push(',');
                }
                write_value(text, value);
            }
            text.push(']');
        }
        Value::Object(members) => {
            text.push('{');
            for (i, (name, value)) in members.iter().enumerate() {
                if i > 0 {
                    text.push(',');
                }
                write_string(text, name);
                text.push(':');
                write_value(text, value);
            }
            text.push('}');
        }
        Value::Null | Value::Bool(_) => text.push_str(&value.to_string()),
    }
}

fn write_string(text: &mut String, string: &str) {
    // Quoting and escapes follow serde_json
    text.push_str(&Value::from(string).to_string());
}

/// Validates a value and converts it into a typed element.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found by [`validate`].
///
/// # Examples
///
/// ```
/// # use element_model::value::from_value;
/// # use element_model::Element;
/// let value = serde_json::json!({"html": "p", "elem": {"text": "Hi"}});
/// let element: Element = from_value(&value).unwrap();
/// assert_eq!(element.node_count(), 2);
/// ```
pub fn from_value<H>(value: &Value) -> Result<Element<H>, ValidationError> {
    validate(value)?;
    Ok(from_value_unchecked(value))
}

/// Converts a value into a typed element without validating it.
///
/// Non-conforming parts are skipped: values that are neither objects nor
/// arrays, and objects without a kind member, become empty sequences. When
/// several kind members are present the first one in `html`, `svg`, `text`
/// order wins, and unknown members are ignored.
pub fn from_value_unchecked<H>(value: &Value) -> Element<H> {
    match value {
        Value::Array(values) => Element::Sequence(values.iter().map(from_value_unchecked).collect()),
        Value::Object(members) => object_element(members),
        _ => Element::empty(),
    }
}

fn object_element<H>(members: &Map<String, Value>) -> Element<H> {
    if let Some(tag) = members.get("html") {
        Element::Html(element_node(tag, members))
    } else if let Some(tag) = members.get("svg") {
        Element::Svg(element_node(tag, members))
    } else if let Some(text) = members.get("text") {
        Element::Text(text.as_str().map_or_else(|| value_text(text), str::to_string))
    } else {
        Element::empty()
    }
}

fn element_node<H>(tag: &Value, members: &Map<String, Value>) -> ElementNode<H> {
    let tag = tag.as_str().map_or_else(|| value_text(tag), str::to_string);
    let mut node = ElementNode::new(tag);

    if let Some(Value::Object(attributes)) = members.get("attr") {
        node.set_attributes(
            attributes
                .iter()
                .map(|(name, value)| (name.clone(), attr_value(value)))
                .collect::<Attributes>(),
        );
    }

    match members.get("elem") {
        None | Some(Value::Null) => {}
        Some(elem) => node.set_elem(Some(from_value_unchecked(elem))),
    }

    node
}

/// Converts a JSON value into an attribute value.
pub fn attr_value(value: &Value) -> AttrValue {
    match value {
        Value::Null => AttrValue::Null,
        Value::Bool(value) => AttrValue::Bool(*value),
        Value::Number(number) => number.as_f64().map_or(AttrValue::Null, AttrValue::Number),
        Value::String(value) => AttrValue::String(value.clone()),
        Value::Array(values) => AttrValue::List(values.iter().map(attr_value).collect()),
        Value::Object(_) => AttrValue::Object,
    }
}
