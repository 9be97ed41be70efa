//! Structural validation of element model values.
//!
//! [`validate`] walks an untyped value depth-first in pre-order and stops at
//! the first violation. A node's own members are checked, in the order they
//! appear in the source object, before its `elem` children are visited.
//!
//! ## Validations Performed
//!
//! - **Kind Members**: Every object carries exactly one of `html`, `svg`, `text`
//! - **Tags**: `html` and `svg` tags are non-empty strings, `text` content is a string
//! - **Element Members**: Element nodes accept only `attr` (object or null),
//!   `elem` (element model value or null) and `callback` (a function, which
//!   JSON cannot express)
//! - **Text Members**: Text nodes accept no member besides `text`
//! - **Sequences**: Every entry of an array is itself a valid value
//!
//! Typed trees built with [`element_model_core`] satisfy most of these rules
//! by construction; [`validate_element`] checks the remaining one, non-empty
//! tag names.

use log::{debug, trace};
use serde_json::{Map, Value};

use element_model_core::{Element, Namespace};

use crate::error::{TagKind, ValidationError};

type Result<T> = std::result::Result<T, ValidationError>;

const KIND_MEMBERS: [&str; 3] = ["html", "svg", "text"];

/// Validates an untyped element model value.
///
/// Returns the input reference unchanged on success.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found in depth-first pre-order.
///
/// # Examples
///
/// ```
/// # use element_model::validate::validate;
/// let value = serde_json::json!({"html": "p", "elem": {"text": "Hello"}});
/// assert!(std::ptr::eq(validate(&value).unwrap(), &value));
///
/// let err = validate(&serde_json::json!({})).unwrap_err();
/// assert_eq!(err.to_string(), "Missing element member {} (type 'object')");
/// ```
pub fn validate(value: &Value) -> Result<&Value> {
    debug!("Validating element model value");
    validate_value(value)?;
    Ok(value)
}

fn validate_value(value: &Value) -> Result<()> {
    match value {
        Value::Array(values) => values.iter().try_for_each(validate_value),
        Value::Object(members) => validate_object(value, members),
        _ => Err(ValidationError::invalid_element(value)),
    }
}

fn validate_object(value: &Value, members: &Map<String, Value>) -> Result<()> {
    let kinds: Vec<&str> = members
        .keys()
        .map(String::as_str)
        .filter(|name| KIND_MEMBERS.contains(name))
        .collect();

    match kinds.as_slice() {
        [] => Err(ValidationError::missing_element_member(value)),
        ["html"] => validate_element_node(TagKind::Html, members),
        ["svg"] => validate_element_node(TagKind::Svg, members),
        ["text"] => validate_text_node(members),
        _ => Err(ValidationError::multiple_element_members(&kinds, value)),
    }
}

fn validate_element_node(kind: TagKind, members: &Map<String, Value>) -> Result<()> {
    let tag = &members[kind.as_str()];
    match tag.as_str() {
        Some(name) if !name.is_empty() => trace!(kind = kind.as_str(), tag = name; "Validating element"),
        _ => return Err(ValidationError::invalid_tag(kind, tag)),
    }

    for (name, member) in members {
        match name.as_str() {
            "attr" => {
                if !(member.is_object() || member.is_null()) {
                    return Err(ValidationError::invalid_attributes(member));
                }
            }
            "callback" => return Err(ValidationError::invalid_callback(member)),
            "elem" => {}
            name if name == kind.as_str() => {}
            name => return Err(ValidationError::unknown_member(name)),
        }
    }

    match members.get("elem") {
        None | Some(Value::Null) => Ok(()),
        Some(elem) => validate_value(elem),
    }
}

fn validate_text_node(members: &Map<String, Value>) -> Result<()> {
    let text = &members["text"];
    if !text.is_string() {
        return Err(ValidationError::invalid_tag(TagKind::Text, text));
    }

    for name in members.keys() {
        match name.as_str() {
            "text" => {}
            "attr" | "elem" | "callback" => {
                return Err(ValidationError::invalid_member_for_text(name, text));
            }
            name => return Err(ValidationError::unknown_member(name)),
        }
    }

    Ok(())
}

/// Validates a typed element tree.
///
/// Returns the input reference unchanged on success.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTag`] for the first element node, in
/// pre-order, whose tag name is empty.
pub fn validate_element<H>(element: &Element<H>) -> Result<&Element<H>> {
    debug!("Validating typed element");
    validate_typed(element)?;
    Ok(element)
}

fn validate_typed<H>(element: &Element<H>) -> Result<()> {
    match element {
        Element::Sequence(elements) => elements.iter().try_for_each(validate_typed),
        Element::Text(_) => Ok(()),
        Element::Html(node) | Element::Svg(node) => {
            if node.tag().is_empty() {
                let kind = match element.namespace() {
                    Some(Namespace::Svg) => TagKind::Svg,
                    _ => TagKind::Html,
                };
                return Err(ValidationError::invalid_tag(kind, &Value::from(node.tag())));
            }
            node.elem().map_or(Ok(()), validate_typed)
        }
    }
}
