//! Structural validation errors.
//!
//! Each variant carries the data needed to format a deterministic message:
//! the compact JSON text of the offending value and its coarse runtime type
//! (`object`, `number`, `string` or `boolean`).

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::value::{type_of, value_text};

/// The member kind an invalid tag was found under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `html` element tag
    Html,
    /// `svg` element tag
    Svg,
    /// `text` node content
    Text,
}

impl TagKind {
    /// Returns the member name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Svg => "svg",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structural violation found while validating an element model value.
///
/// Validation stops at the first violation in depth-first pre-order, so a
/// single error describes the whole failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing element member {value} (type '{type_name}')")]
    MissingElementMember {
        value: String,
        type_name: &'static str,
    },

    #[error("Multiple element members {names} {value} (type '{type_name}')", names = .members.join(","))]
    MultipleElementMembers {
        members: Vec<String>,
        value: String,
        type_name: &'static str,
    },

    #[error("Unknown element member '{member}'")]
    UnknownMember { member: String },

    #[error("Invalid {kind} tag {value} (type '{type_name}')")]
    InvalidTag {
        kind: TagKind,
        value: String,
        type_name: &'static str,
    },

    #[error("Invalid attributes {value} (type '{type_name}')")]
    InvalidAttributes {
        value: String,
        type_name: &'static str,
    },

    #[error("Invalid member \"{member}\" for text element {value} (type '{type_name}')")]
    InvalidMemberForText {
        member: String,
        value: String,
        type_name: &'static str,
    },

    #[error("Invalid element {value} (type '{type_name}')")]
    InvalidElement {
        value: String,
        type_name: &'static str,
    },

    #[error("Invalid element callback function {value} (type '{type_name}')")]
    InvalidCallback {
        value: String,
        type_name: &'static str,
    },
}

impl ValidationError {
    pub(crate) fn missing_element_member(value: &Value) -> Self {
        Self::MissingElementMember {
            value: value_text(value),
            type_name: type_of(value),
        }
    }

    pub(crate) fn multiple_element_members(members: &[&str], value: &Value) -> Self {
        Self::MultipleElementMembers {
            members: members.iter().map(ToString::to_string).collect(),
            value: value_text(value),
            type_name: type_of(value),
        }
    }

    pub(crate) fn unknown_member(member: &str) -> Self {
        Self::UnknownMember {
            member: member.to_string(),
        }
    }

    pub(crate) fn invalid_tag(kind: TagKind, value: &Value) -> Self {
        Self::InvalidTag {
            kind,
            value: value_text(value),
            type_name: type_of(value),
        }
    }

    pub(crate) fn invalid_attributes(value: &Value) -> Self {
        Self::InvalidAttributes {
            value: value_text(value),
            type_name: type_of(value),
        }
    }

    pub(crate) fn invalid_member_for_text(member: &str, text: &Value) -> Self {
        Self::InvalidMemberForText {
            member: member.to_string(),
            value: value_text(text),
            type_name: type_of(text),
        }
    }

    pub(crate) fn invalid_element(value: &Value) -> Self {
        Self::InvalidElement {
            value: value_text(value),
            type_name: type_of(value),
        }
    }

    pub(crate) fn invalid_callback(value: &Value) -> Self {
        Self::InvalidCallback {
            value: value_text(value),
            type_name: type_of(value),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingElementMember { .. } => ValidationErrorKind::MissingElementMember,
            Self::MultipleElementMembers { .. } => ValidationErrorKind::MultipleElementMembers,
            Self::UnknownMember { .. } => ValidationErrorKind::UnknownMember,
            Self::InvalidTag { .. } => ValidationErrorKind::InvalidTag,
            Self::InvalidAttributes { .. } => ValidationErrorKind::InvalidAttributes,
            Self::InvalidMemberForText { .. } => ValidationErrorKind::InvalidMemberForText,
            Self::InvalidElement { .. } => ValidationErrorKind::InvalidElement,
            Self::InvalidCallback { .. } => ValidationErrorKind::InvalidCallback,
        }
    }
}

/// The kinds of [`ValidationError`], for matching and error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// An object carries none of `html`, `svg`, `text`.
    MissingElementMember,
    /// An object carries more than one of `html`, `svg`, `text`.
    MultipleElementMembers,
    /// An object carries a member outside the element model.
    UnknownMember,
    /// A tag is not a non-empty string, or text content is not a string.
    InvalidTag,
    /// `attr` is neither a mapping nor null.
    InvalidAttributes,
    /// A text node carries an element-only member.
    InvalidMemberForText,
    /// A value is neither an object nor a sequence.
    InvalidElement,
    /// `callback` is not a function.
    InvalidCallback,
}

impl ValidationErrorKind {
    /// Returns a stable snake-case code for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingElementMember => "missing_element_member",
            Self::MultipleElementMembers => "multiple_element_members",
            Self::UnknownMember => "unknown_member",
            Self::InvalidTag => "invalid_tag",
            Self::InvalidAttributes => "invalid_attributes",
            Self::InvalidMemberForText => "invalid_member_for_text",
            Self::InvalidElement => "invalid_element",
            Self::InvalidCallback => "invalid_callback",
        }
    }

    /// Returns a short hint on how to fix this kind of error.
    pub fn help(&self) -> &'static str {
        match self {
            Self::MissingElementMember => {
                "add exactly one of the \"html\", \"svg\" or \"text\" members"
            }
            Self::MultipleElementMembers => {
                "keep only one of the \"html\", \"svg\" or \"text\" members"
            }
            Self::UnknownMember => {
                "element nodes accept \"attr\", \"elem\" and \"callback\"; text nodes accept only \"text\""
            }
            Self::InvalidTag => "tags must be non-empty strings and text must be a string",
            Self::InvalidAttributes => "\"attr\" must be an object or null",
            Self::InvalidMemberForText => "move the attributes or children to an element node",
            Self::InvalidElement => "elements must be objects or arrays of elements",
            Self::InvalidCallback => "callbacks can only be attached through the typed element API",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
