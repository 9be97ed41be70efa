//! Error types for element model operations.
//!
//! This module provides the main error type [`ElementModelError`] which wraps
//! the error conditions of the parse/validate/render pipeline, and the
//! structural [`ValidationError`] raised by the validator.

mod validation;

pub use validation::{TagKind, ValidationError, ValidationErrorKind};

use std::io;

use thiserror::Error;

/// The main error type for element model operations.
///
/// # Diagnostic Variants
///
/// The `Json` variant keeps the source text next to the [`serde_json::Error`],
/// so line and column information can be turned into a labeled source span
/// for rich error reporting.
#[derive(Debug, Error)]
pub enum ElementModelError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {err}")]
    Json { err: serde_json::Error, src: String },

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Document error: {0}")]
    Document(Box<dyn std::error::Error>),
}

impl ElementModelError {
    /// Create a new `Json` error with the associated source text.
    pub fn new_json_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Json {
            err,
            src: src.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_is_transparent() {
        let err = ElementModelError::from(ValidationError::UnknownMember {
            member: "unknown".to_string(),
        });
        assert_eq!(err.to_string(), "Unknown element member 'unknown'");
    }

    #[test]
    fn test_json_error_keeps_source() {
        let src = "{\"html\": ";
        let json_err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = ElementModelError::new_json_error(json_err, src);

        match &err {
            ElementModelError::Json { src: kept, .. } => assert_eq!(kept, src),
            other => panic!("Expected Json error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("JSON error: "));
    }

    #[test]
    fn test_document_error_display() {
        let dom_err = crate::dom::DomError::InvalidCharacter("a b".to_string());
        let err = ElementModelError::Document(Box::new(dom_err));
        assert_eq!(err.to_string(), "Document error: Invalid character in name 'a b'");
    }

    #[test]
    fn test_config_error_display() {
        let err = ElementModelError::Config("bad indent".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad indent");
    }
}
