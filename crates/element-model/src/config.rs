//! Configuration types for element model rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`RenderConfig`] - Controls string indentation and validation before rendering.
//!
//! # Example
//!
//! ```
//! # use element_model::config::AppConfig;
//! # use element_model::render::Indent;
//! let config = AppConfig::default();
//! assert_eq!(config.render().indent(), &Indent::None);
//! assert!(config.render().validate());
//! ```

use serde::Deserialize;

use crate::render::Indent;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given render configuration.
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the render configuration for modification.
    pub fn render_mut(&mut self) -> &mut RenderConfig {
        &mut self.render
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderConfig {
    /// Indentation of string output: a space count or a literal unit.
    #[serde(default)]
    indent: Indent,

    /// Whether input is validated before rendering.
    #[serde(default = "default_validate")]
    validate: bool,
}

fn default_validate() -> bool {
    true
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `indent` - Indentation of string output.
    /// * `validate` - Whether to validate input before rendering.
    pub fn new(indent: Indent, validate: bool) -> Self {
        Self { indent, validate }
    }

    /// Returns the string output indentation.
    pub fn indent(&self) -> &Indent {
        &self.indent
    }

    /// Returns whether input is validated before rendering.
    pub fn validate(&self) -> bool {
        self.validate
    }

    pub fn set_indent(&mut self, indent: Indent) {
        self.indent = indent;
    }

    pub fn set_validate(&mut self, validate: bool) {
        self.validate = validate;
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(Indent::None, default_validate())
    }
}
