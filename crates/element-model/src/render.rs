//! Renderers for element model trees.
//!
//! - [`render_to_tree`] builds live nodes in a [`Document`](crate::document::Document)
//! - [`render_to_string`] serializes to markup text, densely or indented
//!
//! Neither renderer validates its input. Run [`crate::validate::validate`]
//! (or [`crate::validate::validate_element`]) first when the input is not
//! trusted.

mod string;
mod tree;

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer};

pub use string::render_to_string;
pub use tree::render_to_tree;

/// Indentation setting of the string renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Indent {
    /// Dense output with no added whitespace.
    #[default]
    None,
    /// The given number of spaces per depth level. Zero behaves like [`Indent::None`].
    Spaces(usize),
    /// A literal unit string repeated per depth level.
    Unit(String),
}

impl Indent {
    /// Normalizes a signed space count. Non-positive counts mean no indentation.
    pub fn spaces(count: i64) -> Self {
        usize::try_from(count)
            .ok()
            .filter(|count| *count > 0)
            .map_or(Self::None, Self::Spaces)
    }

    /// Returns the string emitted once per depth level, or `None` for dense output.
    pub fn unit(&self) -> Option<String> {
        match self {
            Self::None | Self::Spaces(0) => None,
            Self::Spaces(count) => Some(" ".repeat(*count)),
            Self::Unit(unit) => Some(unit.clone()),
        }
    }

    /// Returns `true` if this setting produces dense output.
    pub fn is_dense(&self) -> bool {
        self.unit().is_none()
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Spaces(count) => write!(f, "{count}"),
            Self::Unit(unit) => write!(f, "{unit:?}"),
        }
    }
}

impl From<i64> for Indent {
    fn from(count: i64) -> Self {
        Self::spaces(count)
    }
}

impl From<usize> for Indent {
    fn from(count: usize) -> Self {
        Self::Spaces(count)
    }
}

impl From<f64> for Indent {
    fn from(count: f64) -> Self {
        if count >= 1.0 {
            // Saturating cast, fractional counts round down
            Self::Spaces(count.floor() as usize)
        } else {
            Self::None
        }
    }
}

impl From<&str> for Indent {
    fn from(unit: &str) -> Self {
        Self::Unit(unit.to_string())
    }
}

impl From<String> for Indent {
    fn from(unit: String) -> Self {
        Self::Unit(unit)
    }
}

impl FromStr for Indent {
    type Err = Infallible;

    /// Integer text is a space count, anything else a literal unit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i64>() {
            Ok(count) => Self::spaces(count),
            Err(_) => Self::Unit(s.to_string()),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Integer(i64),
    Float(f64),
    Unit(String),
    Other(serde::de::IgnoredAny),
}

impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawIndent::deserialize(deserializer)? {
            RawIndent::Integer(count) => Self::spaces(count),
            RawIndent::Float(count) => Self::from(count),
            RawIndent::Unit(unit) => Self::Unit(unit),
            RawIndent::Other(_) => Self::None,
        })
    }
}
