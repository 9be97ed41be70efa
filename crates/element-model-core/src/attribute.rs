//! Attribute values and their string coercion.
//!
//! Attribute values in the element model may be any scalar. Both renderers
//! turn them into attribute text through [`AttrValue::coerce`], so the tree
//! and string outputs always agree.
//!
//! # Coercion Rules
//!
//! | Value | Text |
//! |-------|------|
//! | `Null` | omitted |
//! | `Undefined` | `"undefined"` |
//! | `Bool` | `"true"`, `"false"` |
//! | `Number` | shortest form, integral values without a fraction (`0`, `1.5`, `1e+21`) |
//! | `String` | unchanged |
//! | `List` | entries coerced and joined with `,` |
//! | `Object` | `"[object Object]"` |

use std::fmt;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// No value. The attribute is omitted when rendering.
    Null,
    /// A present-but-undefined marker, rendered as the literal `undefined`.
    Undefined,
    /// A boolean value.
    Bool(bool),
    /// A numeric value.
    Number(f64),
    /// A string value.
    String(String),
    /// A list of values, rendered comma-joined.
    List(Vec<AttrValue>),
    /// An opaque structured value.
    Object,
}

impl AttrValue {
    /// Returns `true` if this value is [`AttrValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Coerces the value to its attribute text, or `None` for [`AttrValue::Null`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use element_model_core::AttrValue;
    /// assert_eq!(AttrValue::from(0).coerce().as_deref(), Some("0"));
    /// assert_eq!(AttrValue::from(true).coerce().as_deref(), Some("true"));
    /// assert_eq!(AttrValue::Undefined.coerce().as_deref(), Some("undefined"));
    /// assert_eq!(AttrValue::Null.coerce(), None);
    /// ```
    pub fn coerce(&self) -> Option<String> {
        if self.is_null() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Undefined => f.write_str("undefined"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::String(value) => f.write_str(value),
            Self::List(values) => {
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    // Absent entries join as empty strings
                    if !matches!(value, Self::Null | Self::Undefined) {
                        write!(f, "{value}")?;
                    }
                }
                Ok(())
            }
            Self::Object => f.write_str("[object Object]"),
        }
    }
}

/// Formats a number the way markup attribute text expects it.
///
/// Integral values print without a fraction, very large and very small
/// magnitudes use exponent notation with an explicit sign, and the
/// non-finite values print as `NaN`, `Infinity` and `-Infinity`.
///
/// # Examples
///
/// ```
/// # use element_model_core::attribute::format_number;
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers negative zero
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }

    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
