//! Typed inline-style instructions.
//!
//! Widgets express their DOM writes as `(property, value)` pairs so a
//! host binding can apply them without string plumbing; `Display` on
//! [`StyleValue`] renders the exact CSS text a script-side assignment
//! would have produced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Inline style properties the widgets mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    Width,
    Left,
    ZIndex,
    Height,
}

impl StyleProperty {
    /// The CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Width => "width",
            StyleProperty::Left => "left",
            StyleProperty::ZIndex => "z-index",
            StyleProperty::Height => "height",
        }
    }
}

/// A value for an inline style property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleValue {
    /// Pixel length, rendered as `"240px"`.
    Px(f64),
    /// Percentage of the parent, rendered as `"25%"`.
    Percent(f64),
    /// Stacking-order layer, rendered as a bare integer.
    Layer(i32),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Px(px) => write!(f, "{px}px"),
            StyleValue::Percent(pct) => write!(f, "{pct}%"),
            StyleValue::Layer(layer) => write!(f, "{layer}"),
        }
    }
}
