//! Logical-to-physical inline style mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Side named by a caller, either physical or logical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown side '{0}', expected left, right, start or end")]
pub struct SideParseError(pub String);

impl FromStr for Side {
    type Err = SideParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            "start" => Ok(Side::Start),
            "end" => Ok(Side::End),
            other => Err(SideParseError(other.to_string())),
        }
    }
}

/// Physical padding property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingProperty {
    PaddingLeft,
    PaddingRight,
}

impl PaddingProperty {
    /// Inline style key (`paddingLeft`).
    pub fn style_key(&self) -> &'static str {
        match self {
            PaddingProperty::PaddingLeft => "paddingLeft",
            PaddingProperty::PaddingRight => "paddingRight",
        }
    }

    /// CSS property name (`padding-left`).
    pub fn css_name(&self) -> &'static str {
        match self {
            PaddingProperty::PaddingLeft => "padding-left",
            PaddingProperty::PaddingRight => "padding-right",
        }
    }
}

/// A single `{ property: value }` style entry.
///
/// Serializes as a one-key map, e.g. `{"paddingRight":"1rem"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProperty {
    pub property: PaddingProperty,
    pub value: String,
}

impl StyleProperty {
    /// `padding-left: 1rem`
    pub fn to_css(&self) -> String {
        format!("{}: {}", self.property.css_name(), self.value)
    }
}

impl Serialize for StyleProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.property.style_key(), &self.value)?;
        map.end()
    }
}

/// Physical padding for a side under the given direction.
///
/// In RTL, `start`/`left` land on the right edge and `end`/`right` on the left.
pub fn logical_padding(side: Side, value: impl Into<String>, rtl: bool) -> StyleProperty {
    let leading = matches!(side, Side::Left | Side::Start);
    let property = if leading != rtl {
        PaddingProperty::PaddingLeft
    } else {
        PaddingProperty::PaddingRight
    };

    StyleProperty {
        property,
        value: value.into(),
    }
}
