//! Text direction from a language tag.

use serde::Serialize;
use std::fmt;

/// Primary subtags of languages written right-to-left.
pub const RTL_LANGUAGES: [&str; 7] = ["ar", "he", "fa", "ur", "ps", "sd", "yi"];

/// Layout direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Attribute value ("ltr" or "rtl").
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// True for right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The part of a language tag before the first `-`, trimmed.
pub fn primary_subtag(tag: &str) -> &str {
    tag.trim().split('-').next().unwrap_or_default()
}

/// Whether `tag` names a right-to-left language. Absent or empty tags are LTR.
pub fn is_rtl(tag: Option<&str>) -> bool {
    let Some(primary) = tag.map(primary_subtag).filter(|p| !p.is_empty()) else {
        return false;
    };
    RTL_LANGUAGES
        .iter()
        .any(|rtl| rtl.eq_ignore_ascii_case(primary))
}

/// Direction for a language tag.
pub fn get_dir(tag: Option<&str>) -> Direction {
    if is_rtl(tag) {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}
