//! Layout direction (LTR/RTL) support.
//!
//! - `language`: direction from a language tag
//! - `mirror`: left/right swapping of utility classes
//! - `style`: logical-to-physical padding
//! - `surface`: applying direction to the active UI root
//!
//! # Example
//!
//! ```rust
//! use intl_core::direction::{get_dir, mirror_class, Direction};
//!
//! assert_eq!(get_dir(Some("ar-EG")), Direction::Rtl);
//! assert_eq!(mirror_class("ml-4 text-left", true), "mr-4 text-right");
//! ```

mod language;
mod mirror;
mod style;
mod surface;

pub use language::{get_dir, is_rtl, primary_subtag, Direction, RTL_LANGUAGES};
pub use mirror::mirror_class;
pub use style::{logical_padding, PaddingProperty, Side, SideParseError, StyleProperty};
pub use surface::{
    apply_dir_to, apply_document_dir, document_root, DirectionSurface, RootAttributes,
    DEFAULT_LANG,
};

use crate::locale::{NumberLocale, NumberStyle};
use crate::metrics::FallbackMetrics;
use tracing::debug;

/// Render `number` with the digits and separators of `tag`'s locale.
///
/// Falls back to the plain decimal representation when the locale is
/// unknown or the number can't be rendered.
pub fn format_number_for_locale(number: f64, tag: Option<&str>) -> String {
    let formatted = NumberLocale::resolve(tag.unwrap_or(DEFAULT_LANG))
        .and_then(|locale| locale.format_number(number, &NumberStyle::decimal()));

    match formatted {
        Ok(s) => s,
        Err(e) => {
            debug!("Number formatting failed for {:?}: {}", tag, e);
            FallbackMetrics::global().record_number_format_fallback();
            number.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_english() {
        assert_eq!(format_number_for_locale(1234567.0, Some("en")), "1,234,567");
    }

    #[test]
    fn test_format_number_arabic_indic() {
        assert_eq!(format_number_for_locale(2024.0, Some("ar")), "٢٬٠٢٤");
        assert_eq!(format_number_for_locale(15.5, Some("ar-EG")), "١٥٫٥");
    }

    #[test]
    fn test_format_number_persian() {
        assert_eq!(format_number_for_locale(350.0, Some("fa")), "۳۵۰");
    }

    #[test]
    fn test_format_number_defaults_to_english() {
        assert_eq!(format_number_for_locale(1000.0, None), "1,000");
    }

    #[test]
    fn test_format_number_unknown_locale_falls_back() {
        assert_eq!(format_number_for_locale(1234.5, Some("xx")), "1234.5");
    }

    #[test]
    fn test_format_number_non_finite_falls_back() {
        assert_eq!(format_number_for_locale(f64::NAN, Some("ar")), "NaN");
        assert_eq!(format_number_for_locale(f64::INFINITY, Some("en")), "inf");
    }
}
