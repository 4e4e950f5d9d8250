//! Locale-aware number rendering.
//!
//! A small table of numbering conventions (separators, digit shapes and
//! currency placement) keyed by language tag. Callers that must never fail
//! (`currency`, `direction`) catch [`FormatError`] and fall back to a plain
//! representation.

use std::sync::OnceLock;
use thiserror::Error;

/// Largest fraction digit count accepted by [`NumberStyle`].
pub const MAX_FRACTION_DIGITS: u8 = 20;

/// Reasons the locale engine refuses to render a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unsupported locale: '{0}'")]
    UnsupportedLocale(String),

    #[error("cannot format non-finite value")]
    NonFinite,

    #[error("invalid fraction digits: min {min}, max {max}")]
    InvalidFractionDigits { min: u8, max: u8 },
}

/// Digit shapes used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitSet {
    /// 0123456789
    Latin,
    /// ٠١٢٣٤٥٦٧٨٩
    ArabicIndic,
    /// ۰۱۲۳۴۵۶۷۸۹
    ExtendedArabicIndic,
}

impl DigitSet {
    fn zero(self) -> u32 {
        match self {
            DigitSet::Latin => '0' as u32,
            DigitSet::ArabicIndic => 0x0660,
            DigitSet::ExtendedArabicIndic => 0x06F0,
        }
    }

    /// Map an ASCII digit to this digit set; other characters pass through.
    pub fn shape(self, c: char) -> char {
        match c.to_digit(10) {
            Some(d) => char::from_u32(self.zero() + d).unwrap_or(c),
            None => c,
        }
    }
}

/// Where a currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPattern {
    /// `₦50,000`
    Prefix,
    /// `R 50 000`
    PrefixSpaced,
    /// `50.000 €`
    SuffixSpaced,
}

/// Numbering conventions for one locale.
#[derive(Debug, Clone)]
pub struct NumberLocale {
    /// BCP 47 tag (e.g., "en-NG", "ar")
    pub tag: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub digits: DigitSet,
    pub currency_pattern: CurrencyPattern,
}

/// How many fraction digits to render and whether to group thousands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub min_fraction_digits: u8,
    pub max_fraction_digits: u8,
    pub use_grouping: bool,
}

impl NumberStyle {
    /// Whole numbers only.
    #[cfg(test)]
    pub fn whole() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            use_grouping: true,
        }
    }

    /// Up to three fraction digits, trailing zeros dropped.
    pub fn decimal() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            use_grouping: true,
        }
    }

    fn validate(&self) -> Result<(), FormatError> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS
            || self.min_fraction_digits > self.max_fraction_digits
        {
            return Err(FormatError::InvalidFractionDigits {
                min: self.min_fraction_digits,
                max: self.max_fraction_digits,
            });
        }
        Ok(())
    }
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self::decimal()
    }
}

/// Where a rendered currency amount puts its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// Use the locale's own [`CurrencyPattern`].
    Locale,
    /// Always after the amount, separated by a space (used for names and codes).
    TrailingWord,
    /// Always before the amount, separated by a space.
    LeadingWord,
}

static LOCALES: OnceLock<Vec<NumberLocale>> = OnceLock::new();

fn locales() -> &'static [NumberLocale] {
    LOCALES.get_or_init(default_locales)
}

impl NumberLocale {
    /// Resolve a tag by exact match first, then by its primary subtag.
    pub fn resolve(tag: &str) -> Result<&'static NumberLocale, FormatError> {
        let tag = tag.trim();
        let table = locales();

        if let Some(found) = table.iter().find(|l| l.tag.eq_ignore_ascii_case(tag)) {
            return Ok(found);
        }

        let primary = tag.split('-').next().unwrap_or_default();
        table
            .iter()
            .find(|l| !primary.is_empty() && l.tag.eq_ignore_ascii_case(primary))
            .ok_or_else(|| FormatError::UnsupportedLocale(tag.to_string()))
    }

    /// Render `value` as a plain localized number.
    pub fn format_number(&self, value: f64, style: &NumberStyle) -> Result<String, FormatError> {
        let (magnitude, nonzero) = self.render_magnitude(value, style)?;
        if value.is_sign_negative() && nonzero {
            Ok(format!("-{}", magnitude))
        } else {
            Ok(magnitude)
        }
    }

    /// Render `value` with a currency symbol placed according to `placement`.
    pub fn format_currency(
        &self,
        value: f64,
        symbol: &str,
        placement: SymbolPlacement,
        style: &NumberStyle,
    ) -> Result<String, FormatError> {
        let (magnitude, nonzero) = self.render_magnitude(value, style)?;
        let sign = if value.is_sign_negative() && nonzero {
            "-"
        } else {
            ""
        };

        let pattern = match placement {
            SymbolPlacement::Locale => self.currency_pattern,
            SymbolPlacement::TrailingWord => CurrencyPattern::SuffixSpaced,
            SymbolPlacement::LeadingWord => CurrencyPattern::PrefixSpaced,
        };

        Ok(match pattern {
            CurrencyPattern::Prefix => format!("{}{}{}", sign, symbol, magnitude),
            CurrencyPattern::PrefixSpaced => format!("{}{} {}", sign, symbol, magnitude),
            CurrencyPattern::SuffixSpaced => format!("{}{} {}", sign, magnitude, symbol),
        })
    }

    /// Rounded, grouped and shaped absolute value, plus whether any digit is nonzero.
    fn render_magnitude(&self, value: f64, style: &NumberStyle) -> Result<(String, bool), FormatError> {
        if !value.is_finite() {
            return Err(FormatError::NonFinite);
        }
        style.validate()?;

        let rounded = format!("{:.*}", style.max_fraction_digits as usize, value.abs());
        let (integer, full_fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

        // `full_fraction` always holds max_fraction_digits >= min_fraction_digits digits.
        let keep = full_fraction
            .trim_end_matches('0')
            .len()
            .max(style.min_fraction_digits as usize);
        let fraction = &full_fraction[..keep];

        let nonzero = integer.bytes().chain(fraction.bytes()).any(|b| b != b'0');

        let integer = if style.use_grouping {
            group_digits(integer, self.group_separator)
        } else {
            integer.to_string()
        };

        let mut out = integer;
        if !fraction.is_empty() {
            out.push_str(self.decimal_separator);
            out.push_str(fraction);
        }

        let shaped = out.chars().map(|c| self.digits.shape(c)).collect();
        Ok((shaped, nonzero))
    }
}

/// Insert `separator` between every group of three digits, counting from the right.
pub fn group_digits(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Grouped decimal representation that never fails.
///
/// Non-finite values render as `NaN`, `∞` and `-∞`.
pub fn plain_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    NumberLocale::resolve("en-US")
        .and_then(|l| l.format_number(value, &NumberStyle::decimal()))
        .unwrap_or_else(|_| value.to_string())
}

fn latin(tag: &'static str, group: &'static str, decimal: &'static str, pattern: CurrencyPattern) -> NumberLocale {
    NumberLocale {
        tag,
        group_separator: group,
        decimal_separator: decimal,
        digits: DigitSet::Latin,
        currency_pattern: pattern,
    }
}

fn default_locales() -> Vec<NumberLocale> {
    use CurrencyPattern::*;

    const NBSP: &str = "\u{a0}";
    const NNBSP: &str = "\u{202f}";

    vec![
        // English-speaking markets
        latin("en", ",", ".", Prefix),
        latin("en-US", ",", ".", Prefix),
        latin("en-NG", ",", ".", Prefix),
        latin("en-GB", ",", ".", Prefix),
        latin("en-KE", ",", ".", Prefix),
        latin("en-GH", ",", ".", Prefix),
        latin("en-TZ", ",", ".", Prefix),
        latin("en-UG", ",", ".", Prefix),
        latin("en-RW", ",", ".", Prefix),
        latin("en-ET", ",", ".", Prefix),
        latin("en-CA", ",", ".", Prefix),
        latin("en-ZA", NBSP, ",", PrefixSpaced),
        // Francophone and European
        latin("fr", NNBSP, ",", SuffixSpaced),
        latin("fr-SN", NNBSP, ",", SuffixSpaced),
        latin("fr-CI", NNBSP, ",", SuffixSpaced),
        latin("de", ".", ",", SuffixSpaced),
        latin("de-DE", ".", ",", SuffixSpaced),
        latin("es", ".", ",", SuffixSpaced),
        latin("pt", ".", ",", PrefixSpaced),
        latin("sw", ",", ".", PrefixSpaced),
        latin("zh", ",", ".", Prefix),
        latin("zh-CN", ",", ".", Prefix),
        latin("he", ",", ".", SuffixSpaced),
        // Arabic script
        NumberLocale {
            tag: "ar",
            group_separator: "٬",
            decimal_separator: "٫",
            digits: DigitSet::ArabicIndic,
            currency_pattern: SuffixSpaced,
        },
        NumberLocale {
            tag: "ar-EG",
            group_separator: "٬",
            decimal_separator: "٫",
            digits: DigitSet::ArabicIndic,
            currency_pattern: SuffixSpaced,
        },
        NumberLocale {
            tag: "ar-AE",
            group_separator: "٬",
            decimal_separator: "٫",
            digits: DigitSet::ArabicIndic,
            currency_pattern: SuffixSpaced,
        },
        latin("ar-MA", ".", ",", SuffixSpaced),
        NumberLocale {
            tag: "fa",
            group_separator: "٬",
            decimal_separator: "٫",
            digits: DigitSet::ExtendedArabicIndic,
            currency_pattern: SuffixSpaced,
        },
        NumberLocale {
            tag: "ur",
            group_separator: "٬",
            decimal_separator: "٫",
            digits: DigitSet::ExtendedArabicIndic,
            currency_pattern: PrefixSpaced,
        },
    ]
}
