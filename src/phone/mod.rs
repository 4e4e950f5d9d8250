//! Phone number rules, validation and normalization.
//!
//! - `rules`: per-country dial prefixes, digit bounds and leading-digit patterns
//! - `validator`: `validate_phone` and its result/error types
//!
//! Nothing here panics or returns an error to the caller except
//! `validate_phone_strict`, which exposes the typed failure.

mod rules;
mod validator;

pub use rules::{PhoneRule, PhoneRuleRegistry};
pub use validator::{
    validate_phone, validate_phone_strict, PhoneError, ValidationResult, DEFAULT_COUNTRY,
};

use regex::Regex;
use std::sync::OnceLock;

/// Placeholder shown for countries without a rule.
pub const GENERIC_PLACEHOLDER: &str = "Phone number";

static LOOKS_LIKE_PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Keep ASCII digits, plus a `+` when it is the first character kept.
pub fn strip_non_digits(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
            out.push(c);
        }
    }
    out
}

/// Convert to international form without validating.
///
/// Unknown countries get the input back untouched. Input that already
/// starts with `+` is returned stripped but otherwise unchanged.
pub fn to_e164(raw: &str, country_code: &str) -> String {
    let Some(rule) = PhoneRuleRegistry::get().get_by_country(country_code) else {
        return raw.to_string();
    };

    let cleaned = strip_non_digits(raw);
    if cleaned.starts_with('+') {
        return cleaned;
    }
    format!("{}{}", rule.dial_prefix, validator::strip_trunk_zero(&cleaned))
}

/// "+" dial prefix for a country, or an empty string when unknown.
pub fn get_dial_prefix(country_code: &str) -> &'static str {
    PhoneRuleRegistry::get()
        .get_by_country(country_code)
        .map(|rule| rule.dial_prefix)
        .unwrap_or("")
}

/// Input placeholder for a country's phone field.
pub fn get_phone_placeholder(country_code: &str) -> &'static str {
    PhoneRuleRegistry::get()
        .get_by_country(country_code)
        .map(|rule| rule.example)
        .unwrap_or(GENERIC_PLACEHOLDER)
}

/// Loose check for free text that reads like a phone number.
pub fn looks_like_phone(text: &str) -> bool {
    let regex = LOOKS_LIKE_PHONE_REGEX
        .get_or_init(|| Regex::new(r"^\+?\d[\d\s\-()]{6,18}\d$").unwrap());
    regex.is_match(text)
}
