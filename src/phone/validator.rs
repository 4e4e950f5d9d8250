//! Phone number validation.
//!
//! Failures are values, never panics: `validate_phone_strict` returns a
//! typed error and `validate_phone` folds it into a [`ValidationResult`].

use super::rules::{PhoneRule, PhoneRuleRegistry};
use super::strip_non_digits;
use serde::Serialize;
use thiserror::Error;

/// Country assumed when the caller passes none.
pub const DEFAULT_COUNTRY: &str = "NG";

/// Why a phone number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Phone number is required")]
    Required,

    #[error("Invalid {country} phone number. Example: {example}")]
    InvalidForCountry {
        country: String,
        example: &'static str,
    },

    #[error("Phone number must be between {min} and {max} digits")]
    DigitCount { min: usize, max: usize },
}

/// Outcome of [`validate_phone`].
///
/// `formatted` is only present when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
}

impl ValidationResult {
    /// A valid number in its international form.
    pub fn ok(formatted: String) -> Self {
        Self {
            valid: true,
            error: None,
            formatted: Some(formatted),
        }
    }

    /// A rejection carrying the error message.
    pub fn invalid(error: &PhoneError) -> Self {
        Self {
            valid: false,
            error: Some(error.to_string()),
            formatted: None,
        }
    }
}

impl From<Result<String, PhoneError>> for ValidationResult {
    fn from(result: Result<String, PhoneError>) -> Self {
        match result {
            Ok(formatted) => ValidationResult::ok(formatted),
            Err(e) => ValidationResult::invalid(&e),
        }
    }
}

/// Validate `raw` against the rule for `country_code` (default NG).
pub fn validate_phone(raw: Option<&str>, country_code: Option<&str>) -> ValidationResult {
    validate_phone_strict(raw, country_code).into()
}

/// Validate and return the canonical international form.
pub fn validate_phone_strict(
    raw: Option<&str>,
    country_code: Option<&str>,
) -> Result<String, PhoneError> {
    let raw = match raw.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => return Err(PhoneError::Required),
    };

    let rule = PhoneRuleRegistry::get().resolve(country_code.unwrap_or(DEFAULT_COUNTRY));
    let local = local_digits(raw, rule).ok_or_else(|| rejection(rule))?;

    match &rule.pattern {
        None => {
            let (min, max) = rule.digit_bounds();
            if !(min..=max).contains(&local.len()) {
                return Err(rejection(rule));
            }
        }
        Some(pattern) => {
            if !pattern.is_match(&local) {
                return Err(rejection(rule));
            }
        }
    }

    Ok(format!("{}{}", rule.dial_prefix, strip_trunk_zero(&local)))
}

/// The error a rule reports for a malformed number.
fn rejection(rule: &PhoneRule) -> PhoneError {
    if rule.pattern.is_none() {
        let (min, max) = rule.digit_bounds();
        return PhoneError::DigitCount { min, max };
    }
    PhoneError::InvalidForCountry {
        country: rule.country_code.to_string(),
        example: rule.example,
    }
}

/// Digits in local format: a leading "+" and the rule's calling code are removed.
///
/// Returns `None` for "+0...": no calling code starts with zero.
fn local_digits(raw: &str, rule: &PhoneRule) -> Option<String> {
    let cleaned = strip_non_digits(raw);
    match cleaned.strip_prefix('+') {
        Some(international) if international.starts_with('0') => None,
        Some(international) => Some(
            international
                .strip_prefix(rule.dial_digits())
                .unwrap_or(international)
                .to_string(),
        ),
        None => Some(cleaned),
    }
}

/// Drop a single leading trunk zero.
pub(crate) fn strip_trunk_zero(digits: &str) -> &str {
    digits.strip_prefix('0').unwrap_or(digits)
}
