//! Phone rule registry: per-country numbering plans.
//!
//! Patterns match the local-format digits (international prefix already
//! removed). Most tolerate an optional trunk `0`; the rows are data and are
//! kept exactly as each country's plan is written, including the ones that
//! don't.

use crate::metrics::FallbackMetrics;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Validation and normalization rule for one country.
#[derive(Debug, Clone)]
pub struct PhoneRule {
    /// ISO 3166-1 alpha-2 code (e.g., "NG"); empty for the default rule
    pub country_code: &'static str,

    /// "+" followed by the country calling code; empty for the default rule
    pub dial_prefix: &'static str,

    pub min_local_digits: usize,
    pub max_local_digits: usize,

    /// Leading-digit pattern over local digits; `None` only for the default rule
    pub pattern: Option<Regex>,

    /// A valid number as users write it locally
    pub example: &'static str,
}

impl PhoneRule {
    fn new(
        country_code: &'static str,
        dial_prefix: &'static str,
        min_local_digits: usize,
        max_local_digits: usize,
        pattern: &str,
        example: &'static str,
    ) -> Self {
        Self {
            country_code,
            dial_prefix,
            min_local_digits,
            max_local_digits,
            pattern: Some(Regex::new(pattern).unwrap()),
            example,
        }
    }

    /// Rule applied to unrecognized country codes.
    fn fallback() -> Self {
        Self {
            country_code: "",
            dial_prefix: "",
            min_local_digits: 7,
            max_local_digits: 15,
            pattern: None,
            example: "",
        }
    }

    /// Inclusive local digit-count bounds.
    pub fn digit_bounds(&self) -> (usize, usize) {
        (self.min_local_digits, self.max_local_digits)
    }

    /// Dial prefix without the leading "+".
    pub fn dial_digits(&self) -> &'static str {
        self.dial_prefix.trim_start_matches('+')
    }

    /// True for the rule used with unknown countries.
    pub fn is_default(&self) -> bool {
        self.pattern.is_none()
    }
}

/// Global phone rule registry singleton.
pub struct PhoneRuleRegistry {
    rules: Vec<PhoneRule>,
    default_rule: PhoneRule,
}

static REGISTRY: OnceLock<PhoneRuleRegistry> = OnceLock::new();

impl PhoneRuleRegistry {
    /// Get the global phone rule registry instance.
    pub fn get() -> &'static PhoneRuleRegistry {
        REGISTRY.get_or_init(|| PhoneRuleRegistry {
            rules: default_rules(),
            default_rule: PhoneRule::fallback(),
        })
    }

    /// Exact, case-sensitive lookup.
    pub fn get_by_country(&self, country_code: &str) -> Option<&PhoneRule> {
        self.rules.iter().find(|r| r.country_code == country_code)
    }

    /// Lookup that always succeeds, falling back to the default rule.
    pub fn resolve(&self, country_code: &str) -> &PhoneRule {
        match self.get_by_country(country_code) {
            Some(rule) => rule,
            None => {
                debug!("No phone rule for country {:?}, using default rule", country_code);
                FallbackMetrics::global().record_unknown_country();
                &self.default_rule
            }
        }
    }

    /// The rule applied to unknown countries (7 to 15 digits, no pattern).
    pub fn default_rule(&self) -> &PhoneRule {
        &self.default_rule
    }

    /// All country rules, excluding the default rule.
    pub fn list_all(&self) -> Vec<&PhoneRule> {
        self.rules.iter().collect()
    }
}

fn default_rules() -> Vec<PhoneRule> {
    vec![
        PhoneRule::new("NG", "+234", 10, 11, r"^0?[789][01]\d{8}$", "0801 234 5678"),
        PhoneRule::new("KE", "+254", 9, 10, r"^0?[17]\d{8}$", "0712 345 678"),
        PhoneRule::new("GH", "+233", 9, 10, r"^0?[235]\d{8}$", "024 123 4567"),
        PhoneRule::new("ZA", "+27", 9, 10, r"^0?[1-8]\d{8}$", "071 234 5678"),
        PhoneRule::new("EG", "+20", 10, 11, r"^0?1[0125]\d{8}$", "010 1234 5678"),
        PhoneRule::new("ET", "+251", 9, 10, r"^0?[79]\d{8}$", "091 123 4567"),
        PhoneRule::new("TZ", "+255", 9, 10, r"^0?[67]\d{8}$", "0712 345 678"),
        PhoneRule::new("UG", "+256", 9, 10, r"^0?7\d{8}$", "0712 345 678"),
        PhoneRule::new("RW", "+250", 9, 10, r"^0?7[2389]\d{7}$", "0781 234 567"),
        PhoneRule::new("SN", "+221", 9, 9, r"^7[05678]\d{7}$", "77 123 45 67"),
        PhoneRule::new("CI", "+225", 9, 10, r"^0?[157]\d{8}$", "07 07 12 34 56"),
        PhoneRule::new("MA", "+212", 9, 10, r"^0?[5-7]\d{8}$", "0612 345 678"),
        PhoneRule::new("GB", "+44", 10, 11, r"^0?7\d{9}$", "07123 456789"),
        PhoneRule::new("US", "+1", 10, 10, r"^[2-9]\d{2}[2-9]\d{6}$", "(201) 555-0123"),
        PhoneRule::new("AE", "+971", 9, 10, r"^0?5[024568]\d{7}$", "050 123 4567"),
    ]
}
