//! Currency registry: single source of truth for supported currencies.
//!
//! Built once on first access with `OnceLock` and immutable thereafter.

use crate::metrics::FallbackMetrics;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

/// Code returned for missing or unrecognized currencies.
pub const FALLBACK_CURRENCY: &str = "USD";

/// Market grouping used by currency pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Nigeria,
    Africa,
    Global,
}

impl Region {
    /// Parse a lowercase region name.
    pub fn from_name(name: &str) -> Option<Region> {
        match name {
            "nigeria" => Some(Region::Nigeria),
            "africa" => Some(Region::Africa),
            "global" => Some(Region::Global),
            _ => None,
        }
    }
}

/// Display metadata for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyDescriptor {
    /// ISO 4217 code (e.g., "NGN")
    pub code: &'static str,

    /// Display symbol (e.g., "₦")
    pub symbol: &'static str,

    /// English name (e.g., "Nigerian Naira")
    pub name: &'static str,

    /// Locale used to render amounts (e.g., "en-NG")
    pub locale: &'static str,

    pub region: Region,
}

/// Global currency registry singleton.
pub struct CurrencyRegistry {
    currencies: Vec<CurrencyDescriptor>,
}

static REGISTRY: OnceLock<CurrencyRegistry> = OnceLock::new();

impl CurrencyRegistry {
    /// Get the global currency registry instance.
    pub fn get() -> &'static CurrencyRegistry {
        REGISTRY.get_or_init(|| CurrencyRegistry {
            currencies: default_currencies(),
        })
    }

    /// Exact, case-sensitive lookup.
    pub fn get_by_code(&self, code: &str) -> Option<&CurrencyDescriptor> {
        self.currencies.iter().find(|c| c.code == code)
    }

    /// Lookup that always succeeds, falling back to USD.
    pub fn resolve(&self, code: Option<&str>) -> &CurrencyDescriptor {
        if let Some(found) = code.and_then(|c| self.get_by_code(c)) {
            return found;
        }

        debug!(
            "Unknown currency code {:?}, falling back to {}",
            code, FALLBACK_CURRENCY
        );
        FallbackMetrics::global().record_unknown_currency();
        self.fallback()
    }

    /// The USD descriptor.
    pub fn fallback(&self) -> &CurrencyDescriptor {
        // The first row is always USD (see `default_currencies`).
        &self.currencies[0]
    }

    /// All supported currencies, USD first.
    pub fn list_all(&self) -> Vec<&CurrencyDescriptor> {
        self.currencies.iter().collect()
    }

    /// Currencies grouped under `region`, in table order.
    pub fn list_by_region(&self, region: Region) -> Vec<&CurrencyDescriptor> {
        self.currencies
            .iter()
            .filter(|c| c.region == region)
            .collect()
    }
}

fn currency(
    code: &'static str,
    symbol: &'static str,
    name: &'static str,
    locale: &'static str,
    region: Region,
) -> CurrencyDescriptor {
    CurrencyDescriptor {
        code,
        symbol,
        name,
        locale,
        region,
    }
}

/// Supported currencies. USD must stay first.
fn default_currencies() -> Vec<CurrencyDescriptor> {
    use Region::*;

    vec![
        currency("USD", "$", "US Dollar", "en-US", Global),
        currency("NGN", "₦", "Nigerian Naira", "en-NG", Nigeria),
        currency("KES", "KSh", "Kenyan Shilling", "en-KE", Africa),
        currency("GHS", "GH₵", "Ghanaian Cedi", "en-GH", Africa),
        currency("ZAR", "R", "South African Rand", "en-ZA", Africa),
        currency("EGP", "E£", "Egyptian Pound", "ar-EG", Africa),
        currency("ETB", "Br", "Ethiopian Birr", "en-ET", Africa),
        currency("TZS", "TSh", "Tanzanian Shilling", "en-TZ", Africa),
        currency("UGX", "USh", "Ugandan Shilling", "en-UG", Africa),
        currency("RWF", "RF", "Rwandan Franc", "en-RW", Africa),
        currency("XOF", "CFA", "West African CFA Franc", "fr-SN", Africa),
        currency("MAD", "DH", "Moroccan Dirham", "ar-MA", Africa),
        currency("GBP", "£", "British Pound", "en-GB", Global),
        currency("EUR", "€", "Euro", "de-DE", Global),
        currency("AED", "AED", "UAE Dirham", "ar-AE", Global),
        currency("CAD", "CA$", "Canadian Dollar", "en-CA", Global),
        currency("CNY", "¥", "Chinese Yuan", "zh-CN", Global),
    ]
}
