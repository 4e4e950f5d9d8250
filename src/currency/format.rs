//! Money and price rendering.

use super::registry::{CurrencyDescriptor, CurrencyRegistry};
use crate::locale::{self, FormatError, NumberLocale, NumberStyle, SymbolPlacement};
use crate::metrics::FallbackMetrics;
use tracing::debug;

/// Currency used when the caller passes none.
pub const DEFAULT_CURRENCY: &str = "NGN";

/// How the currency itself is shown next to the amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurrencyDisplay {
    /// `₦50,000`
    #[default]
    Symbol,
    /// `NGN 50,000`
    Code,
    /// `50,000 Nigerian Naira`
    Name,
}

/// Overrides for [`format_currency`]. Unset fields use the defaults:
/// descriptor locale, no fraction digits, grouping on, symbol display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub minimum_fraction_digits: Option<u8>,
    pub maximum_fraction_digits: Option<u8>,
    pub use_grouping: Option<bool>,
    pub currency_display: CurrencyDisplay,
    pub locale: Option<String>,
}

impl FormatOptions {
    /// Locale defaults: no fraction digits, grouping on, symbol display.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix both the minimum and maximum fraction digits.
    pub fn with_fraction_digits(mut self, digits: u8) -> Self {
        self.minimum_fraction_digits = Some(digits);
        self.maximum_fraction_digits = Some(digits);
        self
    }

    /// Set the minimum; the maximum follows it unless set explicitly.
    pub fn with_minimum_fraction_digits(mut self, digits: u8) -> Self {
        self.minimum_fraction_digits = Some(digits);
        self
    }

    /// Set the maximum fraction digits (at most 20).
    pub fn with_maximum_fraction_digits(mut self, digits: u8) -> Self {
        self.maximum_fraction_digits = Some(digits);
        self
    }

    /// Enable or disable thousands separators.
    pub fn with_grouping(mut self, enabled: bool) -> Self {
        self.use_grouping = Some(enabled);
        self
    }

    /// Show the symbol, the ISO code or the currency name.
    pub fn with_currency_display(mut self, display: CurrencyDisplay) -> Self {
        self.currency_display = display;
        self
    }

    /// Override the currency's own locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// A maximum below an explicit minimum is left in place so that
    /// rendering rejects it.
    fn number_style(&self) -> NumberStyle {
        let min = self.minimum_fraction_digits.unwrap_or(0);
        NumberStyle {
            min_fraction_digits: min,
            max_fraction_digits: self.maximum_fraction_digits.unwrap_or(min),
            use_grouping: self.use_grouping.unwrap_or(true),
        }
    }
}

/// The billing period or measure a price is quoted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceUnit {
    Outright,
    Year,
    Month,
    Night,
    Week,
    Day,
    Job,
    Sqm,
    Project,
    Other(String),
}

impl PriceUnit {
    /// Map a unit name to its variant; unknown names become `Other`.
    pub fn parse(unit: &str) -> PriceUnit {
        match unit {
            "outright" => PriceUnit::Outright,
            "year" => PriceUnit::Year,
            "month" => PriceUnit::Month,
            "night" => PriceUnit::Night,
            "week" => PriceUnit::Week,
            "day" => PriceUnit::Day,
            "job" => PriceUnit::Job,
            "sqm" => PriceUnit::Sqm,
            "project" => PriceUnit::Project,
            other => PriceUnit::Other(other.to_string()),
        }
    }

    /// Suffix appended to a price, or `None` for outright sales.
    pub fn suffix(&self) -> Option<String> {
        let label = match self {
            PriceUnit::Outright => return None,
            PriceUnit::Year => "/ yr",
            PriceUnit::Month => "/ mo",
            PriceUnit::Night => "/ night",
            PriceUnit::Week => "/ wk",
            PriceUnit::Day => "/ day",
            PriceUnit::Job => "/ job",
            PriceUnit::Sqm => "/ m²",
            PriceUnit::Project => "/ project",
            PriceUnit::Other(unit) => return Some(format!("/ {}", unit)),
        };
        Some(label.to_string())
    }
}

/// Render `amount` in the currency `code` (default NGN).
///
/// Never fails: if the locale engine rejects the request the result is
/// `symbol + grouped amount`.
pub fn format_currency(amount: f64, code: Option<&str>, options: &FormatOptions) -> String {
    let currency = CurrencyRegistry::get().resolve(Some(code.unwrap_or(DEFAULT_CURRENCY)));

    match try_format(amount, currency, options) {
        Ok(formatted) => formatted,
        Err(e) => {
            debug!(
                "Locale formatting failed for {} {}: {}, using manual fallback",
                amount, currency.code, e
            );
            FallbackMetrics::global().record_currency_format_fallback();
            format!("{}{}", currency.symbol, locale::plain_grouped(amount))
        }
    }
}

fn try_format(
    amount: f64,
    currency: &CurrencyDescriptor,
    options: &FormatOptions,
) -> Result<String, FormatError> {
    let number_locale = NumberLocale::resolve(options.locale.as_deref().unwrap_or(currency.locale))?;
    let style = options.number_style();

    match options.currency_display {
        CurrencyDisplay::Symbol => {
            number_locale.format_currency(amount, currency.symbol, SymbolPlacement::Locale, &style)
        }
        CurrencyDisplay::Code => {
            number_locale.format_currency(amount, currency.code, SymbolPlacement::LeadingWord, &style)
        }
        CurrencyDisplay::Name => {
            number_locale.format_currency(amount, currency.name, SymbolPlacement::TrailingWord, &style)
        }
    }
}

/// Render a listing price with its unit suffix (e.g., `₦50,000 / yr`).
pub fn format_price(amount: f64, code: Option<&str>, unit: Option<&str>) -> String {
    format_price_with(amount, code, unit, &FormatOptions::default())
}

/// [`format_price`] with explicit formatting options.
pub fn format_price_with(
    amount: f64,
    code: Option<&str>,
    unit: Option<&str>,
    options: &FormatOptions,
) -> String {
    let money = format_currency(amount, code, options);

    match unit.map(PriceUnit::parse).and_then(|u| u.suffix()) {
        Some(suffix) => format!("{} {}", money, suffix),
        None => money,
    }
}
