//! Fallback metrics and observability.
//!
//! Every service in this crate degrades to a default instead of failing.
//! These counters make those silent degradations visible.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Counters for each kind of fallback taken.
#[derive(Debug, Default)]
pub struct FallbackMetrics {
    /// Currency lookups that fell back to USD
    unknown_currencies: AtomicUsize,

    /// Currency renderings that used the manual `symbol + amount` form
    currency_format_fallbacks: AtomicUsize,

    /// Phone rule lookups that fell back to the default rule
    unknown_countries: AtomicUsize,

    /// Number renderings that used the plain decimal form
    number_format_fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<FallbackMetrics> = OnceLock::new();

impl FallbackMetrics {
    /// Create a detached set of counters, all zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide metrics instance.
    pub fn global() -> &'static FallbackMetrics {
        METRICS.get_or_init(FallbackMetrics::new)
    }

    /// Record a currency code that fell back to USD.
    pub fn record_unknown_currency(&self) {
        self.unknown_currencies.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a money string rendered by the manual fallback.
    pub fn record_currency_format_fallback(&self) {
        self.currency_format_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a country code that fell back to the default phone rule.
    pub fn record_unknown_country(&self) {
        self.unknown_countries.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a number rendered without locale formatting.
    pub fn record_number_format_fallback(&self) {
        self.number_format_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current unknown-currency count.
    pub fn unknown_currencies(&self) -> usize {
        self.unknown_currencies.load(Ordering::Relaxed)
    }

    /// Get the current currency-format fallback count.
    pub fn currency_format_fallbacks(&self) -> usize {
        self.currency_format_fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current unknown-country count.
    pub fn unknown_countries(&self) -> usize {
        self.unknown_countries.load(Ordering::Relaxed)
    }

    /// Get the current number-format fallback count.
    pub fn number_format_fallbacks(&self) -> usize {
        self.number_format_fallbacks.load(Ordering::Relaxed)
    }

    /// Snapshot the counters.
    pub fn report(&self) -> MetricsReport {
        let unknown_currencies = self.unknown_currencies();
        let currency_format_fallbacks = self.currency_format_fallbacks();
        let unknown_countries = self.unknown_countries();
        let number_format_fallbacks = self.number_format_fallbacks();

        MetricsReport {
            unknown_currencies,
            currency_format_fallbacks,
            unknown_countries,
            number_format_fallbacks,
            total_fallbacks: unknown_currencies
                + currency_format_fallbacks
                + unknown_countries
                + number_format_fallbacks,
        }
    }

    /// Reset all counters to zero (test helper).
    #[cfg(test)]
    pub fn reset(&self) {
        self.unknown_currencies.store(0, Ordering::Relaxed);
        self.currency_format_fallbacks.store(0, Ordering::Relaxed);
        self.unknown_countries.store(0, Ordering::Relaxed);
        self.number_format_fallbacks.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time fallback statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsReport {
    pub unknown_currencies: usize,
    pub currency_format_fallbacks: usize,
    pub unknown_countries: usize,
    pub number_format_fallbacks: usize,

    /// Sum of all the above
    pub total_fallbacks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests use detached instances: the global one is shared with every
    // other test in the crate.

    // ==================== Counter Tests ====================

    #[test]
    fn test_new_starts_at_zero() {
        let metrics = FallbackMetrics::new();
        assert_eq!(metrics.report().total_fallbacks, 0);
    }

    #[test]
    fn test_record_unknown_currency() {
        let metrics = FallbackMetrics::new();
        metrics.record_unknown_currency();
        metrics.record_unknown_currency();
        assert_eq!(metrics.unknown_currencies(), 2);
    }

    #[test]
    fn test_record_currency_format_fallback() {
        let metrics = FallbackMetrics::new();
        metrics.record_currency_format_fallback();
        assert_eq!(metrics.currency_format_fallbacks(), 1);
    }

    #[test]
    fn test_record_unknown_country() {
        let metrics = FallbackMetrics::new();
        metrics.record_unknown_country();
        assert_eq!(metrics.unknown_countries(), 1);
    }

    #[test]
    fn test_record_number_format_fallback() {
        let metrics = FallbackMetrics::new();
        metrics.record_number_format_fallback();
        assert_eq!(metrics.number_format_fallbacks(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_totals() {
        let metrics = FallbackMetrics::new();
        metrics.record_unknown_currency();
        metrics.record_currency_format_fallback();
        metrics.record_unknown_country();
        metrics.record_number_format_fallback();
        metrics.record_number_format_fallback();

        let report = metrics.report();
        assert_eq!(report.unknown_currencies, 1);
        assert_eq!(report.number_format_fallbacks, 2);
        assert_eq!(report.total_fallbacks, 5);
    }

    #[test]
    fn test_reset() {
        let metrics = FallbackMetrics::new();
        metrics.record_unknown_country();
        metrics.reset();
        assert_eq!(metrics.report().total_fallbacks, 0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = FallbackMetrics::new();
        metrics.record_unknown_currency();
        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["unknown_currencies"], 1);
        assert_eq!(json["total_fallbacks"], 1);
    }

    #[test]
    fn test_global_is_singleton() {
        assert!(std::ptr::eq(FallbackMetrics::global(), FallbackMetrics::global()));
    }
}
