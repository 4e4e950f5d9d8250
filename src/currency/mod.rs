//! Currency lookup and money formatting.
//!
//! - `registry`: the static table of supported currencies
//! - `format`: localized money strings and price-unit suffixes
//!
//! # Example
//!
//! ```rust
//! use intl_core::currency::{format_price, get_currency};
//!
//! assert_eq!(get_currency(Some("zzz")).code, "USD");
//! assert_eq!(format_price(50000.0, Some("NGN"), Some("year")), "₦50,000 / yr");
//! ```

mod format;
mod registry;

pub use format::{
    format_currency, format_price, format_price_with, CurrencyDisplay, FormatOptions, PriceUnit,
    DEFAULT_CURRENCY,
};
pub use registry::{CurrencyDescriptor, CurrencyRegistry, Region, FALLBACK_CURRENCY};

/// Look up a currency by its case-sensitive ISO 4217 code.
///
/// Missing or unknown codes resolve to the USD descriptor.
pub fn get_currency(code: Option<&str>) -> &'static CurrencyDescriptor {
    CurrencyRegistry::get().resolve(code)
}
