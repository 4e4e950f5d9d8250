//! Internationalization utilities for marketplace front ends.
//!
//! - [`currency`]: currency descriptors, money and price formatting
//! - [`phone`]: per-country phone validation and E.164 normalization
//! - [`direction`]: LTR/RTL detection, class mirroring, document direction
//!
//! Every public function returns a usable value for every input: unknown
//! currencies, countries, units and locales degrade to documented defaults.

pub mod config;
pub mod currency;
pub mod direction;
pub mod locale;
pub mod metrics;
pub mod phone;
