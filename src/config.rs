use crate::locale::MAX_FRACTION_DIGITS;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Currency
    pub default_currency: String,
    pub price_fraction_digits: u8,

    // Phone
    pub default_country: String,

    // Direction
    pub default_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let price_fraction_digits = match std::env::var("PRICE_FRACTION_DIGITS") {
            Ok(v) => v
                .trim()
                .parse::<u8>()
                .context("PRICE_FRACTION_DIGITS must be a number")?,
            Err(_) => 0,
        };
        if price_fraction_digits > MAX_FRACTION_DIGITS {
            bail!(
                "PRICE_FRACTION_DIGITS must be at most {}, got {}",
                MAX_FRACTION_DIGITS,
                price_fraction_digits
            );
        }

        Ok(Self {
            // Currency
            default_currency: std::env::var("DEFAULT_CURRENCY")
                .unwrap_or_else(|_| "NGN".to_string()),
            price_fraction_digits,

            // Phone
            default_country: std::env::var("DEFAULT_COUNTRY")
                .unwrap_or_else(|_| "NG".to_string()),

            // Direction
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
        })
    }
}
