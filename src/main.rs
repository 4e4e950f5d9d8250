//! Command-line front end for the intl-core utilities.
//!
//! Usage:
//!   intl-core price <amount> [currency] [unit]
//!   intl-core phone <number> [country]
//!   intl-core e164 <number> [country]
//!   intl-core dir [language]
//!   intl-core mirror <language> <class>...
//!   intl-core number <value> [language]
//!   intl-core currencies [nigeria|africa|global]
//!
//! Optional environment variables (or .env):
//! - DEFAULT_CURRENCY (defaults to NGN)
//! - DEFAULT_COUNTRY (defaults to NG)
//! - DEFAULT_LANGUAGE (defaults to en)
//! - PRICE_FRACTION_DIGITS (defaults to 0)

use anyhow::{bail, Context, Result};
use intl_core::config::Config;
use intl_core::currency::{self, CurrencyRegistry, FormatOptions, Region};
use intl_core::direction;
use intl_core::metrics::FallbackMetrics;
use intl_core::phone;
use tracing::debug;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intl_core=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    let output = run(&config, &args)?;
    println!("{}", output);

    debug!(
        "Fallback metrics: {}",
        serde_json::to_string(&FallbackMetrics::global().report())?
    );
    Ok(())
}

fn run(config: &Config, args: &[String]) -> Result<String> {
    let arg = |i: usize| args.get(i).map(String::as_str);

    match arg(0) {
        Some("price") => {
            let amount = parse_amount(arg(1))?;
            let code = arg(2).unwrap_or(config.default_currency.as_str());
            let options = FormatOptions::new().with_fraction_digits(config.price_fraction_digits);
            Ok(currency::format_price_with(amount, Some(code), arg(3), &options))
        }
        Some("phone") => {
            let country = arg(2).unwrap_or(config.default_country.as_str());
            let result = phone::validate_phone(arg(1), Some(country));
            Ok(serde_json::to_string_pretty(&result)?)
        }
        Some("e164") => {
            let raw = arg(1).context("missing phone number")?;
            Ok(phone::to_e164(raw, arg(2).unwrap_or(config.default_country.as_str())))
        }
        Some("dir") => {
            let tag = arg(1).unwrap_or(config.default_language.as_str());
            direction::apply_document_dir(Some(tag));
            Ok(serde_json::to_string(&direction::document_root())?)
        }
        Some("mirror") => {
            let tag = arg(1).context("missing language tag")?;
            let classes = args[2..].join(" ");
            Ok(direction::mirror_class(&classes, direction::is_rtl(Some(tag))).into_owned())
        }
        Some("number") => {
            let value = parse_amount(arg(1))?;
            let tag = arg(2).unwrap_or(config.default_language.as_str());
            Ok(direction::format_number_for_locale(value, Some(tag)))
        }
        Some("currencies") => {
            let registry = CurrencyRegistry::get();
            let listing = match arg(1) {
                Some(name) => match Region::from_name(name) {
                    Some(region) => registry.list_by_region(region),
                    None => bail!("Unknown region '{}'", name),
                },
                None => registry.list_all(),
            };
            Ok(serde_json::to_string_pretty(&listing)?)
        }
        Some(other) => bail!("Unknown command '{}'", other),
        None => bail!("Usage: intl-core <price|phone|e164|dir|mirror|number|currencies> ..."),
    }
}

fn parse_amount(raw: Option<&str>) -> Result<f64> {
    let raw = raw.context("missing amount")?;
    raw.replace(',', "")
        .parse()
        .with_context(|| format!("'{}' is not a number", raw))
}
