//! Integration tests for intl-core
//!
//! These exercise the public surface the presentation layer calls: price
//! display, phone input fields and layout direction.

use intl_core::currency::{
    format_currency, format_price, get_currency, CurrencyRegistry, FormatOptions,
};
use intl_core::direction::{
    apply_document_dir, document_root, format_number_for_locale, get_dir, is_rtl, logical_padding,
    mirror_class, Direction, PaddingProperty, Side,
};
use intl_core::phone::{
    get_dial_prefix, get_phone_placeholder, looks_like_phone, to_e164, validate_phone,
    PhoneRuleRegistry,
};
use proptest::prelude::*;
use serial_test::serial;

// ==================== Currency Tests ====================

#[test]
fn test_unknown_currency_is_usd() {
    assert_eq!(get_currency(Some("zzz")).code, "USD");
    assert_eq!(get_currency(None).code, "USD");
}

#[test]
fn test_every_currency_formats_zero_and_negative() {
    for currency in CurrencyRegistry::get().list_all() {
        for amount in [0.0, -1.0, 50000.0, -123456.789, 1e12] {
            let formatted = format_currency(amount, Some(currency.code), &FormatOptions::default());
            assert!(!formatted.is_empty(), "{} {}", currency.code, amount);
        }
    }
}

#[test]
fn test_format_price_suffixes() {
    assert!(format_price(50000.0, Some("NGN"), Some("year")).ends_with("/ yr"));
    assert_eq!(
        format_price(50000.0, Some("NGN"), Some("outright")),
        format_currency(50000.0, Some("NGN"), &FormatOptions::default())
    );
    assert!(format_price(50000.0, Some("NGN"), Some("quarter")).ends_with("/ quarter"));
}

#[test]
fn test_listing_card_prices() {
    assert_eq!(format_price(2_500_000.0, Some("NGN"), Some("year")), "₦2,500,000 / yr");
    assert_eq!(format_price(45000.0, Some("KES"), Some("month")), "KSh45,000 / mo");
    assert_eq!(format_price(120.0, Some("GBP"), Some("night")), "£120 / night");
    assert_eq!(format_price(350.0, Some("ZAR"), Some("sqm")), "R 350 / m²");
}

// ==================== Phone Tests ====================

#[test]
fn test_phone_field_flow() {
    let country = "NG";
    assert_eq!(get_phone_placeholder(country), "0801 234 5678");
    assert_eq!(get_dial_prefix(country), "+234");

    let result = validate_phone(Some("08012345678"), Some(country));
    assert!(result.valid);
    assert_eq!(result.formatted.as_deref(), Some("+2348012345678"));
}

#[test]
fn test_phone_rejections() {
    assert!(!validate_phone(Some("123"), Some("NG")).valid);

    let empty = validate_phone(Some(""), Some("NG"));
    assert!(!empty.valid);
    assert!(empty.error.unwrap().contains("required"));
}

#[test]
fn test_every_country_example_validates_and_normalizes() {
    for rule in PhoneRuleRegistry::get().list_all() {
        let result = validate_phone(Some(rule.example), Some(rule.country_code));
        assert!(result.valid, "{} example rejected: {:?}", rule.country_code, result.error);

        let formatted = result.formatted.unwrap();
        assert!(formatted.starts_with(rule.dial_prefix));
        assert_eq!(to_e164(rule.example, rule.country_code), formatted);
    }
}

#[test]
fn test_to_e164_kenya() {
    assert_eq!(to_e164("0712345678", "KE"), "+254712345678");
}

#[test]
fn test_looks_like_phone() {
    assert!(looks_like_phone("+234 801 234 5678"));
    assert!(!looks_like_phone("abc"));
}

// ==================== Direction Tests ====================

#[test]
fn test_is_rtl() {
    assert!(is_rtl(Some("ar")));
    assert!(is_rtl(Some("ar-EG")));
    assert!(!is_rtl(Some("en")));
    assert!(!is_rtl(None));
}

#[test]
fn test_mirror_class_examples() {
    assert_eq!(mirror_class("ml-4", true), "mr-4");
    assert_eq!(mirror_class("text-left", true), "text-right");
}

#[test]
fn test_rtl_layout_for_language() {
    let rtl = get_dir(Some("ar")).is_rtl();
    assert_eq!(
        mirror_class("flex pl-4 ml-auto text-left", rtl),
        "flex pr-4 mr-auto text-right"
    );
    assert_eq!(
        logical_padding(Side::Start, "1rem", rtl).property,
        PaddingProperty::PaddingRight
    );
    assert_eq!(format_number_for_locale(3.0, Some("ar")), "٣");
}

#[test]
#[serial]
fn test_language_switch_updates_document_root() {
    assert_eq!(apply_document_dir(Some("fa-IR")), Direction::Rtl);
    assert_eq!(document_root().dir, Direction::Rtl);
    assert_eq!(document_root().lang, "fa-IR");

    assert_eq!(apply_document_dir(Some("en")), Direction::Ltr);
    assert_eq!(document_root().dir, Direction::Ltr);
}

proptest! {
    #[test]
    fn prop_mirror_class_ltr_identity(class in "\\PC*") {
        prop_assert_eq!(mirror_class(&class, false), class.as_str());
    }

    #[test]
    fn prop_format_currency_never_panics(amount in any::<f64>(), code in "[A-Z]{3}") {
        let formatted = format_currency(amount, Some(&code), &FormatOptions::default());
        prop_assert!(!formatted.is_empty());
    }
}
