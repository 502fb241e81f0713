use std::str::FromStr;

use finance_core::currency::{Currency, RateTable};
use finance_core::ledger::Settings;

#[test]
fn conversion_applies_direct_multiplier() {
    let rates = RateTable::seed();
    let converted = rates.convert_to_base(100.0, Currency::EUR);
    assert!((converted - 108.0).abs() < f64::EPSILON);
}

#[test]
fn conversion_is_identity_for_base_currency() {
    let settings = Settings::default();
    assert_eq!(settings.rate_of(Currency::USD), 1.0);
    let amount = 1234.56;
    assert!((settings.convert_to_base(amount, Currency::USD) - amount).abs() < f64::EPSILON);
}

#[test]
fn conversion_is_linear() {
    let rates = RateTable::seed();
    let (a, b) = (37.5, 104.25);
    let lhs = rates.convert_to_base(a + b, Currency::GBP);
    let rhs = rates.convert_to_base(a, Currency::GBP) + rates.convert_to_base(b, Currency::GBP);
    assert!((lhs - rhs).abs() < 1e-9);
}

#[test]
fn negative_amounts_keep_their_sign() {
    let rates = RateTable::seed();
    let converted = rates.convert_to_base(-50.0, Currency::EUR);
    assert!(converted < 0.0);
    assert!((converted + 54.0).abs() < f64::EPSILON);
}

#[test]
fn zero_rate_yields_zero() {
    let mut rates = RateTable::new();
    rates.set(Currency::JPY, 0.0);
    assert_eq!(rates.convert_to_base(10_000.0, Currency::JPY), 0.0);
}

#[test]
fn missing_rate_falls_back_to_parity() {
    let rates = RateTable::new();
    assert_eq!(rates.get(Currency::CHF), None);
    assert!((rates.convert_to_base(20.0, Currency::CHF) - 20.0).abs() < f64::EPSILON);
}

#[test]
fn seed_rates_cover_every_supported_currency() {
    let rates = RateTable::seed();
    for currency in Currency::ALL {
        assert!(rates.get(currency).is_some(), "missing seed for {}", currency);
    }
    assert_eq!(rates.get(Currency::USD), Some(1.0));
    assert_eq!(rates.get(Currency::JPY), Some(0.0064));
    assert_eq!(rates.get(Currency::COP), Some(0.00026));
}

#[test]
fn currency_codes_parse_case_sensitively() {
    assert_eq!(Currency::from_str("EUR").unwrap(), Currency::EUR);
    assert!(Currency::from_str("eur").is_err());
    assert!(Currency::from_str("XXX").is_err());
}

#[test]
fn rate_table_rejects_invalid_rates() {
    let mut rates = RateTable::seed();
    rates.set(Currency::EUR, f64::NAN);
    assert!(rates.validate().is_err());

    let mut rates = RateTable::seed();
    rates.set(Currency::EUR, -1.0);
    assert!(rates.validate().is_err());

    assert!(RateTable::seed().validate().is_ok());
}

#[test]
fn default_settings_match_the_shipped_seed() {
    let settings = Settings::default();
    assert_eq!(settings.base_currency, Currency::USD);
    assert_eq!(settings.month_start_day, 25);
    assert_eq!(settings.exchange_rates.get(Currency::EUR), Some(1.08));
    assert_eq!(settings.exchange_rates.get(Currency::GBP), Some(1.27));
}
