use dashboard_currency::{
    currency_symbol_in, format_currency_in, Amount, CurrencyConfig, CurrencyFormatter,
    SharedCurrencyConfig,
};

#[test]
fn test_documented_examples() {
    assert_eq!(format_currency_in(1234.5, "en-US", "USD"), "$1,234.50");
    assert_eq!(currency_symbol_in("en-US", "USD"), "$");
    assert_eq!(currency_symbol_in("de-CH", "CHF"), "CHF");
}

#[test]
fn test_missing_and_non_numeric_render_empty() {
    assert_eq!(format_currency_in(Amount::Missing, "en-US", "USD"), "");
    assert_eq!(format_currency_in(None::<&str>, "en-US", "USD"), "");
    assert_eq!(format_currency_in("abc", "en-US", "USD"), "");
    assert_eq!(format_currency_in(&serde_json::Value::Null, "en-US", "USD"), "");
}

#[test]
fn test_string_and_number_inputs_match() {
    for (text, number) in [("42", 42.0), ("0.1", 0.1), ("-17.255", -17.255), ("1e6", 1e6)] {
        assert_eq!(
            format_currency_in(text, "en-US", "USD"),
            format_currency_in(number, "en-US", "USD"),
            "mismatch for {}",
            text
        );
    }
}

#[test]
fn test_grouping_and_decimals_across_locales() {
    let cases = [
        (1234567.891, "en-US", "USD", "$1,234,567.89"),
        (1234567.891, "en-GB", "GBP", "£1,234,567.89"),
        (1234567.891, "de-DE", "EUR", "1.234.567,89\u{a0}€"),
        (1234567.891, "ja-JP", "JPY", "￥1,234,568"),
        (1234567.891, "pt-BR", "BRL", "R$\u{a0}1.234.567,89"),
        (1234567.891, "nl-NL", "EUR", "€\u{a0}1.234.567,89"),
        (1234567.891, "en-IN", "INR", "₹12,34,567.89"),
    ];

    for (amount, locale, currency, expected) in cases {
        assert_eq!(
            format_currency_in(amount, locale, currency),
            expected,
            "{} {}",
            locale,
            currency
        );
    }
}

#[test]
fn test_json_amounts_from_budget_records() {
    let record = serde_json::json!({"max_budget": 250, "spend": "12.3456", "soft_budget": null});
    assert_eq!(format_currency_in(&record["max_budget"], "en-US", "USD"), "$250.00");
    assert_eq!(format_currency_in(&record["spend"], "en-US", "USD"), "$12.35");
    assert_eq!(format_currency_in(&record["soft_budget"], "en-US", "USD"), "");
    assert_eq!(format_currency_in(&record["missing"], "en-US", "USD"), "");
}

#[test]
fn test_defaults_track_shared_config() {
    let shared = SharedCurrencyConfig::default();
    let formatter = CurrencyFormatter::new(shared.clone());
    assert_eq!(formatter.currency_code(), "USD");
    assert_eq!(formatter.format_currency(5, None, None), "$5.00");

    shared.set(CurrencyConfig::new("fr-FR", "EUR"));

    assert_eq!(formatter.currency_code(), "EUR");
    assert_eq!(formatter.currency_symbol(None, None), "€");
    assert_eq!(formatter.format_currency(5, None, None), "5,00\u{a0}€");
    // Explicit overrides still win over the provider
    assert_eq!(formatter.format_currency(5, Some("en-US"), Some("USD")), "$5.00");
}
