use crate::utils::error::{DashboardError, Result};
use std::fmt;

/// ISO 4217 幣別資料：小數位數與通用符號
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub minor_digits: usize,
    pub symbol: &'static str,
    pub name: &'static str,
}

const fn info(
    code: &'static str,
    minor_digits: usize,
    symbol: &'static str,
    name: &'static str,
) -> CurrencyInfo {
    CurrencyInfo {
        code,
        minor_digits,
        symbol,
        name,
    }
}

// 符號取自 CLDR root，語系專屬的寫法放在 locale 表
static CURRENCIES: &[CurrencyInfo] = &[
    info("AED", 2, "AED", "UAE Dirham"),
    info("AUD", 2, "A$", "Australian Dollar"),
    info("BHD", 3, "BHD", "Bahraini Dinar"),
    info("BRL", 2, "R$", "Brazilian Real"),
    info("CAD", 2, "CA$", "Canadian Dollar"),
    info("CHF", 2, "CHF", "Swiss Franc"),
    info("CLP", 0, "CLP", "Chilean Peso"),
    info("CNY", 2, "CN¥", "Chinese Yuan"),
    info("CZK", 2, "CZK", "Czech Koruna"),
    info("DKK", 2, "DKK", "Danish Krone"),
    info("EUR", 2, "€", "Euro"),
    info("GBP", 2, "£", "British Pound"),
    info("HKD", 2, "HK$", "Hong Kong Dollar"),
    info("HUF", 2, "HUF", "Hungarian Forint"),
    info("IDR", 2, "IDR", "Indonesian Rupiah"),
    info("ILS", 2, "₪", "Israeli New Shekel"),
    info("INR", 2, "₹", "Indian Rupee"),
    info("ISK", 0, "ISK", "Icelandic Krona"),
    info("JOD", 3, "JOD", "Jordanian Dinar"),
    info("JPY", 0, "JP¥", "Japanese Yen"),
    info("KRW", 0, "₩", "South Korean Won"),
    info("KWD", 3, "KWD", "Kuwaiti Dinar"),
    info("MXN", 2, "MX$", "Mexican Peso"),
    info("NOK", 2, "NOK", "Norwegian Krone"),
    info("NZD", 2, "NZ$", "New Zealand Dollar"),
    info("OMR", 3, "OMR", "Omani Rial"),
    info("PHP", 2, "₱", "Philippine Peso"),
    info("PLN", 2, "PLN", "Polish Zloty"),
    info("RUB", 2, "RUB", "Russian Ruble"),
    info("SAR", 2, "SAR", "Saudi Riyal"),
    info("SEK", 2, "SEK", "Swedish Krona"),
    info("SGD", 2, "SGD", "Singapore Dollar"),
    info("THB", 2, "THB", "Thai Baht"),
    info("TRY", 2, "TRY", "Turkish Lira"),
    info("TWD", 2, "NT$", "New Taiwan Dollar"),
    info("UAH", 2, "UAH", "Ukrainian Hryvnia"),
    info("USD", 2, "US$", "US Dollar"),
    info("VND", 0, "₫", "Vietnamese Dong"),
    info("XAF", 0, "FCFA", "Central African CFA Franc"),
    info("XOF", 0, "F\u{202f}CFA", "West African CFA Franc"),
    info("ZAR", 2, "ZAR", "South African Rand"),
];

/// A currency ready for rendering. Codes missing from the table still format,
/// using the code itself as symbol and two fraction digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub code: String,
    pub minor_digits: usize,
    pub symbol: String,
}

pub fn find(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

pub fn resolve(code: &str) -> Result<Currency> {
    let code = code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DashboardError::UnsupportedCurrency {
            code: code.to_string(),
        });
    }

    let upper = code.to_ascii_uppercase();
    Ok(match find(&upper) {
        Some(info) => Currency {
            code: upper,
            minor_digits: info.minor_digits,
            symbol: info.symbol.to_string(),
        },
        None => {
            tracing::debug!("Currency {} not in table, using code as symbol", upper);
            Currency {
                symbol: upper.clone(),
                code: upper,
                minor_digits: 2,
            }
        }
    })
}

pub fn all() -> &'static [CurrencyInfo] {
    CURRENCIES
}

impl fmt::Display for CurrencyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {} ({} digits, {})",
            self.code, self.name, self.minor_digits, self.symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        let codes: Vec<&str> = all().iter().map(|c| c.code).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let jpy = resolve("jpy").unwrap();
        assert_eq!(jpy.code, "JPY");
        assert_eq!(jpy.minor_digits, 0);
        assert_eq!(jpy.symbol, "JP¥");
    }

    #[test]
    fn test_resolve_unknown_code() {
        let xyz = resolve("XYZ").unwrap();
        assert_eq!(xyz.symbol, "XYZ");
        assert_eq!(xyz.minor_digits, 2);
        assert!(find("XYZ").is_none());
    }

    #[test]
    fn test_info_display_includes_name() {
        let chf = find("chf").unwrap();
        assert_eq!(chf.to_string(), "CHF  Swiss Franc (2 digits, CHF)");
    }

    #[test]
    fn test_resolve_rejects_malformed_codes() {
        assert!(resolve("").is_err());
        assert!(resolve("US").is_err());
        assert!(resolve("$").is_err());
        assert!(resolve("EURO").is_err());
    }
}
