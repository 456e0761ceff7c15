use crate::core::currency::{self, Currency};
use crate::core::locale::{self, LocaleSettings};
use crate::core::number;
use crate::domain::model::Amount;
use crate::domain::ports::CurrencyConfigProvider;
use crate::utils::error::Result;

const NBSP: char = '\u{a0}';

/// Formats amounts with defaults taken from a [`CurrencyConfigProvider`].
///
/// The provider is consulted on every call, so a provider whose value changes
/// (shared cell, remote load) is reflected immediately.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter<P: CurrencyConfigProvider> {
    provider: P,
}

impl<P: CurrencyConfigProvider> CurrencyFormatter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 格式化金額；缺值、非數字或幣別代碼不合法時回傳空字串
    pub fn format_currency(
        &self,
        amount: impl Into<Amount>,
        locale: Option<&str>,
        currency: Option<&str>,
    ) -> String {
        match self.try_format_currency(amount, locale, currency) {
            Ok(formatted) => formatted,
            Err(e) => {
                tracing::warn!("⚠️ Cannot format amount: {}", e);
                String::new()
            }
        }
    }

    pub fn try_format_currency(
        &self,
        amount: impl Into<Amount>,
        locale: Option<&str>,
        currency: Option<&str>,
    ) -> Result<String> {
        let (locale_tag, currency_code) = self.effective(locale, currency);
        try_format_in(amount.into(), &locale_tag, &currency_code)
    }

    pub fn currency_symbol(&self, locale: Option<&str>, currency: Option<&str>) -> String {
        let (locale_tag, currency_code) = self.effective(locale, currency);
        currency_symbol_in(&locale_tag, &currency_code)
    }

    pub fn currency_code(&self) -> String {
        self.provider.currency_code()
    }

    fn effective(&self, locale: Option<&str>, currency: Option<&str>) -> (String, String) {
        match (locale, currency) {
            (Some(l), Some(c)) => (l.to_string(), c.to_string()),
            _ => {
                let config = self.provider.current();
                (
                    locale.map(str::to_string).unwrap_or(config.locale),
                    currency.map(str::to_string).unwrap_or(config.currency_code),
                )
            }
        }
    }
}

pub fn format_currency_in(amount: impl Into<Amount>, locale: &str, currency: &str) -> String {
    match try_format_in(amount.into(), locale, currency) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::warn!("⚠️ Cannot format amount: {}", e);
            String::new()
        }
    }
}

/// 把 0 以零位小數格式化後去掉數字與空白，得到幣別符號
pub fn currency_symbol_in(locale: &str, currency: &str) -> String {
    let currency = match currency::resolve(currency) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("⚠️ Cannot derive currency symbol: {}", e);
            return String::new();
        }
    };
    let rendered = render(0.0, locale::resolve(locale), &currency, 0);
    rendered
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect::<String>()
        .trim()
        .to_string()
}

fn try_format_in(amount: Amount, locale: &str, currency: &str) -> Result<String> {
    let Some(value) = number::to_number(&amount) else {
        tracing::debug!("Amount {:?} is not numeric, rendering empty string", amount);
        return Ok(String::new());
    };
    let currency = currency::resolve(currency)?;
    let settings = locale::resolve(locale);
    let digits = currency.minor_digits;
    Ok(render(value, settings, &currency, digits))
}

fn render(value: f64, settings: &LocaleSettings, currency: &Currency, digits: usize) -> String {
    let number = if value.is_infinite() {
        "∞".to_string()
    } else {
        let (int_digits, frac_digits) = number::round_half_expand(value, digits);
        let mut out = number::group_integer(
            &int_digits,
            settings.group,
            settings.primary_group,
            settings.secondary_group,
            settings.min_grouping,
        );
        if !frac_digits.is_empty() {
            out.push(settings.decimal);
            out.push_str(&frac_digits);
        }
        out
    };

    let symbol = settings
        .symbol_override(&currency.code)
        .unwrap_or(currency.symbol.as_str());
    apply_pattern(settings.pattern(value.is_sign_negative()), symbol, &number)
}

/// 代入樣式；符號與數字直接相鄰且符號那一側是字母或數字時補一個不換行空白
fn apply_pattern(pattern: &str, symbol: &str, number: &str) -> String {
    let symbol_first = pattern.contains("¤#");
    let number_first = pattern.contains("#¤");

    let spaced_symbol = if symbol_first && symbol.chars().last().is_some_and(char::is_alphanumeric)
    {
        format!("{}{}", symbol, NBSP)
    } else if number_first && symbol.chars().next().is_some_and(char::is_alphanumeric) {
        format!("{}{}", NBSP, symbol)
    } else {
        symbol.to_string()
    };

    pattern.replace('¤', &spaced_symbol).replace('#', number)
}
