use crate::domain::model::{CurrencyConfig, DEFAULT_CURRENCY, DEFAULT_LOCALE};
use crate::domain::ports::CurrencyConfigProvider;
use std::env;

pub const LOCALE_VAR: &str = "NEXT_PUBLIC_LOCALE";
pub const CURRENCY_VAR: &str = "NEXT_PUBLIC_CURRENCY";

/// 啟動時從環境變數讀取一次，之後不再變動
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvCurrencyConfig {
    config: CurrencyConfig,
}

impl EnvCurrencyConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 未設定或空字串都視為缺值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str, fallback: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        let config = CurrencyConfig::new(
            read(LOCALE_VAR, DEFAULT_LOCALE),
            read(CURRENCY_VAR, DEFAULT_CURRENCY),
        );
        tracing::debug!(
            "Currency config from environment: {} / {}",
            config.locale,
            config.currency_code
        );
        Self { config }
    }
}

impl CurrencyConfigProvider for EnvCurrencyConfig {
    fn current(&self) -> CurrencyConfig {
        self.config.clone()
    }
}
