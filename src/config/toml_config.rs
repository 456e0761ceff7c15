use crate::config::ConfigSourceKind;
use crate::domain::model::{CurrencyConfig, DEFAULT_CURRENCY, DEFAULT_LOCALE};
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub currency: CurrencySection,
    #[serde(default)]
    pub proxy: ProxySection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencySection {
    pub source: Option<ConfigSourceKind>,
    pub locale: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxySection {
    pub base_url: Option<String>,
    pub access_token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl DashboardConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DashboardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DashboardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROXY_BASE_URL})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DashboardError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn source(&self) -> ConfigSourceKind {
        self.currency.source.unwrap_or_default()
    }

    /// 檔案中指定的固定語系與幣別，缺值時用預設
    pub fn currency_config(&self) -> CurrencyConfig {
        CurrencyConfig::new(
            self.currency
                .locale
                .clone()
                .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            self.currency
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.proxy.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<()> {
        if let Some(locale) = &self.currency.locale {
            validation::validate_locale_tag("currency.locale", locale)?;
        }
        if let Some(currency) = &self.currency.currency {
            validation::validate_currency_code("currency.currency", currency)?;
        }
        if let Some(base_url) = &self.proxy.base_url {
            validation::validate_url("proxy.base_url", base_url)?;
        }
        if let Some(timeout) = self.proxy.timeout_seconds {
            validation::validate_range("proxy.timeout_seconds", timeout, 1, 300)?;
        }
        if self.source() == ConfigSourceKind::Remote {
            validation::validate_required_field("proxy.base_url", &self.proxy.base_url)?;
        }
        Ok(())
    }
}
