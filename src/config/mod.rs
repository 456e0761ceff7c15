#[cfg(feature = "cli")]
pub mod cli;
pub mod env_config;
pub mod remote_config;
pub mod shared_config;
pub mod toml_config;

use crate::domain::model::CurrencyConfig;
use crate::domain::ports::CurrencyConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub use env_config::EnvCurrencyConfig;
pub use remote_config::RemoteCurrencyConfig;
pub use shared_config::SharedCurrencyConfig;
pub use toml_config::DashboardConfig;

/// 幣別設定的來源，在組裝程式時選定一次
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ConfigSourceKind {
    /// Fixed values from the config file
    Static,
    /// NEXT_PUBLIC_LOCALE / NEXT_PUBLIC_CURRENCY, read once
    #[default]
    Env,
    /// A shared cell seeded from the config file
    Shared,
    /// GET /get/currencySettings on the proxy
    Remote,
}

impl fmt::Display for ConfigSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigSourceKind::Static => "static",
            ConfigSourceKind::Env => "env",
            ConfigSourceKind::Shared => "shared",
            ConfigSourceKind::Remote => "remote",
        };
        f.write_str(name)
    }
}

/// Fully merged settings the binary wires its providers from.
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    pub source: ConfigSourceKind,
    pub currency: CurrencyConfig,
    pub proxy_url: Option<String>,
    pub access_token: Option<String>,
    pub timeout: Option<Duration>,
}

impl From<&DashboardConfig> for AppSettings {
    fn from(file: &DashboardConfig) -> Self {
        Self {
            source: file.source(),
            currency: file.currency_config(),
            proxy_url: file.proxy.base_url.clone(),
            access_token: file.proxy.access_token.clone(),
            timeout: file.timeout(),
        }
    }
}

impl AppSettings {
    /// 依來源建立 provider；remote 會等第一次載入完成才回傳
    pub async fn build_provider(&self) -> Result<Arc<dyn CurrencyConfigProvider>> {
        tracing::debug!("Wiring currency config source: {}", self.source);
        let provider: Arc<dyn CurrencyConfigProvider> = match self.source {
            ConfigSourceKind::Static => Arc::new(self.currency.clone()),
            ConfigSourceKind::Env => Arc::new(EnvCurrencyConfig::from_env()),
            ConfigSourceKind::Shared => Arc::new(SharedCurrencyConfig::new(self.currency.clone())),
            ConfigSourceKind::Remote => {
                let base_url =
                    validation::validate_required_field("proxy.base_url", &self.proxy_url)?;
                let remote = RemoteCurrencyConfig::with_timeout(base_url, self.timeout)?;
                remote.ready().await;
                Arc::new(remote)
            }
        };
        Ok(provider)
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_locale_tag("currency.locale", &self.currency.locale)?;
        validation::validate_currency_code("currency.currency", &self.currency.currency_code)?;
        if let Some(url) = &self.proxy_url {
            validation::validate_url("proxy.base_url", url)?;
        }
        if let Some(token) = &self.access_token {
            validation::validate_non_empty_string("proxy.access_token", token)?;
        }
        if self.source == ConfigSourceKind::Remote {
            validation::validate_required_field("proxy.base_url", &self.proxy_url)?;
        }
        Ok(())
    }
}
