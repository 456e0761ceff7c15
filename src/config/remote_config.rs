use crate::adapters::http::{build_client, endpoint, ensure_success};
use crate::domain::model::{CurrencyConfig, CurrencySettings};
use crate::domain::ports::CurrencyConfigProvider;
use crate::utils::error::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;
use url::Url;

/// Currency config fetched once from the proxy's `GET /get/currencySettings`.
///
/// [`current`](CurrencyConfigProvider::current) never waits: it returns the
/// fallback defaults until the load has finished. Callers that must not see
/// the fallback await [`ready`](Self::ready) first. The load runs at most
/// once; concurrent `ready()` calls share the same request.
#[derive(Debug)]
pub struct RemoteCurrencyConfig {
    settings_url: Url,
    client: Client,
    resolved: OnceCell<CurrencyConfig>,
}

impl RemoteCurrencyConfig {
    pub const SETTINGS_PATH: &'static str = "get/currencySettings";

    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            settings_url: endpoint(base_url, Self::SETTINGS_PATH)?,
            client: build_client(timeout)?,
            resolved: OnceCell::new(),
        })
    }

    pub fn settings_url(&self) -> &Url {
        &self.settings_url
    }

    pub async fn fetch_settings(&self) -> Result<CurrencySettings> {
        tracing::debug!("Fetching currency settings from {}", self.settings_url);
        let response = self.client.get(self.settings_url.clone()).send().await?;
        let response = ensure_success(response).await?;
        let settings: CurrencySettings = response.json().await?;
        Ok(settings)
    }

    /// 等待設定載入完成；失敗時記錄警告並沿用預設值，不會回傳錯誤
    pub async fn ready(&self) -> CurrencyConfig {
        self.resolved
            .get_or_init(|| async {
                match self.fetch_settings().await {
                    Ok(settings) => {
                        let config = settings.resolve();
                        tracing::info!(
                            "💱 Currency settings loaded: {} / {}",
                            config.locale,
                            config.currency_code
                        );
                        config
                    }
                    Err(e) => {
                        tracing::warn!(
                            "⚠️ Failed to load currency settings, using defaults: {}",
                            e
                        );
                        CurrencyConfig::default()
                    }
                }
            })
            .await
            .clone()
    }

    /// 背景載入，不等待結果
    pub fn spawn_load(self: &Arc<Self>) -> JoinHandle<CurrencyConfig> {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.ready().await })
    }

    pub fn is_loaded(&self) -> bool {
        self.resolved.initialized()
    }
}

impl CurrencyConfigProvider for RemoteCurrencyConfig {
    fn current(&self) -> CurrencyConfig {
        self.resolved.get().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_url() {
        let remote = RemoteCurrencyConfig::new("http://localhost:4000").unwrap();
        assert_eq!(
            remote.settings_url().as_str(),
            "http://localhost:4000/get/currencySettings"
        );
    }

    #[test]
    fn test_current_before_load_is_fallback() {
        let remote = RemoteCurrencyConfig::new("http://localhost:4000").unwrap();
        assert!(!remote.is_loaded());
        assert_eq!(remote.current(), CurrencyConfig::default());
        assert_eq!(remote.currency_code(), "USD");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(RemoteCurrencyConfig::new("localhost:4000").is_err());
    }
}
