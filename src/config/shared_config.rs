use crate::domain::model::{CurrencyConfig, CurrencySettings};
use crate::domain::ports::CurrencyConfigProvider;
use std::sync::{Arc, RwLock};

/// Cloneable handle to one process-wide currency config. Every clone sees
/// the latest value written by the owner.
#[derive(Debug, Clone, Default)]
pub struct SharedCurrencyConfig {
    inner: Arc<RwLock<CurrencyConfig>>,
}

impl SharedCurrencyConfig {
    pub fn new(initial: CurrencyConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn set(&self, config: CurrencyConfig) {
        tracing::debug!(
            "Shared currency config set to {} / {}",
            config.locale,
            config.currency_code
        );
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = config;
    }

    pub fn apply(&self, settings: &CurrencySettings) {
        self.set(settings.resolve());
    }
}

impl CurrencyConfigProvider for SharedCurrencyConfig {
    fn current(&self) -> CurrencyConfig {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
