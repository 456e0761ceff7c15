use crate::domain::model::{BudgetForm, BudgetItem, CurrencyConfig};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// 提供目前生效的語系與幣別，每次呼叫都重新讀取
pub trait CurrencyConfigProvider: Send + Sync {
    fn current(&self) -> CurrencyConfig;

    fn locale(&self) -> String {
        self.current().locale
    }

    fn currency_code(&self) -> String {
        self.current().currency_code
    }
}

impl CurrencyConfigProvider for CurrencyConfig {
    fn current(&self) -> CurrencyConfig {
        self.clone()
    }
}

impl<P: CurrencyConfigProvider + ?Sized> CurrencyConfigProvider for Arc<P> {
    fn current(&self) -> CurrencyConfig {
        (**self).current()
    }
}

impl<P: CurrencyConfigProvider + ?Sized> CurrencyConfigProvider for &P {
    fn current(&self) -> CurrencyConfig {
        (**self).current()
    }
}

#[async_trait]
pub trait BudgetApi: Send + Sync {
    async fn update_budget(&self, access_token: &str, form: &BudgetForm) -> Result<BudgetItem>;
}
