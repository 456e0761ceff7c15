pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};

pub use crate::adapters::HttpBudgetApi;
pub use crate::config::{
    AppSettings, ConfigSourceKind, DashboardConfig, EnvCurrencyConfig, RemoteCurrencyConfig,
    SharedCurrencyConfig,
};
pub use crate::core::budget_editor::BudgetEditor;
pub use crate::core::formatter::{currency_symbol_in, format_currency_in, CurrencyFormatter};
pub use crate::domain::model::{
    Amount, BudgetDuration, BudgetForm, BudgetItem, CurrencyConfig, CurrencySettings, Notification,
    NotificationLevel,
};
pub use crate::domain::ports::{BudgetApi, CurrencyConfigProvider};
pub use crate::utils::error::{DashboardError, Result};
