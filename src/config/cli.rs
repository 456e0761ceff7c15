use crate::config::{AppSettings, ConfigSourceKind, DashboardConfig};
use crate::domain::model::BudgetDuration;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dashboard-currency")]
#[command(about = "Format spend amounts and edit budgets the way the dashboard does")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, global = true, help = "Where the locale/currency pair comes from")]
    pub source: Option<ConfigSourceKind>,

    #[arg(long, env = "PROXY_BASE_URL", global = true)]
    pub proxy_url: Option<String>,

    #[arg(long, env = "PROXY_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub access_token: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format an amount as currency
    Format {
        amount: String,
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        currency: Option<String>,
    },
    /// Print the bare currency symbol
    Symbol {
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        currency: Option<String>,
    },
    /// Print the configured currency code
    Code,
    /// Print the resolved locale/currency pair
    Settings,
    /// List supported locales and known currencies
    List {
        #[arg(long, help = "Only list locales")]
        locales: bool,
        #[arg(long, help = "Only list currencies")]
        currencies: bool,
    },
    /// Update a budget on the proxy
    UpdateBudget {
        #[arg(long)]
        budget_id: String,
        #[arg(long)]
        tpm_limit: Option<u64>,
        #[arg(long)]
        rpm_limit: Option<u64>,
        #[arg(long)]
        max_budget: Option<f64>,
        #[arg(long, help = "Reset period: 24h, 7d or 30d")]
        duration: Option<BudgetDuration>,
    },
}

impl CliConfig {
    /// 先讀設定檔，再以命令列參數覆寫
    pub fn to_settings(&self) -> Result<AppSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                let file = DashboardConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => DashboardConfig::default(),
        };

        let mut settings = AppSettings::from(&file);
        if let Some(source) = self.source {
            settings.source = source;
        }
        if let Some(url) = &self.proxy_url {
            settings.proxy_url = Some(url.clone());
        }
        if let Some(token) = &self.access_token {
            settings.access_token = Some(token.clone());
        }
        Ok(settings)
    }
}
