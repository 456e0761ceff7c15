use anyhow::Context;
use clap::Parser;
use dashboard_currency::core::{currency, locale};
use dashboard_currency::utils::error::{DashboardError, ErrorSeverity};
use dashboard_currency::utils::{logger, validation::Validate};
use dashboard_currency::{
    AppSettings, BudgetEditor, BudgetItem, CliConfig, Command, CurrencyConfigProvider,
    CurrencyFormatter, HttpBudgetApi, NotificationLevel,
};
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting dashboard-currency CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    let settings = match cli.to_settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = run(&cli.command, &settings).await {
        exit_with(&e);
    }

    std::io::stdout().flush().context("flushing output")?;
    Ok(())
}

async fn run(command: &Command, settings: &AppSettings) -> dashboard_currency::Result<()> {
    // list 只看內建資料，不需要載入設定來源
    if let Command::List { locales, currencies } = command {
        let show_all = !locales && !currencies;
        if show_all || *locales {
            println!("Locales:");
            for tag in locale::supported_tags() {
                println!("  {}", tag);
            }
        }
        if show_all || *currencies {
            println!("Currencies:");
            for info in currency::all() {
                println!("  {}", info);
            }
        }
        return Ok(());
    }

    let provider = settings.build_provider().await?;
    let formatter = CurrencyFormatter::new(provider);

    match command {
        Command::Format {
            amount,
            locale,
            currency,
        } => {
            let formatted =
                formatter.format_currency(amount.as_str(), locale.as_deref(), currency.as_deref());
            println!("{}", formatted);
        }
        Command::Symbol { locale, currency } => {
            println!(
                "{}",
                formatter.currency_symbol(locale.as_deref(), currency.as_deref())
            );
        }
        Command::Code => println!("{}", formatter.currency_code()),
        Command::Settings => {
            let current = formatter.provider().current();
            println!("{}", serde_json::to_string_pretty(&current)?);
        }
        Command::List { .. } => {}
        Command::UpdateBudget {
            budget_id,
            tpm_limit,
            rpm_limit,
            max_budget,
            duration,
        } => {
            let base_url = dashboard_currency::utils::validation::validate_required_field(
                "proxy.base_url",
                &settings.proxy_url,
            )?;
            let api = HttpBudgetApi::with_timeout(base_url, settings.timeout)?;
            let mut editor = BudgetEditor::new(api);
            editor.open(&BudgetItem::new(budget_id.clone()));

            let form = editor.form_mut();
            form.tpm_limit = *tpm_limit;
            form.rpm_limit = *rpm_limit;
            form.max_budget = *max_budget;
            form.budget_duration = *duration;

            tracing::info!(
                "{}: {}",
                BudgetEditor::<HttpBudgetApi>::max_budget_label(formatter.provider()),
                formatter.format_currency(*max_budget, None, None)
            );

            let updated = editor
                .submit(settings.access_token.as_deref(), || {
                    tracing::info!("✅ Budget list refreshed");
                })
                .await?;

            for notification in editor.take_notifications() {
                match notification.level {
                    NotificationLevel::Error => eprintln!("❌ {}", notification.message),
                    _ => println!("{}", notification.message),
                }
            }

            match updated {
                Some(item) => println!("{}", serde_json::to_string_pretty(&item)?),
                None if settings.access_token.is_none() => {
                    return Err(DashboardError::MissingConfigError {
                        field: "proxy.access_token".to_string(),
                    });
                }
                None => {}
            }
        }
    }

    Ok(())
}

fn exit_with(e: &DashboardError) -> ! {
    tracing::error!(
        "❌ dashboard-currency failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0, // 警告，但成功
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
