use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_CURRENCY: &str = "USD";

/// 幣別顯示設定：語系加上 ISO 4217 代碼
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub locale: String,
    pub currency_code: String,
}

impl CurrencyConfig {
    pub fn new(locale: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            currency_code: currency_code.into(),
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, DEFAULT_CURRENCY)
    }
}

/// `GET /get/currencySettings` 的回應內容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

impl CurrencySettings {
    /// 缺少或空白的欄位改用預設值
    pub fn resolve(&self) -> CurrencyConfig {
        fn pick(value: &Option<String>, fallback: &str) -> String {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_string()
        }

        CurrencyConfig::new(
            pick(&self.locale, DEFAULT_LOCALE),
            pick(&self.currency, DEFAULT_CURRENCY),
        )
    }
}

/// Untyped amount as it arrives from budget records and form inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(f64),
    Text(String),
    Missing,
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<f32> for Amount {
    fn from(value: f32) -> Self {
        Amount::Number(value as f64)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Number(value as f64)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount::Number(value as f64)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount::Number(value as f64)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::Text(value)
    }
}

impl<T: Into<Amount>> From<Option<T>> for Amount {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Amount::Missing)
    }
}

impl From<&serde_json::Value> for Amount {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map(Amount::Number).unwrap_or(Amount::Missing),
            serde_json::Value::String(s) => Amount::Text(s.clone()),
            _ => Amount::Missing,
        }
    }
}

/// 預算重置週期，只提供三種固定選項
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetDuration {
    #[serde(rename = "24h")]
    Daily,
    #[serde(rename = "7d")]
    Weekly,
    #[serde(rename = "30d")]
    Monthly,
}

impl BudgetDuration {
    pub const ALL: [BudgetDuration; 3] = [
        BudgetDuration::Daily,
        BudgetDuration::Weekly,
        BudgetDuration::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetDuration::Daily => "24h",
            BudgetDuration::Weekly => "7d",
            BudgetDuration::Monthly => "30d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetDuration::Daily => "daily",
            BudgetDuration::Weekly => "weekly",
            BudgetDuration::Monthly => "monthly",
        }
    }

}

impl fmt::Display for BudgetDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "24h" | "daily" => Ok(BudgetDuration::Daily),
            "7d" | "weekly" => Ok(BudgetDuration::Weekly),
            "30d" | "monthly" => Ok(BudgetDuration::Monthly),
            other => Err(format!(
                "unknown budget duration '{}', expected one of 24h, 7d, 30d",
                other
            )),
        }
    }
}

/// Budget record as returned by the proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub budget_id: String,
    #[serde(default)]
    pub max_budget: Option<f64>,
    #[serde(default)]
    pub soft_budget: Option<f64>,
    #[serde(default)]
    pub tpm_limit: Option<u64>,
    #[serde(default)]
    pub rpm_limit: Option<u64>,
    #[serde(default)]
    pub max_parallel_requests: Option<u64>,
    #[serde(default)]
    pub budget_duration: Option<String>,
    #[serde(default)]
    pub budget_reset_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BudgetItem {
    pub fn new(budget_id: impl Into<String>) -> Self {
        Self {
            budget_id: budget_id.into(),
            max_budget: None,
            soft_budget: None,
            tpm_limit: None,
            rpm_limit: None,
            max_parallel_requests: None,
            budget_duration: None,
            budget_reset_at: None,
            created_at: None,
            updated_at: None,
            extra: serde_json::Map::new(),
        }
    }

    /// 後端可能回傳不在三種選項內的週期字串，無法辨識時回傳 None
    pub fn duration(&self) -> Option<BudgetDuration> {
        self.budget_duration.as_deref().and_then(|d| d.parse().ok())
    }

    pub fn reset_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.budget_reset_at.as_deref().and_then(parse_timestamp)
    }
}

/// 接受 RFC 3339 以及不含時區的 ISO 時間（視為 UTC）
pub fn parse_timestamp(raw: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&chrono::Utc));
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// 編輯預算表單的欄位值；未填的上限送出為 null，後端才會清掉舊值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetForm {
    pub budget_id: String,
    #[serde(default)]
    pub tpm_limit: Option<u64>,
    #[serde(default)]
    pub rpm_limit: Option<u64>,
    #[serde(default)]
    pub max_budget: Option<f64>,
    #[serde(default)]
    pub budget_duration: Option<BudgetDuration>,
}

impl From<&BudgetItem> for BudgetForm {
    fn from(item: &BudgetItem) -> Self {
        Self {
            budget_id: item.budget_id.clone(),
            tpm_limit: item.tpm_limit,
            rpm_limit: item.rpm_limit,
            max_budget: item.max_budget,
            budget_duration: item.duration(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// 使用者可見的短暫提示訊息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub duration: Duration,
}

impl Notification {
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Info, message, Self::DEFAULT_DURATION)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Success, message, Self::DEFAULT_DURATION)
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self::with_level(NotificationLevel::Error, message, duration)
    }

    fn with_level(level: NotificationLevel, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            level,
            message: message.into(),
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_resolve_falls_back_on_missing_or_empty() {
        let settings = CurrencySettings {
            currency: Some("EUR".to_string()),
            locale: None,
        };
        assert_eq!(settings.resolve(), CurrencyConfig::new("en-US", "EUR"));

        let settings = CurrencySettings {
            currency: Some("  ".to_string()),
            locale: Some("de-DE".to_string()),
        };
        assert_eq!(settings.resolve(), CurrencyConfig::new("de-DE", "USD"));
    }

    #[test]
    fn test_amount_from_json_value() {
        assert_eq!(Amount::from(&serde_json::json!(12.5)), Amount::Number(12.5));
        assert_eq!(Amount::from(&serde_json::json!("7")), Amount::Text("7".to_string()));
        assert_eq!(Amount::from(&serde_json::Value::Null), Amount::Missing);
        assert_eq!(Amount::from(&serde_json::json!([1])), Amount::Missing);
        assert_eq!(Amount::from(None::<f64>), Amount::Missing);
    }

    #[test]
    fn test_budget_duration_wire_values() {
        assert_eq!(
            serde_json::to_string(&BudgetDuration::Weekly).unwrap(),
            "\"7d\""
        );
        assert_eq!("30d".parse::<BudgetDuration>(), Ok(BudgetDuration::Monthly));
        assert_eq!("daily".parse::<BudgetDuration>(), Ok(BudgetDuration::Daily));
        assert!("1y".parse::<BudgetDuration>().is_err());
    }

    #[test]
    fn test_budget_item_keeps_unknown_fields() {
        let item: BudgetItem = serde_json::from_value(serde_json::json!({
            "budget_id": "team-a",
            "max_budget": 100.0,
            "budget_duration": "30d",
            "budget_reset_at": "2024-06-01T00:00:00",
            "model_max_budget": {"gpt-4": 10}
        }))
        .unwrap();

        assert_eq!(item.duration(), Some(BudgetDuration::Monthly));
        assert!(item.extra.contains_key("model_max_budget"));
        assert_eq!(
            item.reset_at().unwrap().to_rfc3339(),
            "2024-06-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_form_sends_null_for_unset_limits() {
        let form = BudgetForm {
            budget_id: "team-a".to_string(),
            max_budget: Some(25.0),
            ..Default::default()
        };
        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "budget_id": "team-a",
                "tpm_limit": null,
                "rpm_limit": null,
                "max_budget": 25.0,
                "budget_duration": null
            })
        );
    }

    #[test]
    fn test_form_accepts_missing_and_null_fields() {
        let form: BudgetForm =
            serde_json::from_value(serde_json::json!({"budget_id": "team-a", "tpm_limit": null}))
                .unwrap();
        assert_eq!(form, BudgetForm { budget_id: "team-a".to_string(), ..Default::default() });
    }
}
