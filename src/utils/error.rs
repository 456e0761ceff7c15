use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Unsupported currency code: {code}")]
    UnsupportedCurrency { code: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::ApiError(_) | DashboardError::ApiStatusError { .. } => {
                ErrorCategory::Network
            }
            DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. }
            | DashboardError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DashboardError::ValidationError { .. }
            | DashboardError::UnsupportedCurrency { .. }
            | DashboardError::SerializationError(_) => ErrorCategory::Input,
            DashboardError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DashboardError::UnsupportedCurrency { .. } => ErrorSeverity::Low,
            DashboardError::ApiError(_) | DashboardError::ApiStatusError { .. } => {
                ErrorSeverity::Medium
            }
            DashboardError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DashboardError::ApiError(_) => "檢查 proxy URL 與網路連線後重試",
            DashboardError::ApiStatusError { status, .. } if *status == 401 || *status == 403 => {
                "檢查 access token 是否有效"
            }
            DashboardError::ApiStatusError { .. } => "查看 proxy 日誌確認請求內容",
            DashboardError::IoError(_) => "確認檔案路徑存在且有讀取權限",
            DashboardError::SerializationError(_) => "確認回應為合法 JSON",
            DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. } => "修正設定檔或命令列參數",
            DashboardError::MissingConfigError { .. } => "補上必要的設定值或環境變數",
            DashboardError::ValidationError { .. } => "修正表單欄位後重新送出",
            DashboardError::UnsupportedCurrency { .. } => "使用三碼 ISO 4217 幣別代碼，例如 USD",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the proxy: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
