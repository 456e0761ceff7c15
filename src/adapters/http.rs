use crate::domain::model::{BudgetForm, BudgetItem};
use crate::domain::ports::BudgetApi;
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::validate_url;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// 在 proxy base URL 後面接上端點路徑，保留 base 自帶的路徑前綴
pub fn endpoint(base_url: &str, path: &str) -> Result<Url> {
    validate_url("proxy.base_url", base_url)?;
    let mut base = Url::parse(base_url).map_err(|e| DashboardError::InvalidConfigValueError {
        field: "proxy.base_url".to_string(),
        value: base_url.to_string(),
        reason: e.to_string(),
    })?;
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }

    base.join(path.trim_start_matches('/'))
        .map_err(|e| DashboardError::InvalidConfigValueError {
            field: "proxy.base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })
}

/// 非 2xx 回應轉成 ApiStatusError，保留回應內容方便除錯
pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(DashboardError::ApiStatusError {
        status: status.as_u16(),
        body,
    })
}

/// Budget update calls against the proxy's `POST /budget/update`.
#[derive(Debug, Clone)]
pub struct HttpBudgetApi {
    update_url: Url,
    client: Client,
}

impl HttpBudgetApi {
    pub const UPDATE_PATH: &'static str = "budget/update";

    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        Ok(Self {
            update_url: endpoint(base_url, Self::UPDATE_PATH)?,
            client: build_client(timeout)?,
        })
    }

    pub fn update_url(&self) -> &Url {
        &self.update_url
    }
}

#[async_trait::async_trait]
impl BudgetApi for HttpBudgetApi {
    async fn update_budget(&self, access_token: &str, form: &BudgetForm) -> Result<BudgetItem> {
        tracing::debug!(
            "Updating budget {} via {}",
            form.budget_id,
            self.update_url
        );

        let response = self
            .client
            .post(self.update_url.clone())
            .bearer_auth(access_token)
            .json(form)
            .send()
            .await?;

        tracing::debug!("Budget update response status: {}", response.status());
        let response = ensure_success(response).await?;
        let item: BudgetItem = response.json().await?;
        Ok(item)
    }
}
