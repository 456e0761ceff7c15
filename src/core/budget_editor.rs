use crate::domain::model::{BudgetDuration, BudgetForm, BudgetItem, Notification};
use crate::domain::ports::{BudgetApi, CurrencyConfigProvider};
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::Validate;
use std::time::Duration;

pub const ERROR_NOTIFICATION_DURATION: Duration = Duration::from_secs(20);

impl Validate for BudgetForm {
    fn validate(&self) -> Result<()> {
        if self.budget_id.trim().is_empty() {
            return Err(DashboardError::ValidationError {
                message: "Please input a human-friendly name for the budget".to_string(),
            });
        }
        if let Some(max_budget) = self.max_budget {
            if !max_budget.is_finite() || max_budget < 0.0 {
                return Err(DashboardError::ValidationError {
                    message: format!("max_budget must be a non-negative number, got {}", max_budget),
                });
            }
        }
        Ok(())
    }
}

/// Headless state of the "Edit Budget" dialog.
///
/// The UI binds to [`BudgetEditor::form_mut`] and renders
/// [`BudgetEditor::notifications`]; submits go through a [`BudgetApi`].
/// Concurrent submits are not de-duplicated.
pub struct BudgetEditor<A: BudgetApi> {
    api: A,
    visible: bool,
    initial: BudgetForm,
    form: BudgetForm,
    budgets: Vec<BudgetItem>,
    notifications: Vec<Notification>,
}

impl<A: BudgetApi> BudgetEditor<A> {
    pub fn new(api: A) -> Self {
        Self::with_budgets(api, Vec::new())
    }

    pub fn with_budgets(api: A, budgets: Vec<BudgetItem>) -> Self {
        Self {
            api,
            visible: false,
            initial: BudgetForm::default(),
            form: BudgetForm::default(),
            budgets,
            notifications: Vec::new(),
        }
    }

    /// 以既有預算預填表單並顯示對話框
    pub fn open(&mut self, existing: &BudgetItem) {
        tracing::debug!("Opening budget editor for {}", existing.budget_id);
        self.initial = BudgetForm::from(existing);
        self.form = self.initial.clone();
        self.visible = true;
    }

    pub fn ok(&mut self) {
        self.close();
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.visible = false;
        self.reset_form();
    }

    pub fn reset_form(&mut self) {
        self.form = self.initial.clone();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn form(&self) -> &BudgetForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BudgetForm {
        &mut self.form
    }

    pub fn budgets(&self) -> &[BudgetItem] {
        &self.budgets
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn max_budget_label<P: CurrencyConfigProvider + ?Sized>(provider: &P) -> String {
        format!("Max Budget ({})", provider.currency_code())
    }

    pub fn duration_options() -> [BudgetDuration; 3] {
        BudgetDuration::ALL
    }

    /// 送出表單。沒有 access token 時不做任何事；驗證失敗回傳錯誤且不發請求；
    /// API 失敗只會產生錯誤提示，表單維持原狀。
    pub async fn submit<F>(
        &mut self,
        access_token: Option<&str>,
        on_complete: F,
    ) -> Result<Option<BudgetItem>>
    where
        F: FnOnce(),
    {
        let Some(token) = access_token else {
            tracing::debug!("No access token, skipping budget update");
            return Ok(None);
        };

        self.form.validate()?;

        self.notifications.push(Notification::info("Making API Call"));
        self.visible = true;

        match self.api.update_budget(token, &self.form).await {
            Ok(updated) => {
                tracing::info!("✅ Budget {} updated", updated.budget_id);
                self.budgets.push(updated.clone());
                self.notifications.push(Notification::success("Budget Updated"));
                self.reset_form();
                on_complete();
                Ok(Some(updated))
            }
            Err(e) => {
                tracing::error!("❌ Budget update failed: {}", e);
                self.notifications.push(Notification::error(
                    format!("Error creating the key: {}", e),
                    ERROR_NOTIFICATION_DURATION,
                ));
                Ok(None)
            }
        }
    }
}
