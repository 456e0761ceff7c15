use dashboard_currency::{
    BudgetApi, BudgetDuration, BudgetEditor, BudgetForm, BudgetItem, DashboardError,
    HttpBudgetApi, NotificationLevel,
};
use httpmock::prelude::*;

fn existing_budget() -> BudgetItem {
    serde_json::from_value(serde_json::json!({
        "budget_id": "research",
        "max_budget": 100.0,
        "tpm_limit": 50000,
        "budget_duration": "30d",
        "created_at": "2024-05-01T12:00:00Z"
    }))
    .unwrap()
}

#[tokio::test]
async fn test_http_budget_api_posts_form() {
    let server = MockServer::start_async().await;
    let update_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/budget/update")
                .header("Authorization", "Bearer sk-1234")
                .json_body(serde_json::json!({
                    "budget_id": "research",
                    "tpm_limit": null,
                    "rpm_limit": 60,
                    "max_budget": null,
                    "budget_duration": "24h"
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "budget_id": "research",
                    "rpm_limit": 60,
                    "budget_duration": "24h",
                    "budget_reset_at": "2024-05-02T00:00:00+00:00"
                }));
        })
        .await;

    let api = HttpBudgetApi::new(&server.base_url()).unwrap();
    let form = BudgetForm {
        budget_id: "research".to_string(),
        rpm_limit: Some(60),
        budget_duration: Some(BudgetDuration::Daily),
        ..Default::default()
    };

    let item = api.update_budget("sk-1234", &form).await.unwrap();

    update_mock.assert_async().await;
    assert_eq!(item.rpm_limit, Some(60));
    assert_eq!(item.duration(), Some(BudgetDuration::Daily));
    assert!(item.reset_at().is_some());
}

#[tokio::test]
async fn test_http_budget_api_surfaces_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/budget/update");
            then.status(401).body("invalid token");
        })
        .await;

    let api = HttpBudgetApi::new(&server.base_url()).unwrap();
    let result = api
        .update_budget("bad", &BudgetForm::from(&existing_budget()))
        .await;

    match result {
        Err(DashboardError::ApiStatusError { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid token");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_editor_round_trip_against_proxy() {
    let server = MockServer::start_async().await;
    let update_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/budget/update")
                .json_body(serde_json::json!({
                    "budget_id": "research",
                    "tpm_limit": 50000,
                    "rpm_limit": null,
                    "max_budget": 250.0,
                    "budget_duration": "30d"
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "budget_id": "research",
                    "tpm_limit": 50000,
                    "max_budget": 250.0,
                    "budget_duration": "30d"
                }));
        })
        .await;

    let api = HttpBudgetApi::new(&server.base_url()).unwrap();
    let mut editor = BudgetEditor::new(api);
    editor.open(&existing_budget());
    editor.form_mut().max_budget = Some(250.0);

    let mut refreshed = 0;
    let updated = editor
        .submit(Some("sk-1234"), || refreshed += 1)
        .await
        .unwrap();

    update_mock.assert_async().await;
    assert_eq!(refreshed, 1);
    assert_eq!(updated.unwrap().max_budget, Some(250.0));
    assert_eq!(editor.budgets().len(), 1);
    assert_eq!(
        editor.notifications().last().map(|n| n.level),
        Some(NotificationLevel::Success)
    );
}

#[tokio::test]
async fn test_editor_reports_proxy_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/budget/update");
            then.status(500).body("database unavailable");
        })
        .await;

    let api = HttpBudgetApi::new(&server.base_url()).unwrap();
    let mut editor = BudgetEditor::new(api);
    editor.open(&existing_budget());
    editor.form_mut().max_budget = Some(1.0);

    let updated = editor
        .submit(Some("sk-1234"), || panic!("must not refresh on failure"))
        .await
        .unwrap();

    assert!(updated.is_none());
    assert!(editor.budgets().is_empty());
    assert_eq!(editor.form().max_budget, Some(1.0));

    let error = editor.notifications().last().unwrap();
    assert_eq!(error.level, NotificationLevel::Error);
    assert!(error.message.contains("database unavailable"));
}

#[tokio::test]
async fn test_editor_clears_prefilled_limit_on_proxy() {
    let server = MockServer::start_async().await;
    let update_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/budget/update")
                .json_body(serde_json::json!({
                    "budget_id": "research",
                    "tpm_limit": null,
                    "rpm_limit": null,
                    "max_budget": 100.0,
                    "budget_duration": "30d"
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "budget_id": "research",
                    "max_budget": 100.0,
                    "budget_duration": "30d"
                }));
        })
        .await;

    let api = HttpBudgetApi::new(&server.base_url()).unwrap();
    let mut editor = BudgetEditor::new(api);
    editor.open(&existing_budget());
    editor.form_mut().tpm_limit = None;

    let updated = editor.submit(Some("sk-1234"), || {}).await.unwrap();

    update_mock.assert_async().await;
    assert_eq!(updated.unwrap().tpm_limit, None);
}
