//! Transaction CRUD integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::json;

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn create_transaction_returns_id() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/transactions")
        .json(&json!({
            "date": "2024-03-15",
            "description": "rent",
            "amount": 1200.0,
            "kind": "debit",
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn create_with_invalid_kind_fails_and_persists_nothing() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/transactions")
        .json(&json!({
            "date": "2024-03-15",
            "description": "rent",
            "amount": 1200.0,
            "kind": "transfer",
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let list = harness.server.get("/api/transactions").await;
    list.assert_status_ok();
    let body: serde_json::Value = list.json();
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_with_negative_amount_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/transactions")
        .json(&json!({
            "date": "2024-03-15",
            "description": "rent",
            "amount": -5.0,
            "kind": "debit",
        }))
        .await;

    response.assert_status_bad_request();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn create_accepts_zero_amount() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/transactions")
        .json(&json!({
            "date": "2024-03-15",
            "description": "placeholder",
            "amount": 0.0,
            "kind": "credit",
        }))
        .await;

    response.assert_status_ok();
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn create_then_list_round_trips_all_fields() {
    let harness = TestHarness::new();
    let id = harness
        .create_transaction("2024-03-15", "rent", 1200.0, "debit")
        .await;

    let response = harness.server.get("/api/transactions").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);

    let tx = &items[0];
    assert_eq!(tx["id"], id);
    assert_eq!(tx["date"], "2024-03-15");
    assert_eq!(tx["description"], "rent");
    assert_eq!(tx["amount"], 1200.0);
    assert_eq!(tx["kind"], "debit");
    assert!(tx["created_at"].as_str().is_some());
    assert!(tx["updated_at"].as_str().is_some());
}

#[tokio::test]
async fn list_filters_by_month_and_year() {
    let harness = TestHarness::new();
    harness
        .create_transaction("2024-03-15", "rent", 1200.0, "debit")
        .await;
    harness
        .create_transaction("2024-03-20", "salary", 3000.0, "credit")
        .await;

    // A period with no records yields an empty sequence.
    let response = harness
        .server
        .get("/api/transactions")
        .add_query_param("month", 4)
        .add_query_param("year", 2024)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 0);

    // The matching period returns both.
    let response = harness
        .server
        .get("/api/transactions")
        .add_query_param("month", 3)
        .add_query_param("year", 2024)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_month_only_spans_years() {
    let harness = TestHarness::new();
    harness
        .create_transaction("2023-03-01", "old rent", 1100.0, "debit")
        .await;
    harness
        .create_transaction("2024-03-15", "rent", 1200.0, "debit")
        .await;
    harness
        .create_transaction("2024-06-15", "other", 10.0, "debit")
        .await;

    let response = harness
        .server
        .get("/api/transactions")
        .add_query_param("month", 3)
        .await;
    let body: serde_json::Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Store-default order: date ascending.
    assert_eq!(items[0]["date"], "2023-03-01");
    assert_eq!(items[1]["date"], "2024-03-15");
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn update_merges_supplied_fields_only() {
    let harness = TestHarness::new();
    let id = harness
        .create_transaction("2024-03-15", "rent", 1200.0, "debit")
        .await;

    let response = harness
        .server
        .patch(&format!("/api/transactions/{id}"))
        .json(&json!({"amount": 1250.0}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["updated"], true);

    let list: serde_json::Value = harness.server.get("/api/transactions").await.json();
    let tx = &list.as_array().unwrap()[0];
    assert_eq!(tx["amount"], 1250.0);
    assert_eq!(tx["description"], "rent");
    assert_eq!(tx["date"], "2024-03-15");
}

#[tokio::test]
async fn update_with_empty_body_is_a_no_op() {
    let harness = TestHarness::new();
    let id = harness
        .create_transaction("2024-03-15", "rent", 1200.0, "debit")
        .await;

    let before: serde_json::Value = harness.server.get("/api/transactions").await.json();
    let updated_at_before = before.as_array().unwrap()[0]["updated_at"].clone();

    let response = harness
        .server
        .patch(&format!("/api/transactions/{id}"))
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["updated"], false);

    let after: serde_json::Value = harness.server.get("/api/transactions").await.json();
    assert_eq!(after.as_array().unwrap()[0]["updated_at"], updated_at_before);
}

#[tokio::test]
async fn update_refreshes_updated_at() {
    let harness = TestHarness::new();
    let id = harness
        .create_transaction("2024-03-15", "rent", 1200.0, "debit")
        .await;

    let before: serde_json::Value = harness.server.get("/api/transactions").await.json();
    let updated_at_before = before.as_array().unwrap()[0]["updated_at"]
        .as_str()
        .unwrap()
        .to_string();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    harness
        .server
        .patch(&format!("/api/transactions/{id}"))
        .json(&json!({"description": "rent (march)"}))
        .await
        .assert_status_ok();

    let after: serde_json::Value = harness.server.get("/api/transactions").await.json();
    let updated_at_after = after.as_array().unwrap()[0]["updated_at"]
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(updated_at_after, updated_at_before);
}

#[tokio::test]
async fn update_unknown_id_is_not_found_and_touches_nothing() {
    let harness = TestHarness::new();
    harness
        .create_transaction("2024-03-15", "rent", 1200.0, "debit")
        .await;

    let ghost = ledger_core::TransactionId::generate();
    let response = harness
        .server
        .patch(&format!("/api/transactions/{ghost}"))
        .json(&json!({"amount": 1.0}))
        .await;

    response.assert_status_not_found();
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");

    let list: serde_json::Value = harness.server.get("/api/transactions").await.json();
    assert_eq!(list.as_array().unwrap()[0]["amount"], 1200.0);
}

#[tokio::test]
async fn update_with_malformed_id_is_a_client_error() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .patch("/api/transactions/not-a-ulid")
        .json(&json!({"amount": 1.0}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn update_rejects_negative_amount() {
    let harness = TestHarness::new();
    let id = harness
        .create_transaction("2024-03-15", "rent", 1200.0, "debit")
        .await;

    let response = harness
        .server
        .patch(&format!("/api/transactions/{id}"))
        .json(&json!({"amount": -3.0}))
        .await;

    response.assert_status_bad_request();

    let list: serde_json::Value = harness.server.get("/api/transactions").await.json();
    assert_eq!(list.as_array().unwrap()[0]["amount"], 1200.0);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn delete_removes_the_record() {
    let harness = TestHarness::new();
    let id = harness
        .create_transaction("2024-03-15", "rent", 1200.0, "debit")
        .await;

    let response = harness
        .server
        .delete(&format!("/api/transactions/{id}"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted"], true);

    let list: serde_json::Value = harness.server.get("/api/transactions").await.json();
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let harness = TestHarness::new();

    let ghost = ledger_core::TransactionId::generate();
    let response = harness
        .server
        .delete(&format!("/api/transactions/{ghost}"))
        .await;

    response.assert_status_not_found();
}
