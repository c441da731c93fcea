//! Common test utilities for ledger integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use ledger_core::{PeriodFilter, Transaction, TransactionId, TransactionPatch};
use ledger_service::{create_router, AppState, ServiceConfig};
use ledger_store::{RocksStore, Store, StoreError};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: Option<TempDir>,
}

impl TestHarness {
    /// Create a new test harness with a fresh database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = RocksStore::open(temp_dir.path()).expect("Failed to open store");

        let mut harness = Self::with_store(Arc::new(store));
        harness._temp_dir = Some(temp_dir);
        harness
    }

    /// Create a harness around an arbitrary store implementation.
    pub fn with_store(store: Arc<dyn Store>) -> Self {
        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_dir: String::new(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let state = AppState::new(store, config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            _temp_dir: None,
        }
    }

    /// Create a transaction through the API and return its id.
    pub async fn create_transaction(
        &self,
        date: &str,
        description: &str,
        amount: f64,
        kind: &str,
    ) -> String {
        let response = self
            .server
            .post("/api/transactions")
            .json(&serde_json::json!({
                "date": date,
                "description": description,
                "amount": amount,
                "kind": kind,
            }))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        body["id"].as_str().expect("id in create response").to_string()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A store whose every operation fails, for exercising the store-failure
/// error taxonomy.
pub struct FailingStore;

impl FailingStore {
    fn fail<T>() -> ledger_store::Result<T> {
        Err(StoreError::Database("injected store failure".into()))
    }
}

impl Store for FailingStore {
    fn put_transaction(&self, _transaction: &Transaction) -> ledger_store::Result<()> {
        Self::fail()
    }

    fn get_transaction(
        &self,
        _id: &TransactionId,
    ) -> ledger_store::Result<Option<Transaction>> {
        Self::fail()
    }

    fn list_transactions(
        &self,
        _filter: &PeriodFilter,
    ) -> ledger_store::Result<Vec<Transaction>> {
        Self::fail()
    }

    fn update_transaction(
        &self,
        _id: &TransactionId,
        _patch: &TransactionPatch,
    ) -> ledger_store::Result<Transaction> {
        Self::fail()
    }

    fn delete_transaction(&self, _id: &TransactionId) -> ledger_store::Result<()> {
        Self::fail()
    }

    fn transaction_count(&self) -> ledger_store::Result<u64> {
        Self::fail()
    }
}
